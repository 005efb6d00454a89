pub mod substance;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
