pub mod error;
pub mod loader;
pub mod models;
pub mod report;


pub use error::SubstanceError;
pub use loader::*;
pub use models::*;
pub use report::*;
