// WebAssembly bindings for unit resolution and substance loading
use crate::substance;
use crate::units;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct SubstanceWasm {}

impl Default for SubstanceWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SubstanceWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Multiplier converting a value in `unit` to SI base units
    #[wasm_bindgen]
    pub fn resolve_multiplier(&self, unit: &str) -> Result<f64, JsValue> {
        units::resolve_multiplier(unit).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Convert a value in `unit` to SI base units
    #[wasm_bindgen]
    pub fn to_si(&self, value: f64, unit: &str) -> Result<f64, JsValue> {
        Ok(value * self.resolve_multiplier(unit)?)
    }

    /// Load a substance from TOML file contents
    /// Returns JSON string of the substance and what was skipped or ignored while loading
    #[wasm_bindgen]
    pub fn load_substance(&self, content: &str) -> Result<String, JsValue> {
        let (substance, report) = substance::load_substance_from_str(content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load substance: {}", e)))?;

        let json = serde_json::to_string(&serde_json::json!({
            "substance": substance,
            "complete": report.is_complete(),
            "issues": report.messages(),
        }))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize substance: {}", e)))?;

        Ok(json)
    }
}
