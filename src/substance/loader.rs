use crate::substance::models::{Parameter, Substance};
use crate::substance::report::{LoadReport, SkipReason};
use crate::units::parse_quantity;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use toml::Value;

const KNOWN_KEYS: [&str; 2] = ["name", "parameters"];

/// Table form of a parameter: `density = { value = 7.9, unit = "g/cm3" }`
#[derive(Debug, Deserialize)]
struct ParameterEntry {
    value: f64,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    description: String,
}

pub fn load_substance_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<(Substance, LoadReport), Box<dyn std::error::Error>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(format!("File does not exist: {}", path.display()).into());
    }

    if !path.is_file() {
        return Err(format!("Path is not a file: {}", path.display()).into());
    }

    let content = fs::read_to_string(path)?;
    load_substance_from_str(&content)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e).into())
}

/// Load a substance from TOML content.
/// Parameters that can't be built are skipped and listed in the report.
pub fn load_substance_from_str(
    content: &str,
) -> Result<(Substance, LoadReport), Box<dyn std::error::Error>> {
    let value: Value = toml::from_str(content)?;
    let mut report = LoadReport::default();

    let name = value
        .get("name")
        .ok_or("Missing 'name' field")?
        .as_str()
        .ok_or("'name' must be a string")?;

    let mut parameters = HashMap::new();

    match value.get("parameters") {
        Some(Value::Table(table)) => {
            for (key, entry) in table {
                match parameter_from_value(key, entry) {
                    Ok(parameter) => {
                        parameters.insert(key.clone(), parameter);
                    }
                    Err(reason) => report.skip(key, reason),
                }
            }
        }
        Some(_) => return Err("'parameters' must be a table".into()),
        None => {}
    }

    if let Some(table) = value.as_table() {
        for key in table.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            report.ignore_key(key);
        }
    }

    let substance = Substance::new(name, parameters, HashMap::new())?;
    Ok((substance, report))
}

fn parameter_from_value(name: &str, value: &Value) -> Result<Parameter, SkipReason> {
    let parameter = match value {
        Value::Integer(i) => Parameter::new(name, *i as f64, "", ""),
        Value::Float(f) => Parameter::new(name, *f, "", ""),
        Value::String(s) => {
            let (amount, unit) =
                parse_quantity(s).ok_or_else(|| SkipReason::NotAQuantity(s.clone()))?;
            Parameter::new(name, amount, unit, "")
        }
        Value::Table(_) => {
            let entry: ParameterEntry = value
                .clone()
                .try_into()
                .map_err(|e| SkipReason::InvalidTable(e.to_string()))?;
            Parameter::new(name, entry.value, entry.unit, entry.description)
        }
        other => return Err(SkipReason::UnsupportedType(other.type_str())),
    };

    parameter.map_err(SkipReason::from)
}
