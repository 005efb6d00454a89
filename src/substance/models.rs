use crate::substance::error::SubstanceError;
use crate::units::resolve_multiplier;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A named physical value with its unit and the SI equivalent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub value: f64,
    pub unit: String,
    /// Factor from `unit` to SI, computed once at construction
    pub multiplier: f64,
    /// `value * multiplier`
    pub value_si: f64,
    pub description: String,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, SubstanceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SubstanceError::EmptyName);
        }

        let unit = unit.into();
        let multiplier = resolve_multiplier(&unit)?;

        Ok(Self {
            name,
            value,
            unit,
            multiplier,
            value_si: value * multiplier,
            description: description.into(),
        })
    }

    /// Value in SI base units
    pub fn get(&self) -> f64 {
        self.value_si
    }

    /// Value expressed in another unit, e.g. a density stored as kg/m3 read back in g/cm3
    pub fn convert_to(&self, unit: &str) -> Result<f64, SubstanceError> {
        Ok(self.value_si / resolve_multiplier(unit)?)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} = {}", self.name, self.value)
        } else {
            write!(f, "{} = {} {}", self.name, self.value, self.unit)
        }
    }
}

/// Function computing a derived value from a substance's parameters
pub type SubstanceFn = Box<dyn Fn(&HashMap<String, Parameter>) -> f64 + Send + Sync>;

/// A named material: its parameters and functions derived from them
pub struct Substance {
    pub name: String,
    pub parameters: HashMap<String, Parameter>,
    pub functions: HashMap<String, SubstanceFn>,
}

impl Substance {
    /// Parameters are stored under their own `name`, whatever key the
    /// caller used for them.
    pub fn new(
        name: impl Into<String>,
        parameters: HashMap<String, Parameter>,
        functions: HashMap<String, SubstanceFn>,
    ) -> Result<Self, SubstanceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SubstanceError::EmptyName);
        }

        let parameters = parameters
            .into_values()
            .map(|p| (p.name.clone(), p))
            .collect();

        Ok(Self {
            name,
            parameters,
            functions,
        })
    }

    pub fn with_function<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&HashMap<String, Parameter>) -> f64 + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Box::new(function));
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// Insert a parameter, returning the one it replaced
    pub fn insert_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        self.parameters.insert(parameter.name.clone(), parameter)
    }

    pub fn remove_parameter(&mut self, name: &str) -> Option<Parameter> {
        self.parameters.remove(name)
    }

    /// Run a registered function against the current parameters
    pub fn evaluate(&self, function: &str) -> Option<f64> {
        self.functions
            .get(function)
            .map(|f| f(&self.parameters))
    }

    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parameters sorted by name, for stable listings
    pub fn sorted_parameters(&self) -> Vec<&Parameter> {
        let mut parameters: Vec<&Parameter> = self.parameters.values().collect();
        parameters.sort_by(|a, b| a.name.cmp(&b.name));
        parameters
    }
}

impl fmt::Debug for Substance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substance")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("functions", &self.function_names())
            .finish()
    }
}

// Functions can't be serialized, only their names are exported
impl Serialize for Substance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Substance", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("parameters", &self.sorted_parameters())?;
        state.serialize_field("functions", &self.function_names())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitError;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-10,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_new_parameter_empty_name() {
        assert_eq!(
            Parameter::new("", 30.0, "kg", "mass"),
            Err(SubstanceError::EmptyName)
        );
        assert_eq!(
            Parameter::new("   ", 30.0, "kg", "mass"),
            Err(SubstanceError::EmptyName)
        );
    }

    #[test]
    fn test_new_parameter_mass_in_kg() {
        let p = Parameter::new("Mass", 30.0, "kg", "Mass").unwrap();
        assert_eq!(p.name, "Mass");
        assert_eq!(p.value, 30.0);
        assert_eq!(p.unit, "kg");
        assert_close(p.multiplier, 1.0);
        assert_close(p.value_si, 30.0);
        assert_eq!(p.description, "Mass");
    }

    #[test]
    fn test_new_parameter_prefixed_units() {
        let p = Parameter::new("Mass", 1000.0, "g", "Mass in grams").unwrap();
        assert_close(p.multiplier, 0.001);
        assert_close(p.get(), 1.0);

        let p = Parameter::new("Distance", 5.0, "km", "Distance in kilometers").unwrap();
        assert_close(p.multiplier, 1000.0);
        assert_close(p.get(), 5000.0);

        let p = Parameter::new("Time", 100.0, "ms", "Time in milliseconds").unwrap();
        assert_close(p.multiplier, 0.001);
        assert_close(p.get(), 0.1);
    }

    #[test]
    fn test_new_parameter_unitless() {
        let p = Parameter::new("Count", 42.0, "", "Unitless quantity").unwrap();
        assert_eq!(p.multiplier, 1.0);
        assert_eq!(p.get(), 42.0);
    }

    #[test]
    fn test_new_parameter_invalid_unit() {
        let err = Parameter::new("Invalid", 10.0, "xyz", "Invalid unit").unwrap_err();
        match err {
            SubstanceError::InvalidUnit(UnitError::InvalidFormat { token, .. }) => {
                assert_eq!(token, "xyz")
            }
            other => panic!("Expected InvalidUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_parameter_get() {
        for value in [42.5, 0.0, -10.5] {
            let p = Parameter::new("p", value, "", "").unwrap();
            assert_eq!(p.get(), value);
        }
    }

    #[test]
    fn test_parameter_convert_to() {
        let density = Parameter::new("density", 7.9, "g/cm3", "").unwrap();
        assert_close(density.get(), 7900.0);
        assert_close(density.convert_to("kg/m3").unwrap(), 7900.0);
        assert_close(density.convert_to("g/cm^3").unwrap(), 7.9);
        assert!(density.convert_to("lb/ft3").is_err());
    }

    #[test]
    fn test_parameter_display() {
        let p = Parameter::new("E", 200.0, "GPa", "").unwrap();
        assert_eq!(p.to_string(), "E = 200 GPa");
        let p = Parameter::new("mu", 0.3, "", "").unwrap();
        assert_eq!(p.to_string(), "mu = 0.3");
    }

    #[test]
    fn test_new_substance_empty_name() {
        let err = Substance::new("", HashMap::new(), HashMap::new()).unwrap_err();
        assert_eq!(err, SubstanceError::EmptyName);
    }

    #[test]
    fn test_new_substance_without_parameters() {
        let water = Substance::new("Water", HashMap::new(), HashMap::new()).unwrap();
        assert_eq!(water.name, "Water");
        assert!(water.parameters.is_empty());
        assert!(water.functions.is_empty());
    }

    #[test]
    fn test_new_substance_keys_parameters_by_name() {
        let mut parameters = HashMap::new();
        parameters.insert(
            "youngs_modulus".to_string(),
            Parameter::new("E", 200.0, "GPa", "").unwrap(),
        );
        let steel = Substance::new("Steel", parameters, HashMap::new()).unwrap();

        assert!(steel.parameter("youngs_modulus").is_none());
        assert_eq!(steel.parameter("E").map(|p| p.value), Some(200.0));

        let mut steel = steel;
        assert!(steel.remove_parameter("E").is_some());
        assert!(steel.parameters.is_empty());
    }

    #[test]
    fn test_substance_functions() {
        let mut parameters = HashMap::new();
        let density = Parameter::new("density", 1.225, "kg/m3", "").unwrap();
        parameters.insert(density.name.clone(), density);

        let air = Substance::new("Air", parameters, HashMap::new())
            .unwrap()
            .with_function("calculate", |params| params["density"].value);

        assert_eq!(air.parameters.len(), 1);
        assert_eq!(air.function_names(), vec!["calculate"]);
        assert_eq!(air.evaluate("calculate"), Some(1.225));
        assert_eq!(air.evaluate("missing"), None);
    }

    #[test]
    fn test_substance_parameter_updates() {
        let mut steel = Substance::new("Steel", HashMap::new(), HashMap::new()).unwrap();
        assert!(steel
            .insert_parameter(Parameter::new("E", 200.0, "GPa", "").unwrap())
            .is_none());
        let replaced = steel
            .insert_parameter(Parameter::new("E", 210.0, "GPa", "").unwrap())
            .unwrap();
        assert_eq!(replaced.value, 200.0);
        assert_eq!(steel.parameter("E").map(|p| p.value), Some(210.0));

        assert!(steel.remove_parameter("E").is_some());
        assert!(steel.parameter("E").is_none());
        assert!(steel.remove_parameter("E").is_none());
    }

    #[test]
    fn test_substance_serializes_function_names() {
        let mut parameters = HashMap::new();
        let mu = Parameter::new("mu", 0.3, "", "Poisson ratio").unwrap();
        parameters.insert(mu.name.clone(), mu);
        let steel = Substance::new("Steel", parameters, HashMap::new())
            .unwrap()
            .with_function("shear_modulus", |_| 0.0);

        let json = serde_json::to_value(&steel).unwrap();
        assert_eq!(json["name"], "Steel");
        assert_eq!(json["parameters"][0]["name"], "mu");
        assert_eq!(json["parameters"][0]["value_si"], 0.3);
        assert_eq!(json["functions"][0], "shear_modulus");
    }
}
