use crate::units::error::UnknownUnit;
use crate::units::prefix::{is_base_unit, prefixes_longest_first, GRAM, HOUR};

/// A token's unit after power extraction and prefix resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedUnit<'a> {
    /// Prefixed unit with the exponent stripped, e.g. "km" for "km2"
    pub base: &'a str,
    pub exponent: f64,
    /// Multiplier of `base` relative to SI
    pub factor: f64,
}

impl<'a> ResolvedUnit<'a> {
    pub fn resolve(unit: &'a str) -> Result<Self, UnknownUnit> {
        let (base, exponent) = extract_power(unit);
        let factor = parse_unit_with_prefix(base)?;
        Ok(Self {
            base,
            exponent,
            factor,
        })
    }

    /// Factor raised to the exponent
    pub fn multiplier(&self) -> f64 {
        self.factor.powf(self.exponent)
    }
}

/// Split a trailing digit run off as the exponent.
/// "km2" -> ("km", 2), "kg" -> ("kg", 1), "m^3" -> ("m^", 3)
pub fn extract_power(unit: &str) -> (&str, f64) {
    let base = unit.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &unit[base.len()..];
    if digits.is_empty() {
        return (unit, 1.0);
    }

    let exponent = digits
        .bytes()
        .fold(0.0, |acc, b| acc * 10.0 + f64::from(b - b'0'));
    (base, exponent)
}

/// Multiplier of a prefixed unit symbol relative to SI.
///
/// Resolution order matters for ambiguous symbols:
/// 1. irregular units (`g`, `h`)
/// 2. prefix + base unit, longest prefix first (`da` before `d`),
///    including prefixed grams
/// 3. bare base unit
pub fn parse_unit_with_prefix(unit: &str) -> Result<f64, UnknownUnit> {
    match unit {
        "g" => return Ok(GRAM),
        "h" => return Ok(HOUR),
        _ => {}
    }

    for prefix in prefixes_longest_first() {
        if let Some(rest) = unit.strip_prefix(prefix.symbol) {
            if is_base_unit(rest) {
                return Ok(prefix.factor);
            }
            if rest == "g" {
                return Ok(prefix.factor * GRAM);
            }
        }
    }

    if is_base_unit(unit) {
        return Ok(1.0);
    }

    Err(UnknownUnit {
        candidate: unit.to_string(),
    })
}
