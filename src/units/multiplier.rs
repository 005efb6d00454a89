use crate::units::error::UnitError;
use crate::units::resolver::ResolvedUnit;
use crate::units::tokenizer::{normalize_powers, tokenize};

/// Multiplier that converts a value in `unit` into SI base units.
///
/// Whitespace is ignored and an empty expression is dimensionless (1.0).
/// Tokens are folded left to right: `*` (or no operator) multiplies and
/// `/` divides, so "kg*m/s2" is ((1 * kg) * m) / s^2. Plain numbers in
/// the expression ("2*kg") are skipped. The first token that cannot be
/// resolved fails the whole expression, and so does a product that is not
/// a finite positive number.
pub fn calculate_multiplier(unit: &str) -> Result<f64, UnitError> {
    let cleaned: String = unit.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Ok(1.0);
    }

    let normalized = normalize_powers(&cleaned);
    let mut multiplier = 1.0;

    for token in tokenize(&normalized) {
        if token.unit.is_empty() {
            return Err(UnitError::MissingOperand {
                token: token.raw.to_string(),
            });
        }

        if is_numeric(token.unit) {
            log::trace!("skipping numeric token '{}' in '{}'", token.raw, unit);
            continue;
        }

        let resolved =
            ResolvedUnit::resolve(token.unit).map_err(|source| UnitError::InvalidFormat {
                token: token.raw.to_string(),
                source,
            })?;

        log::trace!(
            "'{}': base '{}' factor {} exponent {}",
            token.raw,
            resolved.base,
            resolved.factor,
            resolved.exponent
        );

        multiplier = token.operator.apply(multiplier, resolved.multiplier());
    }

    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(UnitError::OutOfRange {
            expression: cleaned.clone(),
        });
    }

    Ok(multiplier)
}

/// Entry point used by the data layer; same as [`calculate_multiplier`]
pub fn resolve_multiplier(unit: &str) -> Result<f64, UnitError> {
    calculate_multiplier(unit)
}

/// Whether `s` is a plain number such as "2", "-1.5" or "1.23e-4"
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.parse::<f64>().is_ok()
}
