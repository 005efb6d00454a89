use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect quantity strings
    /// Matches: number (optional sign, decimal, scientific notation) + whitespace + unit expression
    /// Examples: "30 kg", "10.5 m", ".5 kg", "5 km/h", "1e3 Pa", "-20 K", "7.9 g/cm^3"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<value>[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?)\s+(?P<unit>[^\s\d].*)$"
    ).unwrap();
}

/// Check if a string looks like a quantity: a number followed by a unit
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Split a quantity string into its value and unit expression.
/// The unit is returned as written; resolving it is up to the caller.
pub fn parse_quantity(s: &str) -> Option<(f64, &str)> {
    let captures = QUANTITY_PATTERN.captures(s.trim())?;
    let value = captures.name("value")?.as_str().parse::<f64>().ok()?;
    let unit = captures.name("unit")?.as_str().trim_end();
    Some((value, unit))
}
