use lazy_static::lazy_static;

/// A decimal SI prefix and the power of ten it stands for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefix {
    pub symbol: &'static str,
    pub factor: f64,
}

impl Prefix {
    const fn new(symbol: &'static str, factor: f64) -> Self {
        Self { symbol, factor }
    }
}

/// SI prefixes from quecto to quetta, ordered by factor
pub static PREFIXES: [Prefix; 25] = [
    Prefix::new("q", 1e-30),
    Prefix::new("r", 1e-27),
    Prefix::new("y", 1e-24),
    Prefix::new("z", 1e-21),
    Prefix::new("a", 1e-18),
    Prefix::new("f", 1e-15),
    Prefix::new("p", 1e-12),
    Prefix::new("n", 1e-9),
    Prefix::new("μ", 1e-6),
    Prefix::new("m", 1e-3),
    Prefix::new("c", 1e-2),
    Prefix::new("d", 1e-1),
    Prefix::new("", 1.0),
    Prefix::new("da", 1e1),
    Prefix::new("h", 1e2),
    Prefix::new("k", 1e3),
    Prefix::new("M", 1e6),
    Prefix::new("G", 1e9),
    Prefix::new("T", 1e12),
    Prefix::new("P", 1e15),
    Prefix::new("E", 1e18),
    Prefix::new("Z", 1e21),
    Prefix::new("Y", 1e24),
    Prefix::new("R", 1e27),
    Prefix::new("Q", 1e30),
];

/// SI base and derived unit symbols whose multiplier is exactly 1
pub static BASE_UNITS: &[&str] = &[
    // base
    "m", "kg", "s", "A", "K", "mol", "cd",
    // derived
    "Pa", "N", "J", "W", "Hz", "C", "V", "F", "Ω", "S", "Wb", "T", "H", "lm", "lx", "Bq",
    "Gy", "Sv", "kat", "rad", "sr",
];

/// Gram relative to the kilogram base
pub const GRAM: f64 = 0.001;

/// Hour relative to the second base
pub const HOUR: f64 = 3600.0;

lazy_static! {
    /// Non-empty prefixes, longest symbol first
    static ref PREFIXES_LONGEST_FIRST: Vec<&'static Prefix> = {
        let mut prefixes: Vec<&'static Prefix> =
            PREFIXES.iter().filter(|p| !p.symbol.is_empty()).collect();
        prefixes.sort_by(|a, b| b.symbol.chars().count().cmp(&a.symbol.chars().count()));
        prefixes
    };
}

pub fn prefixes_longest_first() -> &'static [&'static Prefix] {
    &PREFIXES_LONGEST_FIRST
}

pub fn is_base_unit(symbol: &str) -> bool {
    BASE_UNITS.contains(&symbol)
}

pub fn prefix_factor(symbol: &str) -> Option<f64> {
    PREFIXES
        .iter()
        .find(|p| p.symbol == symbol)
        .map(|p| p.factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_factors_are_unique_and_ascending() {
        for pair in PREFIXES.windows(2) {
            assert!(
                pair[0].factor < pair[1].factor,
                "{} ({}) should be smaller than {} ({})",
                pair[0].symbol,
                pair[0].factor,
                pair[1].symbol,
                pair[1].factor
            );
        }
    }

    #[test]
    fn test_prefix_table_spans_all_decades() {
        let expected = [
            1e-30, 1e-27, 1e-24, 1e-21, 1e-18, 1e-15, 1e-12, 1e-9, 1e-6, 1e-3, 1e-2, 1e-1, 1.0,
            1e1, 1e2, 1e3, 1e6, 1e9, 1e12, 1e15, 1e18, 1e21, 1e24, 1e27, 1e30,
        ];
        let factors: Vec<f64> = PREFIXES.iter().map(|p| p.factor).collect();
        assert_eq!(factors, expected);
    }

    #[test]
    fn test_empty_prefix_is_identity() {
        assert_eq!(prefix_factor(""), Some(1.0));
        assert_eq!(prefix_factor("k"), Some(1e3));
        assert_eq!(prefix_factor("μ"), Some(1e-6));
        assert_eq!(prefix_factor("x"), None);
    }

    #[test]
    fn test_longest_first_order() {
        let ordered = prefixes_longest_first();
        assert_eq!(ordered.len(), PREFIXES.len() - 1);
        assert_eq!(ordered[0].symbol, "da");
        assert!(ordered.iter().all(|p| !p.symbol.is_empty()));
    }

    #[test]
    fn test_base_unit_membership_is_exact() {
        assert!(is_base_unit("m"));
        assert!(is_base_unit("Pa"));
        assert!(is_base_unit("mol"));
        assert!(!is_base_unit("pa"));
        assert!(!is_base_unit("meters"));
        assert!(!is_base_unit("g"));
        assert!(!is_base_unit("h"));
    }
}
