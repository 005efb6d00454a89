// SI unit expressions: "km/h2", "kg*m/s^2", "μm" -> multiplier to SI base units
// Pipeline: strip whitespace -> normalize "^N" powers -> tokenize on * and /
// -> extract exponent -> resolve prefix + base unit -> fold into one product

pub mod detector;
pub mod error;
pub mod multiplier;
pub mod prefix;
pub mod resolver;
pub mod tokenizer;


pub use detector::{looks_like_quantity, parse_quantity};
pub use error::{UnitError, UnknownUnit};
pub use multiplier::{calculate_multiplier, is_numeric, resolve_multiplier};
pub use prefix::{Prefix, BASE_UNITS, PREFIXES};
pub use resolver::{extract_power, parse_unit_with_prefix, ResolvedUnit};
pub use tokenizer::{normalize_powers, split_by_operators, tokenize, Operator, Token};
