use thiserror::Error;

/// A unit candidate that matches no prefix and base unit combination
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit '{candidate}'")]
pub struct UnknownUnit {
    pub candidate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("invalid unit format '{token}': {source}")]
    InvalidFormat {
        token: String,
        #[source]
        source: UnknownUnit,
    },
    #[error("invalid unit format '{token}': operator without a unit")]
    MissingOperand { token: String },
    /// The product over- or underflowed f64, e.g. "qm11" (1e-330)
    #[error("invalid unit format '{expression}': multiplier out of range")]
    OutOfRange { expression: String },
}

impl UnitError {
    /// The token of the expression that could not be resolved, or the whole
    /// expression when its multiplier is out of range
    pub fn token(&self) -> &str {
        match self {
            UnitError::InvalidFormat { token, .. } => token,
            UnitError::MissingOperand { token } => token,
            UnitError::OutOfRange { expression } => expression,
        }
    }
}
