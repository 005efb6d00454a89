use crate::units::UnitError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstanceError {
    #[error("name must not be empty")]
    EmptyName,
    #[error(transparent)]
    InvalidUnit(#[from] UnitError),
}
