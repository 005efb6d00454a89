use crate::substance::error::SubstanceError;
use std::fmt;
use thiserror::Error;

/// Why a parameter entry was left out of a loaded substance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Invalid(#[from] SubstanceError),
    #[error("'{0}' is not a quantity")]
    NotAQuantity(String),
    #[error("unsupported parameter type '{0}'")]
    UnsupportedType(&'static str),
    #[error("invalid parameter table: {0}")]
    InvalidTable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedParameter {
    pub name: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parameters.{}: {}", self.name, self.reason)
    }
}

/// What a substance file contained that did not make it into the substance.
/// Skipped parameters mean the substance is incomplete; unknown top-level
/// keys are only ignored.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub skipped: Vec<SkippedParameter>,
    pub unknown_keys: Vec<String>,
}

impl LoadReport {
    pub fn skip(&mut self, name: &str, reason: SkipReason) {
        log::warn!("Skipping parameter '{}': {}", name, reason);
        self.skipped.push(SkippedParameter {
            name: name.to_string(),
            reason,
        });
    }

    pub fn ignore_key(&mut self, key: &str) {
        self.unknown_keys.push(key.to_string());
    }

    /// Every parameter entry in the file was loaded
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.skipped.is_empty() || !self.unknown_keys.is_empty()
    }

    pub fn skipped_reason(&self, name: &str) -> Option<&SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.reason)
    }

    /// One line per issue, skipped parameters first
    pub fn messages(&self) -> Vec<String> {
        self.skipped
            .iter()
            .map(|s| format!("skipped {}", s))
            .chain(
                self.unknown_keys
                    .iter()
                    .map(|k| format!("ignored unknown key '{}'", k)),
            )
            .collect()
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in self.messages() {
            writeln!(f, "{}", message)?;
        }
        Ok(())
    }
}
