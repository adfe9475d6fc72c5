//! Configuration errors raised when finalizing a truck build.

use crate::options::DomainViolation;
use thiserror::Error;

/// Errors that can occur when building a validated truck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid truck configuration: {}", join_violations(.violations))]
    Invalid { violations: Vec<DomainViolation> },
}

impl ConfigError {
    /// Every violation found, in field order.
    pub fn violations(&self) -> &[DomainViolation] {
        match self {
            Self::Invalid { violations } => violations,
        }
    }
}

fn join_violations(violations: &[DomainViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
