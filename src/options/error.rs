//! Violations found when checking option codes against the catalog.

use thiserror::Error;

/// A single option code outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainViolation {
    #[error("Unknown engine type code {0}")]
    UnknownEngine(i32),

    #[error("Unknown transmission type code {0}")]
    UnknownTransmission(i32),

    #[error("Unknown trim code {0}")]
    UnknownTrim(i32),

    #[error("Unknown package code {0}")]
    UnknownPackage(i32),
}
