//! One type per build step.
//!
//! Each step owns the values gathered so far and exposes only the next
//! legal call. Step types have private fields, so the only way to obtain
//! one is through the step before it.

use crate::builder::error::ConfigError;
use crate::truck::{PickupTruck, TruckConfig};
use stillwater::validation::Validation;

/// First step: choose the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a build step does nothing until the next step is called"]
pub struct EngineStep {
    _private: (),
}

impl EngineStep {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }

    /// Select the engine type. Accepts a raw code or an
    /// [`EngineType`](crate::options::EngineType).
    pub fn with_engine(self, engine: impl Into<i32>) -> TransmissionStep {
        TransmissionStep {
            engine: engine.into(),
        }
    }
}

/// Second step: choose the transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a build step does nothing until the next step is called"]
pub struct TransmissionStep {
    engine: i32,
}

impl TransmissionStep {
    /// Select the transmission type.
    pub fn and_transmission(self, transmission: impl Into<i32>) -> TrimStep {
        TrimStep {
            engine: self.engine,
            transmission: transmission.into(),
        }
    }
}

/// Third step: choose the trim level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a build step does nothing until the next step is called"]
pub struct TrimStep {
    engine: i32,
    transmission: i32,
}

impl TrimStep {
    /// Select the trim option.
    pub fn and_trim_option(self, trim: impl Into<i32>) -> PackageStep {
        PackageStep {
            engine: self.engine,
            transmission: self.transmission,
            trim: trim.into(),
        }
    }
}

/// Fourth step: choose the package.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a build step does nothing until the next step is called"]
pub struct PackageStep {
    engine: i32,
    transmission: i32,
    trim: i32,
}

impl PackageStep {
    /// Select the package option. After this the truck can be built.
    pub fn and_package(self, package: impl Into<i32>) -> PickupTruckBuilder {
        PickupTruckBuilder {
            config: TruckConfig::new(self.engine, self.transmission, self.trim, package.into()),
        }
    }
}

/// Final step: every selection is present.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "call build() or try_build() to obtain the truck"]
pub struct PickupTruckBuilder {
    config: TruckConfig,
}

impl PickupTruckBuilder {
    /// Configuration that will be built.
    pub fn config(&self) -> &TruckConfig {
        &self.config
    }

    /// Build the truck. Codes are not checked against the option catalog.
    ///
    /// The truck starts in Park under [`TransitionTable::ported`](crate::transitions::TransitionTable::ported).
    pub fn build(self) -> PickupTruck {
        PickupTruck::from_config(self.config)
    }

    /// Build the truck after checking every code against the option
    /// catalog.
    ///
    /// Returns [`ConfigError::Invalid`] listing all unknown codes.
    pub fn try_build(self) -> Result<PickupTruck, ConfigError> {
        match self.config.validate() {
            Validation::Success(_) => Ok(PickupTruck::from_config(self.config)),
            Validation::Failure(errors) => {
                let violations: Vec<_> = errors.iter().cloned().collect();
                tracing::debug!(
                    violations = violations.len(),
                    config = ?self.config,
                    "rejected truck configuration"
                );
                Err(ConfigError::Invalid { violations })
            }
        }
    }
}
