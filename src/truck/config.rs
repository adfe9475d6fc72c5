//! The four option codes of a truck.

use crate::options::DomainViolation;
use crate::options::{self, AvailablePackages, EngineType, TransmissionType, Trim};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Immutable set of option codes.
///
/// Codes are stored exactly as supplied; nothing checks them unless
/// [`TruckConfig::validate`] is called.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TruckConfig {
    engine: i32,
    transmission: i32,
    trim: i32,
    package_type: i32,
}

impl TruckConfig {
    pub fn new(engine: i32, transmission: i32, trim: i32, package_type: i32) -> Self {
        Self {
            engine,
            transmission,
            trim,
            package_type,
        }
    }

    pub fn engine(&self) -> i32 {
        self.engine
    }

    pub fn transmission(&self) -> i32 {
        self.transmission
    }

    pub fn trim(&self) -> i32 {
        self.trim
    }

    pub fn package_type(&self) -> i32 {
        self.package_type
    }

    /// Typed engine option, if the code is in the catalog.
    pub fn engine_type(&self) -> Option<EngineType> {
        EngineType::from_code(self.engine)
    }

    /// Typed transmission option, if the code is in the catalog.
    pub fn transmission_type(&self) -> Option<TransmissionType> {
        TransmissionType::from_code(self.transmission)
    }

    /// Typed trim option, if the code is in the catalog.
    pub fn trim_option(&self) -> Option<Trim> {
        Trim::from_code(self.trim)
    }

    /// Typed package option, if the code is in the catalog.
    pub fn package(&self) -> Option<AvailablePackages> {
        AvailablePackages::from_code(self.package_type)
    }

    /// Check every code against the option catalog, accumulating all
    /// violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<DomainViolation>> {
        options::validate_config(self)
    }
}
