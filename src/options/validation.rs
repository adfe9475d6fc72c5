//! Domain validation for truck configurations.
//!
//! Uses Stillwater's `Validation` so that every unknown option code is
//! reported at once instead of stopping at the first one.

use crate::options::DomainViolation;
use crate::options::catalog::{AvailablePackages, EngineType, TransmissionType, Trim};
use crate::truck::TruckConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check all four codes of `config` against the option catalog.
///
/// Returns `Validation::Success(())` when every code is known, otherwise
/// `Validation::Failure` with one violation per unknown code, in the order
/// engine, transmission, trim, package.
pub fn validate_config(config: &TruckConfig) -> Validation<(), NonEmptyVec<DomainViolation>> {
    let checks = vec![
        known(
            EngineType::from_code(config.engine()).is_some(),
            DomainViolation::UnknownEngine(config.engine()),
        ),
        known(
            TransmissionType::from_code(config.transmission()).is_some(),
            DomainViolation::UnknownTransmission(config.transmission()),
        ),
        known(
            Trim::from_code(config.trim()).is_some(),
            DomainViolation::UnknownTrim(config.trim()),
        ),
        known(
            AvailablePackages::from_code(config.package_type()).is_some(),
            DomainViolation::UnknownPackage(config.package_type()),
        ),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn known(
    is_known: bool,
    violation: DomainViolation,
) -> Validation<(), NonEmptyVec<DomainViolation>> {
    if is_known {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
