//! Step builder for pickup trucks.
//!
//! A truck is configured through a fixed sequence of steps, each its own
//! type exposing only the next legal call:
//!
//! ```text
//! TruckBuilder::light_duty_truck()  -> EngineStep
//!     .with_engine(..)              -> TransmissionStep
//!     .and_transmission(..)         -> TrimStep
//!     .and_trim_option(..)          -> PackageStep
//!     .and_package(..)              -> PickupTruckBuilder
//!     .build()                      -> PickupTruck
//! ```
//!
//! Skipping or reordering a step is a compile error, so an incomplete
//! configuration cannot be expressed.
//!
//! # Example
//!
//! ```rust
//! use pickup_truck::builder::TruckBuilder;
//! use pickup_truck::options::{AvailablePackages, EngineType, TransmissionType, Trim};
//!
//! let truck = TruckBuilder::light_duty_truck()
//!     .with_engine(EngineType::V6)
//!     .and_transmission(TransmissionType::Manual)
//!     .and_trim_option(Trim::ExtendedCab)
//!     .and_package(AvailablePackages::OffRoad)
//!     .build();
//!
//! assert_eq!(truck.engine(), 2);
//! assert_eq!(truck.transmission(), 1);
//! assert_eq!(truck.trim(), 3);
//! assert_eq!(truck.package_type(), 4);
//! ```
//!
//! The transmission cannot be chosen before the engine:
//!
//! ```compile_fail
//! use pickup_truck::builder::TruckBuilder;
//!
//! let _ = TruckBuilder::light_duty_truck().and_transmission(1);
//! ```
//!
//! A truck cannot be built before the package is chosen:
//!
//! ```compile_fail
//! use pickup_truck::builder::TruckBuilder;
//!
//! let _ = TruckBuilder::light_duty_truck()
//!     .with_engine(2)
//!     .and_transmission(1)
//!     .and_trim_option(3)
//!     .build();
//! ```
//!
//! Steps cannot be constructed directly:
//!
//! ```compile_fail
//! use pickup_truck::builder::TransmissionStep;
//!
//! let _ = TransmissionStep { engine: 2 };
//! ```
//!
//! Nor can the entry point be instantiated:
//!
//! ```compile_fail
//! use pickup_truck::builder::TruckBuilder;
//!
//! let _ = TruckBuilder {};
//! ```

pub mod error;
pub mod steps;

pub use crate::options::DomainViolation;
pub use error::ConfigError;
pub use steps::{EngineStep, PackageStep, PickupTruckBuilder, TransmissionStep, TrimStep};

/// Entry point for truck builds.
///
/// Has no values; use [`TruckBuilder::light_duty_truck`].
#[derive(Debug)]
pub enum TruckBuilder {}

impl TruckBuilder {
    /// Start a light-duty truck build. The returned step only accepts an
    /// engine type.
    pub fn light_duty_truck() -> EngineStep {
        EngineStep::new()
    }
}
