//! Pickup Truck: a step builder and a drive-state machine
//!
//! Two small patterns applied to one domain model:
//!
//! - **Step builder** ([`builder`]): a truck is configured through a fixed
//!   sequence of types, one per step, so that an incomplete configuration
//!   does not compile.
//! - **Drive state machine** ([`core`], [`transitions`]): a truck is always
//!   in exactly one [`DriveState`]; each control request is resolved against
//!   a [`TransitionTable`] into a new state or a typed [`TransitionError`].
//!
//! # Core Concepts
//!
//! - **Truck**: [`PickupTruck`] holds immutable option codes and a current
//!   drive state, starting in Park
//! - **Tables**: [`TransitionTable::ported`] (the default) only allows
//!   parking a parked truck; [`TransitionTable::extended`] covers every gear
//! - **Options**: named codes and accumulated domain validation in
//!   [`options`]
//!
//! # Example
//!
//! ```rust
//! use pickup_truck::{DriveState, TransitionTable, TruckBuilder};
//! use pickup_truck::options::{AvailablePackages, EngineType, TransmissionType, Trim};
//!
//! let mut truck = TruckBuilder::light_duty_truck()
//!     .with_engine(EngineType::V6)
//!     .and_transmission(TransmissionType::Manual)
//!     .and_trim_option(Trim::ExtendedCab)
//!     .and_package(AvailablePackages::OffRoad)
//!     .build();
//!
//! assert_eq!(truck.drive_state(), DriveState::Park);
//! assert!(truck.drive().is_err());
//!
//! let mut truck = truck.with_transitions(TransitionTable::extended());
//! assert_eq!(truck.drive(), Ok(DriveState::Drive { ratio: 1 }));
//! ```

pub mod builder;
pub mod core;
pub mod options;
pub mod transitions;
pub mod truck;

// Re-export commonly used types
pub use builder::{ConfigError, DomainViolation, TruckBuilder};
pub use crate::core::{DriveState, Gear, ShiftRequest};
pub use transitions::{TransitionError, TransitionTable};
pub use truck::{PickupTruck, TruckConfig};
