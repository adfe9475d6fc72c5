//! Option catalog for truck configurations.
//!
//! A truck stores its four selections as raw `i32` codes. This module names
//! the known codes and checks a configuration against them:
//!
//! - [`EngineType`], [`TransmissionType`], [`Trim`], [`AvailablePackages`]
//! - [`validate_config`], accumulating every unknown code as a
//!   [`DomainViolation`]
//!
//! # Example
//!
//! ```rust
//! use pickup_truck::options::{EngineType, Trim};
//!
//! assert_eq!(EngineType::V6.code(), 2);
//! assert_eq!(Trim::from_code(3), Some(Trim::ExtendedCab));
//! ```

mod catalog;
mod error;
mod macros;
mod validation;

pub use catalog::{AvailablePackages, EngineType, TransmissionType, Trim};
pub use error::DomainViolation;
pub use validation::validate_config;
