//! Core drive-state types and logic.
//!
//! This module contains the pure part of the drive state machine:
//! - Drive states and their gears
//! - Shift requests
//! - Guard predicates for transition control
//! - Immutable gear change history
//!
//! Nothing in this module has side effects. Deciding which request is legal
//! from which state lives in [`crate::transitions`].

mod guard;
mod history;
mod request;
mod state;

pub use guard::Guard;
pub use history::{DriveHistory, GearChange, DEFAULT_HISTORY_CAPACITY};
pub use request::ShiftRequest;
pub use state::{DriveState, Gear};
