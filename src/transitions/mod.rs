//! Transition rules for the drive state machine.
//!
//! A [`TransitionTable`] decides which [`ShiftRequest`](crate::core::ShiftRequest)
//! is legal from which [`DriveState`](crate::core::DriveState). Every state
//! answers the same five requests (`to_park`, `to_reverse`, `to_neutral`,
//! `to_gear_ratio`, `braking`); each returns the next state or a
//! [`TransitionError`], never mutating the receiver.
//!
//! # Tables
//!
//! - [`TransitionTable::ported`] grants only `Park -> Park` and rejects every
//!   other request as [`TransitionError::Illegal`]. Trucks use it unless told
//!   otherwise.
//! - [`TransitionTable::extended`] is a complete table for all five gears and
//!   must be selected explicitly.

mod error;
mod shift;
mod table;

pub use error::TransitionError;
pub use table::{Transition, TransitionTable, MAX_GEAR_RATIO};
