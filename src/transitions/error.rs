//! Errors raised when a shift request is refused.

use crate::core::{DriveState, ShiftRequest};
use thiserror::Error;

/// Errors that can occur during gear transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The table has no transition from this state for the request.
    #[error("Illegal transition from '{from}' via '{request}'")]
    Illegal {
        from: DriveState,
        request: ShiftRequest,
    },

    /// A transition exists but its guard refused the request.
    #[error("Guard blocked transition from '{from}' via '{request}'")]
    GuardBlocked {
        from: DriveState,
        request: ShiftRequest,
    },
}

impl TransitionError {
    /// State the truck was in when the request was refused.
    pub fn from_state(&self) -> DriveState {
        match self {
            Self::Illegal { from, .. } | Self::GuardBlocked { from, .. } => *from,
        }
    }

    /// The refused request.
    pub fn request(&self) -> ShiftRequest {
        match self {
            Self::Illegal { request, .. } | Self::GuardBlocked { request, .. } => *request,
        }
    }
}
