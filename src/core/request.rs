//! Transition requests a truck can make of its drive state.

use super::state::{DriveState, Gear};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A request to move from the current drive state to another.
///
/// Each request names the state it would produce if the governing
/// transition table allows it; see [`ShiftRequest::target`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ShiftRequest {
    ToPark,
    ToReverse,
    ToNeutral,
    ToGearRatio(i32),
    Braking,
}

impl ShiftRequest {
    /// Get the request's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToPark => "ToPark",
            Self::ToReverse => "ToReverse",
            Self::ToNeutral => "ToNeutral",
            Self::ToGearRatio(_) => "ToGearRatio",
            Self::Braking => "Braking",
        }
    }

    /// State produced when the request is granted.
    ///
    /// ```rust
    /// use pickup_truck::core::{DriveState, ShiftRequest};
    ///
    /// assert_eq!(ShiftRequest::ToGearRatio(2).target(), DriveState::Drive { ratio: 2 });
    /// assert_eq!(ShiftRequest::ToPark.target(), DriveState::Park);
    /// ```
    pub fn target(&self) -> DriveState {
        match self {
            Self::ToPark => DriveState::Park,
            Self::ToReverse => DriveState::Reverse,
            Self::ToNeutral => DriveState::Neutral,
            Self::ToGearRatio(ratio) => DriveState::Drive { ratio: *ratio },
            Self::Braking => DriveState::Braking,
        }
    }

    /// Gear of the state produced when the request is granted.
    pub fn target_gear(&self) -> Gear {
        self.target().gear()
    }
}

impl fmt::Display for ShiftRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToGearRatio(ratio) => write!(f, "ToGearRatio({ratio})"),
            other => f.write_str(other.name()),
        }
    }
}
