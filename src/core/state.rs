//! Drive states of the truck.
//!
//! A truck is always in exactly one [`DriveState`]. States are plain values:
//! a transition never edits a state in place, it produces the next one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a drive state, without any per-state data.
///
/// Transition tables are keyed by `Gear` so that, for example, every
/// `Drive` state matches regardless of its ratio.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Gear {
    Park,
    Drive,
    Reverse,
    Neutral,
    Braking,
}

impl Gear {
    /// Every gear, in declaration order.
    pub const ALL: [Gear; 5] = [
        Gear::Park,
        Gear::Drive,
        Gear::Reverse,
        Gear::Neutral,
        Gear::Braking,
    ];

    /// Get the gear's name for display/logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Park => "Park",
            Self::Drive => "Drive",
            Self::Reverse => "Reverse",
            Self::Neutral => "Neutral",
            Self::Braking => "Braking",
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current drive mode of a truck.
///
/// `Drive` carries the forward gear ratio it was shifted into. All other
/// states carry no data.
///
/// # Example
///
/// ```rust
/// use pickup_truck::core::{DriveState, Gear};
///
/// let state = DriveState::Drive { ratio: 2 };
/// assert_eq!(state.gear(), Gear::Drive);
/// assert_eq!(state.gear_ratio(), Some(2));
/// assert!(state.is_moving());
///
/// assert_eq!(DriveState::default(), DriveState::Park);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum DriveState {
    #[default]
    Park,
    Drive {
        ratio: i32,
    },
    Reverse,
    Neutral,
    Braking,
}

impl DriveState {
    /// The gear this state belongs to.
    pub fn gear(&self) -> Gear {
        match self {
            Self::Park => Gear::Park,
            Self::Drive { .. } => Gear::Drive,
            Self::Reverse => Gear::Reverse,
            Self::Neutral => Gear::Neutral,
            Self::Braking => Gear::Braking,
        }
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        self.gear().name()
    }

    /// Forward gear ratio, only present in `Drive`.
    pub fn gear_ratio(&self) -> Option<i32> {
        match self {
            Self::Drive { ratio } => Some(*ratio),
            _ => None,
        }
    }

    /// True for the states that propel the truck (`Drive` and `Reverse`).
    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Drive { .. } | Self::Reverse)
    }
}

impl fmt::Display for DriveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drive { ratio } => write!(f, "Drive (ratio {ratio})"),
            other => f.write_str(other.name()),
        }
    }
}
