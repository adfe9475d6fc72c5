//! Guard predicates for controlling gear transitions.
//!
//! Guards are pure boolean functions consulted after a transition's gears
//! match. They let a table express conditions on the request itself, such
//! as an allowed range of gear ratios.

use super::request::ShiftRequest;
use super::state::DriveState;
use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// The predicate sees the state being left and the request being made.
///
/// # Example
///
/// ```rust
/// use pickup_truck::core::{DriveState, Guard, ShiftRequest};
///
/// // Only low ratios may be selected
/// let low_gears = Guard::new(|_from: &DriveState, request: &ShiftRequest| {
///     matches!(request, ShiftRequest::ToGearRatio(1..=2))
/// });
///
/// assert!(low_gears.check(&DriveState::Park, &ShiftRequest::ToGearRatio(1)));
/// assert!(!low_gears.check(&DriveState::Park, &ShiftRequest::ToGearRatio(5)));
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<dyn Fn(&DriveState, &ShiftRequest) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&DriveState, &ShiftRequest) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows `request` from `from`.
    pub fn check(&self, from: &DriveState, request: &ShiftRequest) -> bool {
        (self.predicate)(from, request)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
