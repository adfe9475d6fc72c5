//! Gear change history tracking.
//!
//! Provides bounded, immutable tracking of the drive states a truck has
//! been through.

use super::request::ShiftRequest;
use super::state::DriveState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single accepted gear change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GearChange {
    /// The state being left
    pub from: DriveState,
    /// The state being entered
    pub to: DriveState,
    /// The request that caused the change
    pub request: ShiftRequest,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Number of changes a [`DriveHistory`] keeps unless told otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Ordered history of the most recent gear changes.
///
/// [`DriveHistory::record`] is immutable and returns a new history with the
/// change appended. Once `capacity` changes are held, the oldest is dropped
/// to make room, so [`path`](DriveHistory::path) always ends at the latest
/// state but may start after Park.
///
/// # Example
///
/// ```rust
/// use pickup_truck::core::{DriveHistory, DriveState, GearChange, ShiftRequest};
/// use chrono::Utc;
///
/// let history = DriveHistory::new().record(GearChange {
///     from: DriveState::Park,
///     to: DriveState::Neutral,
///     request: ShiftRequest::ToNeutral,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![&DriveState::Park, &DriveState::Neutral]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriveHistory {
    changes: VecDeque<GearChange>,
    capacity: usize,
}

impl Default for DriveHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl DriveHistory {
    /// Create a new empty history holding up to
    /// [`DEFAULT_HISTORY_CAPACITY`] changes.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a new empty history holding up to `capacity` changes.
    ///
    /// A capacity of zero records nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            changes: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Maximum number of changes kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a change, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, change: GearChange) -> Self {
        let mut next = self.clone();
        next.push(change);
        next
    }

    /// Append a change in place, evicting the oldest when full.
    pub(crate) fn push(&mut self, change: GearChange) {
        if self.capacity == 0 {
            return;
        }
        while self.changes.len() >= self.capacity {
            self.changes.pop_front();
        }
        self.changes.push_back(change);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept change, then the `to`
    /// state of each change. Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&DriveState> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.front() {
            path.push(&first.from);
        }
        path.extend(self.changes.iter().map(|change| &change.to));
        path
    }

    /// Calculate total duration from the oldest kept change to the last.
    ///
    /// Returns `None` if there are no changes.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.front(), self.changes.back()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Get all kept changes, oldest first.
    pub fn changes(
        &self,
    ) -> impl DoubleEndedIterator<Item = &GearChange> + ExactSizeIterator + '_ {
        self.changes.iter()
    }

    /// Most recent change, if any.
    pub fn last(&self) -> Option<&GearChange> {
        self.changes.back()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(from: DriveState, request: ShiftRequest) -> GearChange {
        GearChange {
            from,
            to: request.target(),
            request,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = DriveHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = DriveHistory::new();

        let new_history = history.record(change(DriveState::Park, ShiftRequest::ToNeutral));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn path_returns_state_sequence() {
        let history = DriveHistory::new()
            .record(change(DriveState::Park, ShiftRequest::ToNeutral))
            .record(change(DriveState::Neutral, ShiftRequest::ToGearRatio(1)));

        let path = history.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &DriveState::Park);
        assert_eq!(path[1], &DriveState::Neutral);
        assert_eq!(path[2], &DriveState::Drive { ratio: 1 });
    }

    #[test]
    fn last_returns_most_recent_change() {
        let history = DriveHistory::new()
            .record(change(DriveState::Park, ShiftRequest::ToReverse))
            .record(change(DriveState::Reverse, ShiftRequest::Braking));

        let last = history.last().unwrap();
        assert_eq!(last.request, ShiftRequest::Braking);
        assert_eq!(last.to, DriveState::Braking);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = DriveHistory::new()
            .record(GearChange {
                from: DriveState::Park,
                to: DriveState::Neutral,
                request: ShiftRequest::ToNeutral,
                timestamp: start,
            })
            .record(GearChange {
                from: DriveState::Neutral,
                to: DriveState::Park,
                request: ShiftRequest::ToPark,
                timestamp: start + chrono::Duration::milliseconds(250),
            });

        assert_eq!(
            history.duration(),
            Some(std::time::Duration::from_millis(250))
        );
    }

    #[test]
    fn single_change_has_duration_zero() {
        let history = DriveHistory::new().record(change(DriveState::Park, ShiftRequest::ToNeutral));

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn full_history_drops_oldest_change() {
        let history = DriveHistory::with_capacity(2)
            .record(change(DriveState::Park, ShiftRequest::ToNeutral))
            .record(change(DriveState::Neutral, ShiftRequest::ToGearRatio(1)))
            .record(change(DriveState::Drive { ratio: 1 }, ShiftRequest::Braking));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.path(),
            vec![
                &DriveState::Neutral,
                &DriveState::Drive { ratio: 1 },
                &DriveState::Braking,
            ]
        );
        assert_eq!(history.last().unwrap().to, DriveState::Braking);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = DriveHistory::with_capacity(3);

        for _ in 0..10 {
            history.push(change(DriveState::Park, ShiftRequest::ToNeutral));
            history.push(change(DriveState::Neutral, ShiftRequest::ToPark));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.capacity(), 3);
        let requests: Vec<_> = history.changes().map(|c| c.request).collect();
        assert_eq!(
            requests,
            vec![ShiftRequest::ToPark, ShiftRequest::ToNeutral, ShiftRequest::ToPark]
        );
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let history = DriveHistory::with_capacity(0)
            .record(change(DriveState::Park, ShiftRequest::ToNeutral));

        assert!(history.is_empty());
        assert!(history.path().is_empty());
    }

    #[test]
    fn default_history_uses_default_capacity() {
        assert_eq!(DriveHistory::default().capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = DriveHistory::new().record(change(DriveState::Park, ShiftRequest::ToNeutral));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: DriveHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
