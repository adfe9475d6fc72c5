//! The stateful pickup truck.
//!
//! A [`PickupTruck`] pairs an immutable [`TruckConfig`] with a current
//! [`DriveState`]. Its control operations hand a request to the drive state
//! machine and adopt whatever state comes back.

mod config;

pub use config::TruckConfig;

use crate::core::{DriveHistory, DriveState, GearChange, ShiftRequest};
use crate::transitions::{TransitionError, TransitionTable};
use chrono::Utc;
use std::sync::Arc;

/// Ratio requested by [`PickupTruck::accelerate`].
pub const ACCELERATE_GEAR_RATIO: i32 = 2;

/// Ratio requested by [`PickupTruck::drive`].
pub const DRIVE_GEAR_RATIO: i32 = 1;

/// A configured truck with a drive state.
///
/// Every truck starts in Park. A refused request returns the error and
/// leaves the truck untouched.
///
/// # Example
///
/// ```rust
/// use pickup_truck::core::DriveState;
/// use pickup_truck::transitions::{TransitionError, TransitionTable};
/// use pickup_truck::truck::PickupTruck;
///
/// let mut truck = PickupTruck::new(2, 1, 3, 4);
/// assert_eq!(truck.park(), Ok(DriveState::Park));
/// assert!(matches!(truck.reverse(), Err(TransitionError::Illegal { .. })));
///
/// let mut truck = truck.with_transitions(TransitionTable::extended());
/// assert_eq!(truck.reverse(), Ok(DriveState::Reverse));
/// ```
#[derive(Clone, Debug)]
pub struct PickupTruck {
    config: TruckConfig,
    drive_state: DriveState,
    transitions: Arc<TransitionTable>,
    history: DriveHistory,
}

impl PickupTruck {
    /// Create a truck in Park governed by [`TransitionTable::ported`].
    pub fn new(engine: i32, transmission: i32, trim: i32, package_type: i32) -> Self {
        Self::from_config(TruckConfig::new(engine, transmission, trim, package_type))
    }

    pub fn from_config(config: TruckConfig) -> Self {
        Self {
            config,
            drive_state: DriveState::Park,
            transitions: Arc::new(TransitionTable::ported()),
            history: DriveHistory::new(),
        }
    }

    /// Replace the transition table, keeping configuration, state and
    /// history.
    pub fn with_transitions(self, table: TransitionTable) -> Self {
        self.with_shared_transitions(Arc::new(table))
    }

    /// Like [`with_transitions`](Self::with_transitions), sharing one table
    /// between many trucks.
    pub fn with_shared_transitions(mut self, table: Arc<TransitionTable>) -> Self {
        self.transitions = table;
        self
    }

    /// Keep at most `capacity` gear changes, dropping the oldest first.
    ///
    /// Changes already recorded are carried over up to the new bound.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        let mut history = DriveHistory::with_capacity(capacity);
        for change in self.history.changes() {
            history.push(change.clone());
        }
        self.history = history;
        self
    }

    pub fn config(&self) -> &TruckConfig {
        &self.config
    }

    pub fn engine(&self) -> i32 {
        self.config.engine()
    }

    pub fn transmission(&self) -> i32 {
        self.config.transmission()
    }

    pub fn trim(&self) -> i32 {
        self.config.trim()
    }

    pub fn package_type(&self) -> i32 {
        self.config.package_type()
    }

    /// Current drive state.
    pub fn drive_state(&self) -> DriveState {
        self.drive_state
    }

    /// Table governing this truck's transitions.
    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Most recent accepted gear changes, oldest first. Requests that leave
    /// the state as it was are not recorded.
    pub fn history(&self) -> &DriveHistory {
        &self.history
    }

    /// Request forward drive at ratio 2.
    ///
    /// `target_speed` does not influence the requested ratio.
    pub fn accelerate(&mut self, target_speed: u32) -> Result<DriveState, TransitionError> {
        tracing::trace!(target_speed, "accelerate requested");
        self.shift(ShiftRequest::ToGearRatio(ACCELERATE_GEAR_RATIO))
    }

    pub fn apply_brake(&mut self) -> Result<DriveState, TransitionError> {
        self.shift(ShiftRequest::Braking)
    }

    /// Request forward drive at ratio 1.
    pub fn drive(&mut self) -> Result<DriveState, TransitionError> {
        self.shift(ShiftRequest::ToGearRatio(DRIVE_GEAR_RATIO))
    }

    pub fn neutral(&mut self) -> Result<DriveState, TransitionError> {
        self.shift(ShiftRequest::ToNeutral)
    }

    pub fn park(&mut self) -> Result<DriveState, TransitionError> {
        self.shift(ShiftRequest::ToPark)
    }

    pub fn reverse(&mut self) -> Result<DriveState, TransitionError> {
        self.shift(ShiftRequest::ToReverse)
    }

    /// Hand `request` to the current state and adopt the result.
    pub fn shift(&mut self, request: ShiftRequest) -> Result<DriveState, TransitionError> {
        let from = self.drive_state;
        let table = self.transitions.as_ref();
        let resolved = match request {
            ShiftRequest::ToPark => from.to_park(table),
            ShiftRequest::ToReverse => from.to_reverse(table),
            ShiftRequest::ToNeutral => from.to_neutral(table),
            ShiftRequest::ToGearRatio(ratio) => from.to_gear_ratio(table, ratio),
            ShiftRequest::Braking => from.braking(table),
        };
        let to = match resolved {
            Ok(to) => to,
            Err(err) => {
                tracing::debug!(%from, %request, error = %err, "shift refused");
                return Err(err);
            }
        };

        if to != from {
            self.history.push(GearChange {
                from,
                to,
                request,
                timestamp: Utc::now(),
            });
        }
        tracing::debug!(%from, %to, %request, "shift accepted");

        self.drive_state = to;
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_HISTORY_CAPACITY;

    fn truck() -> PickupTruck {
        PickupTruck::new(2, 1, 3, 4)
    }

    #[test]
    fn new_truck_starts_in_park() {
        let truck = truck();
        assert_eq!(truck.drive_state(), DriveState::Park);
        assert!(truck.history().is_empty());
    }

    #[test]
    fn parking_a_parked_truck_is_unobservable() {
        let mut truck = truck();

        assert_eq!(truck.park(), Ok(DriveState::Park));
        assert_eq!(truck.park(), Ok(DriveState::Park));

        assert_eq!(truck.drive_state(), DriveState::Park);
        assert!(truck.history().is_empty());
        assert_eq!(truck.config(), &TruckConfig::new(2, 1, 3, 4));
    }

    #[test]
    fn ported_table_refuses_every_other_control() {
        let mut truck = truck();

        let results = [
            truck.reverse(),
            truck.neutral(),
            truck.drive(),
            truck.accelerate(55),
            truck.apply_brake(),
        ];

        for result in results {
            assert!(matches!(
                result,
                Err(TransitionError::Illegal {
                    from: DriveState::Park,
                    ..
                })
            ));
        }
        assert_eq!(truck.drive_state(), DriveState::Park);
        assert!(truck.history().is_empty());
    }

    #[test]
    fn accelerate_ignores_target_speed() {
        let mut slow = truck().with_transitions(TransitionTable::extended());
        let mut fast = slow.clone();

        assert_eq!(slow.accelerate(5), Ok(DriveState::Drive { ratio: 2 }));
        assert_eq!(fast.accelerate(120), Ok(DriveState::Drive { ratio: 2 }));
    }

    #[test]
    fn drive_requests_first_ratio() {
        let mut truck = truck().with_transitions(TransitionTable::extended());

        assert_eq!(truck.drive(), Ok(DriveState::Drive { ratio: 1 }));
    }

    #[test]
    fn accepted_changes_are_recorded() {
        let mut truck = truck().with_transitions(TransitionTable::extended());

        truck.neutral().unwrap();
        truck.drive().unwrap();
        truck.accelerate(40).unwrap();
        truck.apply_brake().unwrap();
        truck.park().unwrap();

        let path = truck.history().path();
        assert_eq!(
            path,
            vec![
                &DriveState::Park,
                &DriveState::Neutral,
                &DriveState::Drive { ratio: 1 },
                &DriveState::Drive { ratio: 2 },
                &DriveState::Braking,
                &DriveState::Park,
            ]
        );
    }

    #[test]
    fn refused_shift_keeps_state_and_history() {
        let mut truck = truck().with_transitions(TransitionTable::extended());
        truck.reverse().unwrap();

        let err = truck.drive().unwrap_err();

        assert_eq!(
            err,
            TransitionError::Illegal {
                from: DriveState::Reverse,
                request: ShiftRequest::ToGearRatio(DRIVE_GEAR_RATIO),
            }
        );
        assert_eq!(truck.drive_state(), DriveState::Reverse);
        assert_eq!(truck.history().len(), 1);
    }

    #[test]
    fn swapping_tables_keeps_state() {
        let mut truck = truck().with_transitions(TransitionTable::extended());
        truck.neutral().unwrap();

        let mut truck = truck.with_transitions(TransitionTable::ported());

        assert_eq!(truck.drive_state(), DriveState::Neutral);
        assert!(truck.park().is_err());
    }

    #[test]
    fn shared_table_governs_many_trucks() {
        let table = Arc::new(TransitionTable::extended());
        let mut a = truck().with_shared_transitions(Arc::clone(&table));
        let mut b = truck().with_shared_transitions(table);

        a.reverse().unwrap();
        b.neutral().unwrap();

        assert_eq!(a.drive_state(), DriveState::Reverse);
        assert_eq!(b.drive_state(), DriveState::Neutral);
    }
    #[test]
    fn long_drive_keeps_history_bounded() {
        let mut truck = truck()
            .with_transitions(TransitionTable::extended())
            .with_history_capacity(8);

        for _ in 0..500 {
            truck.neutral().unwrap();
            truck.park().unwrap();
        }
        truck.neutral().unwrap();

        assert_eq!(truck.history().len(), 8);
        assert_eq!(truck.history().capacity(), 8);
        assert_eq!(
            truck.history().path().last(),
            Some(&&DriveState::Neutral)
        );
        assert_eq!(truck.history().last().unwrap().from, DriveState::Park);
    }

    #[test]
    fn default_history_stops_growing_at_its_capacity() {
        let mut truck = truck().with_transitions(TransitionTable::extended());

        for _ in 0..DEFAULT_HISTORY_CAPACITY {
            truck.reverse().unwrap();
            truck.park().unwrap();
        }

        assert_eq!(truck.history().len(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn shrinking_history_keeps_latest_changes() {
        let mut truck = truck().with_transitions(TransitionTable::extended());
        truck.neutral().unwrap();
        truck.drive().unwrap();
        truck.apply_brake().unwrap();

        let truck = truck.with_history_capacity(2);

        assert_eq!(
            truck.history().path(),
            vec![
                &DriveState::Neutral,
                &DriveState::Drive { ratio: 1 },
                &DriveState::Braking,
            ]
        );
    }

    #[test]
    fn shift_matches_per_state_requests() {
        let table = TransitionTable::extended();
        let requests = [
            ShiftRequest::ToNeutral,
            ShiftRequest::ToGearRatio(3),
            ShiftRequest::ToGearRatio(9),
            ShiftRequest::Braking,
            ShiftRequest::ToReverse,
            ShiftRequest::ToPark,
            ShiftRequest::ToReverse,
        ];
        let mut truck = truck().with_transitions(table.clone());

        for request in requests {
            let state = truck.drive_state();
            let expected = match request {
                ShiftRequest::ToPark => state.to_park(&table),
                ShiftRequest::ToReverse => state.to_reverse(&table),
                ShiftRequest::ToNeutral => state.to_neutral(&table),
                ShiftRequest::ToGearRatio(ratio) => state.to_gear_ratio(&table, ratio),
                ShiftRequest::Braking => state.braking(&table),
            };

            assert_eq!(truck.shift(request), expected);
        }
        assert_eq!(truck.drive_state(), DriveState::Reverse);
    }
}
