//! The five transition requests every drive state answers.

use crate::core::{DriveState, ShiftRequest};
use crate::transitions::error::TransitionError;
use crate::transitions::table::TransitionTable;

impl DriveState {
    /// Request a move to Park. From Park this returns Park again.
    ///
    /// ```rust
    /// use pickup_truck::core::DriveState;
    /// use pickup_truck::transitions::TransitionTable;
    ///
    /// let table = TransitionTable::ported();
    /// let parked = DriveState::Park.to_park(&table).unwrap();
    /// assert_eq!(parked, DriveState::Park);
    /// assert!(parked.to_reverse(&table).is_err());
    /// ```
    pub fn to_park(self, table: &TransitionTable) -> Result<DriveState, TransitionError> {
        table.resolve(&self, ShiftRequest::ToPark)
    }

    /// Request a move to Reverse.
    pub fn to_reverse(self, table: &TransitionTable) -> Result<DriveState, TransitionError> {
        table.resolve(&self, ShiftRequest::ToReverse)
    }

    /// Request a move to Neutral.
    pub fn to_neutral(self, table: &TransitionTable) -> Result<DriveState, TransitionError> {
        table.resolve(&self, ShiftRequest::ToNeutral)
    }

    /// Request forward drive at `ratio`.
    pub fn to_gear_ratio(
        self,
        table: &TransitionTable,
        ratio: i32,
    ) -> Result<DriveState, TransitionError> {
        table.resolve(&self, ShiftRequest::ToGearRatio(ratio))
    }

    /// Request the braking state.
    pub fn braking(self, table: &TransitionTable) -> Result<DriveState, TransitionError> {
        table.resolve(&self, ShiftRequest::Braking)
    }
}
