//! Transition tables deciding which shift requests are legal.

use crate::core::{DriveState, Gear, Guard, ShiftRequest};
use crate::transitions::error::TransitionError;

/// Highest forward gear ratio the extended table accepts.
pub const MAX_GEAR_RATIO: i32 = 6;

/// A permitted move from one gear to another.
///
/// The request's target gear selects the `to` side; the optional guard
/// can still refuse a matching request.
#[derive(Clone, Debug)]
pub struct Transition {
    pub from: Gear,
    pub to: Gear,
    pub guard: Option<Guard>,
}

impl Transition {
    /// True if this transition covers `request` made from `current`,
    /// ignoring the guard.
    pub fn matches(&self, current: &DriveState, request: &ShiftRequest) -> bool {
        current.gear() == self.from && request.target_gear() == self.to
    }

    /// Check if this transition can execute from the current state (pure)
    pub fn can_execute(&self, current: &DriveState, request: &ShiftRequest) -> bool {
        if !self.matches(current, request) {
            return false;
        }

        self.guard
            .as_ref()
            .is_none_or(|g| g.check(current, request))
    }
}

/// Ordered set of transitions governing a drive state machine.
///
/// Tables are immutable once handed to a truck. Two ready-made tables are
/// provided:
///
/// - [`TransitionTable::ported`]: only `Park -> Park` is legal. This is the
///   default and the table every built truck starts with.
/// - [`TransitionTable::extended`]: a complete table covering every gear.
///
/// # Example
///
/// ```rust
/// use pickup_truck::core::{DriveState, Gear, ShiftRequest};
/// use pickup_truck::transitions::{TransitionError, TransitionTable};
///
/// let table = TransitionTable::new()
///     .allow(Gear::Park, Gear::Neutral)
///     .allow(Gear::Neutral, Gear::Park);
///
/// let state = table.resolve(&DriveState::Park, ShiftRequest::ToNeutral).unwrap();
/// assert_eq!(state, DriveState::Neutral);
///
/// let err = table.resolve(&state, ShiftRequest::ToReverse).unwrap_err();
/// assert!(matches!(err, TransitionError::Illegal { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
}

impl TransitionTable {
    /// Create an empty table. Every request is illegal until transitions
    /// are added.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Table with the single transition `Park -> Park`.
    ///
    /// Every other request, from any state, is rejected as illegal.
    pub fn ported() -> Self {
        Self::new().allow(Gear::Park, Gear::Park)
    }

    /// Complete table for all five gears.
    ///
    /// - Reverse is reachable only from Park, Neutral and Reverse.
    /// - Drive is never reachable directly from Reverse.
    /// - Braking is reachable from Drive, Reverse and Braking.
    /// - Park is reachable from Park, Neutral and Braking.
    /// - Every move into Drive requires a ratio in `1..=MAX_GEAR_RATIO`.
    pub fn extended() -> Self {
        let mut table = Self::new();
        for (from, to) in [
            (Gear::Park, Gear::Park),
            (Gear::Park, Gear::Reverse),
            (Gear::Park, Gear::Neutral),
            (Gear::Neutral, Gear::Park),
            (Gear::Neutral, Gear::Reverse),
            (Gear::Neutral, Gear::Neutral),
            (Gear::Drive, Gear::Neutral),
            (Gear::Drive, Gear::Braking),
            (Gear::Reverse, Gear::Reverse),
            (Gear::Reverse, Gear::Neutral),
            (Gear::Reverse, Gear::Braking),
            (Gear::Braking, Gear::Braking),
            (Gear::Braking, Gear::Park),
            (Gear::Braking, Gear::Neutral),
        ] {
            table = table.allow(from, to);
        }

        for from in [Gear::Park, Gear::Neutral, Gear::Drive, Gear::Braking] {
            table = table.allow_when(from, Gear::Drive, |_, request| {
                matches!(request, ShiftRequest::ToGearRatio(1..=MAX_GEAR_RATIO))
            });
        }

        table
    }

    /// Permit `from -> to` unconditionally.
    pub fn allow(self, from: Gear, to: Gear) -> Self {
        self.add_transition(Transition {
            from,
            to,
            guard: None,
        })
    }

    /// Permit `from -> to` when the predicate accepts the request.
    pub fn allow_when<F>(self, from: Gear, to: Gear, predicate: F) -> Self
    where
        F: Fn(&DriveState, &ShiftRequest) -> bool + Send + Sync + 'static,
    {
        self.add_transition(Transition {
            from,
            to,
            guard: Some(Guard::new(predicate)),
        })
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// All transitions, in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// True if `request` would be granted from `current`.
    pub fn permits(&self, current: &DriveState, request: ShiftRequest) -> bool {
        self.transitions
            .iter()
            .any(|t| t.can_execute(current, &request))
    }

    /// Resolve `request` made from `current` into the next state.
    ///
    /// Never mutates `current`. Returns [`TransitionError::Illegal`] when no
    /// transition covers the request and [`TransitionError::GuardBlocked`]
    /// when every covering transition's guard refused it.
    pub fn resolve(
        &self,
        current: &DriveState,
        request: ShiftRequest,
    ) -> Result<DriveState, TransitionError> {
        let mut matched = false;
        for transition in self.transitions.iter().filter(|t| t.matches(current, &request)) {
            matched = true;
            if transition
                .guard
                .as_ref()
                .is_none_or(|g| g.check(current, &request))
            {
                return Ok(request.target());
            }
        }

        if matched {
            Err(TransitionError::GuardBlocked {
                from: *current,
                request,
            })
        } else {
            Err(TransitionError::Illegal {
                from: *current,
                request,
            })
        }
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::ported()
    }
}
