//! Known codes for the four truck option domains.

use super::macros::option_codes;

option_codes! {
    /// Engine choices.
    pub enum EngineType {
        I4 = 1,
        V6 = 2,
        V8 = 3,
        TurboDiesel = 4,
    }
}

option_codes! {
    /// Transmission choices.
    pub enum TransmissionType {
        Manual = 1,
        Automatic = 2,
    }
}

option_codes! {
    /// Cab trim levels.
    pub enum Trim {
        RegularCab = 1,
        CrewCab = 2,
        ExtendedCab = 3,
    }
}

option_codes! {
    /// Optional equipment packages.
    pub enum AvailablePackages {
        Towing = 1,
        Sport = 2,
        Luxury = 3,
        OffRoad = 4,
    }
}
