//! Boat trips and their human-readable labels.

use std::fmt;

use crate::carrier::state::{BoatSide, RiverState};

/// Direction of a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Origin shore to far shore. People leave the origin shore.
    Outbound,
    /// Far shore back to origin shore. People return to the origin shore.
    Return,
}

impl Direction {
    /// The direction of a trip departing from the shore holding the boat.
    #[must_use]
    pub fn leaving(side: BoatSide) -> Self {
        match side {
            BoatSide::Origin => Self::Outbound,
            BoatSide::Far => Self::Return,
        }
    }

    /// Change applied to the origin-shore counts per person carried.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Outbound => -1,
            Self::Return => 1,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Outbound => "from the original shore to the new shore",
            Self::Return => "back from the new shore to the original shore",
        }
    }
}

/// A boat load: how many of each group cross, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trip {
    missionaries: i8,
    cannibals: i8,
    direction: Direction,
}

impl Trip {
    #[must_use]
    pub fn new(missionaries: i8, cannibals: i8, direction: Direction) -> Self {
        Self {
            missionaries,
            cannibals,
            direction,
        }
    }

    #[must_use]
    pub fn missionaries(&self) -> i8 {
        self.missionaries
    }

    #[must_use]
    pub fn cannibals(&self) -> i8 {
        self.cannibals
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The state reached by making this trip from `from`.
    ///
    /// Counts and the boat component all move by the direction's sign. The
    /// result is not validated; callers check [`RiverState::is_valid`].
    #[must_use]
    pub fn apply(&self, from: &RiverState) -> RiverState {
        let sign = self.direction.sign();
        RiverState::from_raw(
            from.missionaries() + sign * self.missionaries,
            from.cannibals() + sign * self.cannibals,
            from.boat_raw() + sign,
        )
    }
}

/// A trip together with the state it produced. This is the action label
/// attached to search nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    trip: Trip,
    result: RiverState,
}

impl Crossing {
    #[must_use]
    pub fn new(trip: Trip, result: RiverState) -> Self {
        Self { trip, result }
    }

    #[must_use]
    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    #[must_use]
    pub fn result(&self) -> &RiverState {
        &self.result
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "take {} missionaries and {} cannibals {}. {}",
            self.trip.missionaries,
            self.trip.cannibals,
            self.trip.direction.describe(),
            self.result
        )
    }
}
