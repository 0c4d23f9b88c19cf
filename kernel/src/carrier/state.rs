//! `RiverState`: the `(m, c, b)` triple for the Missionaries-and-Cannibals puzzle.
//!
//! All counts describe the **origin** shore. The far shore holds the
//! complement (`SHORE_CAPACITY - m`, `SHORE_CAPACITY - c`).
//!
//! States are plain `Copy` values. They are never mutated after construction;
//! successor generation always produces fresh states.

use std::fmt;

use crate::carrier::trip::{Crossing, Direction, Trip};

/// Number of missionaries (and of cannibals) in the puzzle.
pub const SHORE_CAPACITY: i8 = 3;

/// Maximum number of people the boat carries per crossing.
pub const BOAT_CAPACITY: i8 = 2;

/// Which shore currently holds the boat.
///
/// The discriminants are the puzzle's wire encoding: `0` = far shore,
/// `1` = origin shore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoatSide {
    Far,
    Origin,
}

impl BoatSide {
    /// Encode as the third component of the `(m, c, b)` triple.
    #[must_use]
    pub fn as_raw(self) -> i8 {
        match self {
            Self::Far => 0,
            Self::Origin => 1,
        }
    }

    /// Decode the third component of the triple. Returns `None` for anything
    /// other than `0` or `1`.
    #[must_use]
    pub fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            0 => Some(Self::Far),
            1 => Some(Self::Origin),
            _ => None,
        }
    }

    /// The side the boat lands on after a crossing.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Far => Self::Origin,
            Self::Origin => Self::Far,
        }
    }
}

/// A puzzle state as seen from the origin shore.
///
/// Built either by [`RiverState::new`] / [`RiverState::initial`] for in-range
/// values, or by [`RiverState::from_raw`] which accepts arbitrary integers so
/// that [`RiverState::is_valid`] can reject them. The boat component is kept as
/// a raw integer for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiverState {
    missionaries: i8,
    cannibals: i8,
    boat: i8,
}

impl RiverState {
    /// Construct a state with the boat on the given side.
    #[must_use]
    pub fn new(missionaries: i8, cannibals: i8, boat: BoatSide) -> Self {
        Self::from_raw(missionaries, cannibals, boat.as_raw())
    }

    /// Construct a state from the raw triple without any validation.
    #[must_use]
    pub fn from_raw(missionaries: i8, cannibals: i8, boat: i8) -> Self {
        Self {
            missionaries,
            cannibals,
            boat,
        }
    }

    /// Everyone and the boat on the origin shore: `(3, 3, 1)`.
    #[must_use]
    pub fn initial() -> Self {
        Self::new(SHORE_CAPACITY, SHORE_CAPACITY, BoatSide::Origin)
    }

    /// Missionaries on the origin shore.
    #[must_use]
    pub fn missionaries(&self) -> i8 {
        self.missionaries
    }

    /// Cannibals on the origin shore.
    #[must_use]
    pub fn cannibals(&self) -> i8 {
        self.cannibals
    }

    /// Raw boat component (`0` far, `1` origin; anything else is invalid).
    #[must_use]
    pub fn boat_raw(&self) -> i8 {
        self.boat
    }

    /// Decoded boat side, or `None` if the raw component is out of range.
    #[must_use]
    pub fn boat(&self) -> Option<BoatSide> {
        BoatSide::from_raw(self.boat)
    }

    /// Bounds check plus the outnumbering rule on both shores.
    ///
    /// The rule only applies to a shore while missionaries are present there:
    /// the origin shore when `m > 0`, the far shore when `m < 3`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let in_range = |n: i8| (0..=SHORE_CAPACITY).contains(&n);
        if !in_range(self.missionaries) || !in_range(self.cannibals) || self.boat().is_none() {
            return false;
        }
        if self.missionaries > 0 && self.cannibals > self.missionaries {
            return false;
        }
        // Far shore: (3 - c) > (3 - m)  <=>  c < m.
        if self.missionaries < SHORE_CAPACITY && self.cannibals < self.missionaries {
            return false;
        }
        true
    }

    /// True exactly for `(0, 0, 0)`.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.missionaries == 0 && self.cannibals == 0 && self.boat == BoatSide::Far.as_raw()
    }

    /// Lazily enumerate every legal crossing from this state.
    ///
    /// Candidate loads are visited missionaries-outer, cannibals-inner, both
    /// ascending over `0..=BOAT_CAPACITY`. Loads of zero or more than
    /// `BOAT_CAPACITY` people are skipped, as is any load whose destination
    /// state is invalid. An invalid source state (bad boat component) yields
    /// nothing.
    pub fn successors(&self) -> impl Iterator<Item = (Crossing, RiverState)> {
        let origin = *self;
        let direction = origin.boat().map(Direction::leaving);
        (0..=BOAT_CAPACITY)
            .flat_map(|m| (0..=BOAT_CAPACITY).map(move |c| (m, c)))
            .filter(|&(m, c)| (1..=BOAT_CAPACITY).contains(&(m + c)))
            .filter_map(move |(m, c)| {
                let trip = Trip::new(m, c, direction?);
                let result = trip.apply(&origin);
                result.is_valid().then(|| (Crossing::new(trip, result), result))
            })
    }
}

impl fmt::Display for RiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "< State ({}, {}, {}) >",
            self.missionaries, self.cannibals, self.boat
        )
    }
}
