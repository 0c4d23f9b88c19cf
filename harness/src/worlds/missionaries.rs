//! Missionaries-and-Cannibals as a search world.
//!
//! Thin adapter: all puzzle rules live in `ferry_kernel::carrier`.

use ferry_kernel::carrier::state::RiverState;
use ferry_kernel::carrier::trip::Crossing;
use ferry_search::contract::SearchWorld;

use crate::contract::WorldHarness;

/// World identifier recorded in run reports.
pub const WORLD_ID: &str = "missionaries_cannibals";

/// The three-missionaries, three-cannibals, two-seat-boat puzzle.
#[derive(Debug, Default, Clone, Copy)]
pub struct MissionariesCannibals;

impl WorldHarness for MissionariesCannibals {
    /// Everyone and the boat on the origin shore.
    fn initial_state(&self) -> RiverState {
        RiverState::initial()
    }
}

impl SearchWorld for MissionariesCannibals {
    type State = RiverState;
    type Action = Crossing;

    fn world_id(&self) -> &str {
        WORLD_ID
    }

    fn successors(&self, state: RiverState) -> impl Iterator<Item = (Crossing, RiverState)> {
        state.successors()
    }

    fn is_goal(&self, state: &RiverState) -> bool {
        state.is_goal()
    }
}
