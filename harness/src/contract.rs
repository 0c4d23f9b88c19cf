//! Harness-side world contract.

use ferry_search::contract::SearchWorld;

/// A search world the runner can start on its own.
///
/// Extends [`SearchWorld`] with the fixed initial state; puzzle parameters are
/// never configurable from outside the world.
pub trait WorldHarness: SearchWorld {
    /// The root state of every run.
    fn initial_state(&self) -> Self::State;
}
