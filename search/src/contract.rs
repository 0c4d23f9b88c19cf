//! Search world contract trait.

use std::fmt;

/// Trait for worlds that support uninformed tree search.
///
/// # Contract
///
/// - `successors` must be deterministic: the same state always yields the
///   same `(action, state)` pairs in the same order.
/// - `successors` must be finite and restartable (each call starts over).
/// - States are passed by value; worlds with expensive states should make
///   `State` a cheap handle.
pub trait SearchWorld {
    /// A node's state. Never mutated by the search.
    type State: Clone;
    /// Label attached to each non-root node.
    type Action: Clone + fmt::Display;

    /// Unique world identifier, recorded in run reports.
    fn world_id(&self) -> &str;

    /// Enumerate the legal `(action, next_state)` pairs from `state`.
    fn successors(
        &self,
        state: Self::State,
    ) -> impl Iterator<Item = (Self::Action, Self::State)>;

    /// Test whether `state` satisfies the world's goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}
