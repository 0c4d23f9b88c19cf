//! Diagnostic hooks for search progress.
//!
//! The search crate never prints. Drivers report progress through a
//! [`SearchObserver`]; the harness decides where the text goes. Observers
//! cannot influence control flow.

use crate::strategy::Strategy;

/// Receives progress events from a running search. Every method defaults to
/// a no-op.
pub trait SearchObserver {
    /// A driver started.
    fn search_started(&mut self, _strategy: Strategy) {}

    /// Iterative deepening started a traversal with this cutoff.
    fn iteration_started(&mut self, _cutoff: u32) {}

    /// The maximum depth popped in the current traversal increased.
    fn depth_reached(&mut self, _depth: u32) {}

    /// A traversal ended (goal, exhaustion or budget) after this many
    /// expansions.
    fn traversal_finished(&mut self, _expansions: u64) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// One recorded observer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    Started(Strategy),
    IterationStarted(u32),
    DepthReached(u32),
    TraversalFinished(u64),
}

/// Keeps every event in order. Used by tests and by callers that render
/// diagnostics after the fact.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub events: Vec<SearchEvent>,
}

impl SearchObserver for RecordingObserver {
    fn search_started(&mut self, strategy: Strategy) {
        self.events.push(SearchEvent::Started(strategy));
    }

    fn iteration_started(&mut self, cutoff: u32) {
        self.events.push(SearchEvent::IterationStarted(cutoff));
    }

    fn depth_reached(&mut self, depth: u32) {
        self.events.push(SearchEvent::DepthReached(depth));
    }

    fn traversal_finished(&mut self, expansions: u64) {
        self.events.push(SearchEvent::TraversalFinished(expansions));
    }
}
