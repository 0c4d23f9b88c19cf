//! Runner-side policy defaults.
//!
//! The search crate's default policy is unbounded. The runner fills in the
//! limits a command-line run needs in order to terminate: depth-first tree
//! search on this puzzle cycles forever (`(3,3,1)` ↔ `(3,2,0)`, the first
//! successor of each) unless it is depth-limited.

use ferry_search::policy::SearchPolicyV1;
use ferry_search::strategy::Strategy;

/// Depth limit applied to depth-first runs when none is given.
pub const DEFAULT_DFS_DEPTH_LIMIT: u32 = 15;

/// Policy configuration that can override defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Depth limit. `None` uses the strategy default.
    pub max_depth: Option<u32>,
    /// Expansion budget. `None` means unbounded.
    pub max_expansions: Option<u64>,
}

/// Depth limit used when the caller gives none.
///
/// Breadth-first and iterative deepening stay unbounded, preserving their
/// shortest-solution behavior.
#[must_use]
pub fn default_depth_limit(strategy: Strategy) -> Option<u32> {
    match strategy {
        Strategy::DepthFirst => Some(DEFAULT_DFS_DEPTH_LIMIT),
        Strategy::BreadthFirst | Strategy::IterativeDeepening => None,
    }
}

/// Build the search policy for `strategy`.
#[must_use]
pub fn build_policy(strategy: Strategy, config: &PolicyConfig) -> SearchPolicyV1 {
    SearchPolicyV1 {
        max_depth: config.max_depth.or_else(|| default_depth_limit(strategy)),
        max_expansions: config.max_expansions,
    }
}
