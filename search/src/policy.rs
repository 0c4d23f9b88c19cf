//! Search policy types.

use crate::error::SearchError;

/// Optional limits applied to a search run.
///
/// The default policy sets no limits: pure tree search, which on a world with
/// reversible actions may never terminate under depth-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicyV1 {
    /// Depth limit. Nodes deeper than this are popped and skipped (never
    /// goal-tested, never expanded). For iterative deepening this caps the
    /// last cutoff tried.
    pub max_depth: Option<u32>,
    /// Hard cap on node expansions across the whole run (all iterative
    /// deepening iterations together).
    pub max_expansions: Option<u64>,
}

impl SearchPolicyV1 {
    /// Policy with only a depth limit.
    #[must_use]
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }

    /// Reject policies that could not expand a single node.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}
