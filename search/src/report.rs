//! `SearchReportV1`: deterministic summary of one search run.
//!
//! The report carries everything needed to compare runs (strategy,
//! termination, counters, solution labels) and nothing that varies between
//! runs (no timings). Its canonical JSON bytes are the digest surface.

use serde_json::{json, Value};

use ferry_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ferry_kernel::proof::hash::{canonical_hash, ContentHash};

use crate::search::{SearchOutcome, TerminationReasonV1, TraversalStatsV1};
use crate::strategy::Strategy;

/// Domain prefix for report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"FERRY::SEARCH_REPORT::V1\0";

/// Schema version written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// Summary of one run, with action labels already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    pub world_id: String,
    pub strategy: Strategy,
    pub termination: TerminationReasonV1,
    pub traversals: Vec<TraversalStatsV1>,
    /// Rendered action labels; `None` if no goal was reached.
    pub solution: Option<Vec<String>>,
}

impl SearchReportV1 {
    /// Build a report from a finished run.
    #[must_use]
    pub fn from_outcome<A: std::fmt::Display>(world_id: &str, outcome: &SearchOutcome<A>) -> Self {
        Self {
            world_id: world_id.to_string(),
            strategy: outcome.strategy,
            termination: outcome.termination,
            traversals: outcome.traversals.clone(),
            solution: outcome
                .solution
                .as_ref()
                .map(|steps| steps.iter().map(ToString::to_string).collect()),
        }
    }

    #[must_use]
    pub fn total_expansions(&self) -> u64 {
        self.traversals.iter().map(|t| t.expansions).sum()
    }

    #[must_use]
    pub fn max_depth(&self) -> Option<u32> {
        self.traversals.iter().filter_map(|t| t.max_depth).max()
    }

    /// JSON form of the report.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let traversals: Vec<Value> = self.traversals.iter().map(traversal_json).collect();
        let solution = match &self.solution {
            Some(steps) => json!({ "step_count": steps.len(), "steps": steps }),
            None => Value::Null,
        };
        json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "world_id": self.world_id,
            "strategy": self.strategy.report_id(),
            "termination_reason": termination_json(self.termination),
            "total_expansions": self.total_expansions(),
            "max_depth": self.max_depth(),
            "traversals": traversals,
            "solution": solution,
        })
    }

    /// Canonical JSON bytes (sorted keys, compact).
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the JSON contains a non-integer number, which
    /// a well-formed report never does.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of [`Self::canonical_bytes`].
    ///
    /// # Errors
    ///
    /// See [`Self::canonical_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(report_digest(&self.canonical_bytes()?))
    }
}

/// Digest of canonical report bytes, under [`DOMAIN_SEARCH_REPORT`].
#[must_use]
pub fn report_digest(canonical_bytes: &[u8]) -> ContentHash {
    canonical_hash(DOMAIN_SEARCH_REPORT, canonical_bytes)
}

fn termination_json(reason: TerminationReasonV1) -> Value {
    match reason {
        TerminationReasonV1::GoalReached { depth } => {
            json!({ "type": "goal_reached", "depth": depth })
        }
        TerminationReasonV1::FrontierExhausted => json!({ "type": "frontier_exhausted" }),
        TerminationReasonV1::DepthLimitReached { limit } => {
            json!({ "type": "depth_limit_reached", "limit": limit })
        }
        TerminationReasonV1::ExpansionBudgetExceeded { budget } => {
            json!({ "type": "expansion_budget_exceeded", "budget": budget })
        }
    }
}

fn traversal_json(stats: &TraversalStatsV1) -> Value {
    json!({
        "cutoff": stats.cutoff,
        "expansions": stats.expansions,
        "max_depth": stats.max_depth,
        "frontier_high_water": stats.frontier_high_water,
        "nodes_allocated": stats.nodes_allocated,
        "depth_skips": stats.depth_skips,
    })
}
