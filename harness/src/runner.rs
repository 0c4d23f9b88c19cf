//! Search runner: world → policy → search → report.
//!
//! The runner owns orchestration only. Search semantics live in
//! `ferry_search`; puzzle rules live in `ferry_kernel`.

use thiserror::Error;

use ferry_kernel::proof::canon::CanonError;
use ferry_kernel::proof::hash::ContentHash;
use ferry_search::error::SearchError;
use ferry_search::observer::SearchObserver;
use ferry_search::policy::SearchPolicyV1;
use ferry_search::report::SearchReportV1;
use ferry_search::search::{search, SearchOutcome};
use ferry_search::strategy::Strategy;

use crate::contract::WorldHarness;
use crate::policy::{build_policy, PolicyConfig};

/// Error running a search through the harness.
#[derive(Debug, Error)]
pub enum SearchRunError {
    /// The search rejected the policy before starting.
    #[error("search failed pre-flight: {0}")]
    Search(#[from] SearchError),
    /// The run report could not be canonicalized.
    #[error("report canonicalization failed: {0}")]
    Report(#[from] CanonError),
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct SearchRun<A> {
    /// The policy actually applied (after runner defaults).
    pub policy: SearchPolicyV1,
    pub outcome: SearchOutcome<A>,
    pub report: SearchReportV1,
    pub report_digest: ContentHash,
}

/// Run `strategy` on `world` from its initial state.
///
/// # Errors
///
/// Returns [`SearchRunError::Search`] if the built policy is invalid and
/// [`SearchRunError::Report`] if the report cannot be canonicalized.
pub fn run_search<W: WorldHarness>(
    world: &W,
    strategy: Strategy,
    config: &PolicyConfig,
    observer: &mut dyn SearchObserver,
) -> Result<SearchRun<W::Action>, SearchRunError> {
    let policy = build_policy(strategy, config);
    let outcome = search(world, &world.initial_state(), strategy, &policy, observer)?;
    let report = SearchReportV1::from_outcome(world.world_id(), &outcome);
    let report_digest = report.digest()?;
    Ok(SearchRun {
        policy,
        outcome,
        report,
        report_digest,
    })
}
