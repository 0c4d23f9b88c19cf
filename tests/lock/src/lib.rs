//! Shared helpers for the ferry lock tests and the `search_fixture` binary.

use ferry_harness::policy::PolicyConfig;
use ferry_harness::runner::{run_search, SearchRun, SearchRunError};
use ferry_harness::worlds::missionaries::MissionariesCannibals;
use ferry_kernel::carrier::trip::Crossing;
use ferry_search::observer::NullObserver;
use ferry_search::search::TerminationReasonV1;
use ferry_search::strategy::Strategy;

/// Run `strategy` with runner defaults and no console output.
///
/// # Errors
///
/// Propagates [`SearchRunError`] from the runner.
pub fn run_default(strategy: Strategy) -> Result<SearchRun<Crossing>, SearchRunError> {
    run_search(
        &MissionariesCannibals,
        strategy,
        &PolicyConfig::default(),
        &mut NullObserver,
    )
}

/// Short termination tag used in fixture output.
#[must_use]
pub fn termination_tag(reason: TerminationReasonV1) -> &'static str {
    match reason {
        TerminationReasonV1::GoalReached { .. } => "goal_reached",
        TerminationReasonV1::FrontierExhausted => "frontier_exhausted",
        TerminationReasonV1::DepthLimitReached { .. } => "depth_limit_reached",
        TerminationReasonV1::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
    }
}

/// Deterministic `key=value` lines describing one default run per strategy.
///
/// # Errors
///
/// Propagates [`SearchRunError`] from the runner.
pub fn fixture_lines() -> Result<Vec<String>, SearchRunError> {
    let mut lines = Vec::new();
    for strategy in Strategy::ALL {
        let run = run_default(strategy)?;
        let id = strategy.report_id();
        let steps = run.outcome.solution.as_ref().map_or(0, Vec::len);
        lines.push(format!("{id}.termination={}", termination_tag(run.outcome.termination)));
        lines.push(format!("{id}.steps={steps}"));
        lines.push(format!("{id}.traversals={}", run.outcome.traversals.len()));
        lines.push(format!("{id}.total_expansions={}", run.outcome.total_expansions()));
        lines.push(format!("{id}.report_digest={}", run.report_digest.as_str()));
    }
    Ok(lines)
}
