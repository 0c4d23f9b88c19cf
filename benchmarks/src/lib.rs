//! Shared helpers for ferry benchmark suites.

use ferry_harness::contract::WorldHarness;
use ferry_harness::policy::{build_policy, PolicyConfig};
use ferry_harness::worlds::missionaries::MissionariesCannibals;
use ferry_kernel::carrier::trip::Crossing;
use ferry_search::observer::NullObserver;
use ferry_search::policy::SearchPolicyV1;
use ferry_search::search::{search, SearchOutcome};
use ferry_search::strategy::Strategy;

/// Runner-default policy for `strategy`, built once outside the timed loop.
#[must_use]
pub fn default_policy(strategy: Strategy) -> SearchPolicyV1 {
    build_policy(strategy, &PolicyConfig::default())
}

/// Call `search()` directly, bypassing report construction and digesting.
///
/// # Panics
///
/// Panics if the policy is invalid. Benchmark setup failures are fatal.
#[must_use]
pub fn run_search_only(strategy: Strategy, policy: &SearchPolicyV1) -> SearchOutcome<Crossing> {
    let world = MissionariesCannibals;
    search(
        &world,
        &world.initial_state(),
        strategy,
        policy,
        &mut NullObserver,
    )
    .expect("benchmark policy is valid")
}
