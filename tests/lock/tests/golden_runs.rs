//! Golden counters for the three strategies on missionaries and cannibals.
//!
//! These numbers pin tree-search semantics: generation order, frontier
//! discipline, depth cutoffs and the no-duplicate-detection rule. Any change
//! to one of them is a behavior change, not a refactor.

use ferry_harness::policy::DEFAULT_DFS_DEPTH_LIMIT;
use ferry_search::search::{TerminationReasonV1, TraversalStatsV1};
use ferry_search::strategy::Strategy;
use lock_tests::run_default;

const BFS_SOLUTION: [&str; 11] = [
    "take 0 missionaries and 2 cannibals from the original shore to the new shore. < State (3, 1, 0) >",
    "take 0 missionaries and 1 cannibals back from the new shore to the original shore. < State (3, 2, 1) >",
    "take 0 missionaries and 2 cannibals from the original shore to the new shore. < State (3, 0, 0) >",
    "take 0 missionaries and 1 cannibals back from the new shore to the original shore. < State (3, 1, 1) >",
    "take 2 missionaries and 0 cannibals from the original shore to the new shore. < State (1, 1, 0) >",
    "take 1 missionaries and 1 cannibals back from the new shore to the original shore. < State (2, 2, 1) >",
    "take 2 missionaries and 0 cannibals from the original shore to the new shore. < State (0, 2, 0) >",
    "take 0 missionaries and 1 cannibals back from the new shore to the original shore. < State (0, 3, 1) >",
    "take 0 missionaries and 2 cannibals from the original shore to the new shore. < State (0, 1, 0) >",
    "take 0 missionaries and 1 cannibals back from the new shore to the original shore. < State (0, 2, 1) >",
    "take 0 missionaries and 2 cannibals from the original shore to the new shore. < State (0, 0, 0) >",
];

#[test]
fn breadth_first_golden() {
    let run = run_default(Strategy::BreadthFirst).unwrap();
    assert_eq!(
        run.outcome.termination,
        TerminationReasonV1::GoalReached { depth: 11 }
    );
    assert_eq!(
        run.outcome.traversals,
        vec![TraversalStatsV1 {
            cutoff: None,
            expansions: 10_963,
            max_depth: Some(11),
            frontier_high_water: 14_280,
            nodes_allocated: 25_243,
            depth_skips: 0,
        }]
    );
    let labels = run.report.solution.unwrap();
    assert_eq!(labels, BFS_SOLUTION);
}

#[test]
fn depth_first_golden() {
    let run = run_default(Strategy::DepthFirst).unwrap();
    assert_eq!(DEFAULT_DFS_DEPTH_LIMIT, 15);
    assert_eq!(
        run.outcome.termination,
        TerminationReasonV1::GoalReached { depth: 15 }
    );
    assert_eq!(
        run.outcome.traversals,
        vec![TraversalStatsV1 {
            cutoff: Some(15),
            expansions: 5_420,
            max_depth: Some(15),
            frontier_high_water: 22,
            nodes_allocated: 11_454,
            depth_skips: 6_021,
        }]
    );

    // First-generated child first: the run shuttles one cannibal back and
    // forth before making progress.
    let labels = run.report.solution.unwrap();
    assert_eq!(labels.len(), 15);
    assert_eq!(
        labels[0],
        "take 0 missionaries and 1 cannibals from the original shore to the new shore. < State (3, 2, 0) >"
    );
    assert!(labels[1].ends_with("< State (3, 3, 1) >"));
    assert!(labels[3].ends_with("< State (3, 3, 1) >"));
    assert!(labels[14].ends_with("< State (0, 0, 0) >"));
}

#[test]
fn iterative_deepening_golden() {
    let run = run_default(Strategy::IterativeDeepening).unwrap();
    assert_eq!(
        run.outcome.termination,
        TerminationReasonV1::GoalReached { depth: 11 }
    );
    assert_eq!(run.outcome.traversals.len(), 12);
    for (cutoff, stats) in (0u32..).zip(&run.outcome.traversals) {
        assert_eq!(stats.cutoff, Some(cutoff));
    }
    assert_eq!(
        run.outcome.traversals[11],
        TraversalStatsV1 {
            cutoff: Some(11),
            expansions: 5_416,
            max_depth: Some(11),
            frontier_high_water: 18,
            nodes_allocated: 11_446,
            depth_skips: 6_021,
        }
    );
    assert_eq!(run.outcome.total_expansions(), 19_448);
    assert_eq!(run.outcome.max_depth(), Some(11));
}

#[test]
fn iterative_deepening_finds_the_breadth_first_path() {
    let ids = run_default(Strategy::IterativeDeepening).unwrap().report.solution.unwrap();
    assert_eq!(ids, BFS_SOLUTION);
}

#[test]
fn breadth_first_expands_more_than_depth_first() {
    let bfs = run_default(Strategy::BreadthFirst).unwrap();
    let dfs = run_default(Strategy::DepthFirst).unwrap();
    assert!(bfs.outcome.total_expansions() > dfs.outcome.total_expansions());
    assert!(bfs.outcome.frontier_high_water() > 100 * dfs.outcome.frontier_high_water());
}
