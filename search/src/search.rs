//! Search entry points and the shared tree-search loop.
//!
//! All three drivers run the same loop over a [`TreeFrontier`]:
//!
//! 1. frontier empty → the traversal is exhausted;
//! 2. pop a node; if it is deeper than the cutoff, skip it;
//! 3. if it is a goal → extract the solution by walking parent links;
//! 4. otherwise expand it and insert its children.
//!
//! No visited set is kept. A state reachable along several paths is expanded
//! once per path.

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::{FrontierDiscipline, TreeFrontier};
use crate::node::SearchTree;
use crate::observer::SearchObserver;
use crate::policy::SearchPolicyV1;
use crate::strategy::Strategy;

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A goal node was popped at this depth.
    GoalReached { depth: u32 },
    /// The frontier emptied and no node was cut off by a depth limit.
    FrontierExhausted,
    /// No goal within the depth limit (nodes beyond it were skipped), or
    /// iterative deepening passed its cap.
    DepthLimitReached { limit: u32 },
    /// The expansion budget ran out before a goal was found.
    ExpansionBudgetExceeded { budget: u64 },
}

/// Counters for one traversal (one per iterative deepening cutoff).
///
/// Diagnostic only: none of these values feed back into control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalStatsV1 {
    /// Depth cutoff in force (`None` = unbounded).
    pub cutoff: Option<u32>,
    pub expansions: u64,
    /// Deepest node popped and considered (`None` if nothing was).
    pub max_depth: Option<u32>,
    pub frontier_high_water: u64,
    pub nodes_allocated: u64,
    /// Nodes popped but skipped for being deeper than the cutoff.
    pub depth_skips: u64,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome<A> {
    pub strategy: Strategy,
    pub termination: TerminationReasonV1,
    /// Root-to-goal actions; `Some` exactly when a goal was reached.
    pub solution: Option<Vec<A>>,
    pub traversals: Vec<TraversalStatsV1>,
}

impl<A> SearchOutcome<A> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReasonV1::GoalReached { .. })
    }

    /// Expansions summed over every traversal.
    #[must_use]
    pub fn total_expansions(&self) -> u64 {
        self.traversals.iter().map(|t| t.expansions).sum()
    }

    /// Deepest node considered in any traversal.
    #[must_use]
    pub fn max_depth(&self) -> Option<u32> {
        self.traversals.iter().filter_map(|t| t.max_depth).max()
    }

    #[must_use]
    pub fn frontier_high_water(&self) -> u64 {
        self.traversals
            .iter()
            .map(|t| t.frontier_high_water)
            .max()
            .unwrap_or(0)
    }
}

/// Run `strategy` from `root`.
///
/// Exhaustion, depth limits and budgets are reported through
/// [`SearchOutcome::termination`], never as errors.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails pre-flight
/// validation. No node is expanded in that case.
pub fn search<W: SearchWorld>(
    world: &W,
    root: &W::State,
    strategy: Strategy,
    policy: &SearchPolicyV1,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome<W::Action>, SearchError> {
    policy.validate()?;
    observer.search_started(strategy);
    let mut budget = ExpansionBudget::new(policy.max_expansions);

    let outcome = match strategy {
        Strategy::BreadthFirst | Strategy::DepthFirst => {
            single_pass(world, root, strategy, policy, &mut budget, observer)
        }
        Strategy::IterativeDeepening => {
            iterative_deepening(world, root, policy, &mut budget, observer)
        }
    };
    Ok(outcome)
}

/// Breadth-first tree search: FIFO frontier, shortest solution first.
///
/// # Errors
///
/// See [`search`].
pub fn breadth_first_tree_search<W: SearchWorld>(
    world: &W,
    root: &W::State,
    policy: &SearchPolicyV1,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome<W::Action>, SearchError> {
    search(world, root, Strategy::BreadthFirst, policy, observer)
}

/// Depth-first tree search: children inserted at the head of the frontier.
///
/// Without a depth limit this never terminates on worlds with reversible
/// actions.
///
/// # Errors
///
/// See [`search`].
pub fn depth_first_tree_search<W: SearchWorld>(
    world: &W,
    root: &W::State,
    policy: &SearchPolicyV1,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome<W::Action>, SearchError> {
    search(world, root, Strategy::DepthFirst, policy, observer)
}

/// Iterative deepening: depth-first traversals with cutoff 0, 1, 2, ...
///
/// Without `policy.max_depth` this only terminates when a goal is found.
///
/// # Errors
///
/// See [`search`].
pub fn iterative_deepening_depth_first_tree_search<W: SearchWorld>(
    world: &W,
    root: &W::State,
    policy: &SearchPolicyV1,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome<W::Action>, SearchError> {
    search(world, root, Strategy::IterativeDeepening, policy, observer)
}

fn single_pass<W: SearchWorld>(
    world: &W,
    root: &W::State,
    strategy: Strategy,
    policy: &SearchPolicyV1,
    budget: &mut ExpansionBudget,
    observer: &mut dyn SearchObserver,
) -> SearchOutcome<W::Action> {
    let (end, stats) = traverse(
        world,
        root,
        strategy.discipline(),
        policy.max_depth,
        budget,
        observer,
    );
    let (termination, solution) = match (end, policy.max_depth) {
        (TraversalEnd::Goal { solution, depth }, _) => {
            (TerminationReasonV1::GoalReached { depth }, Some(solution))
        }
        (TraversalEnd::BudgetExceeded { budget }, _) => {
            (TerminationReasonV1::ExpansionBudgetExceeded { budget }, None)
        }
        (TraversalEnd::Exhausted, Some(limit)) if stats.depth_skips > 0 => {
            (TerminationReasonV1::DepthLimitReached { limit }, None)
        }
        (TraversalEnd::Exhausted, _) => (TerminationReasonV1::FrontierExhausted, None),
    };
    SearchOutcome {
        strategy,
        termination,
        solution,
        traversals: vec![stats],
    }
}

fn iterative_deepening<W: SearchWorld>(
    world: &W,
    root: &W::State,
    policy: &SearchPolicyV1,
    budget: &mut ExpansionBudget,
    observer: &mut dyn SearchObserver,
) -> SearchOutcome<W::Action> {
    let strategy = Strategy::IterativeDeepening;
    let mut traversals = Vec::new();
    let mut cutoff: u32 = 0;

    let (termination, solution) = loop {
        if let Some(limit) = policy.max_depth {
            if cutoff > limit {
                break (TerminationReasonV1::DepthLimitReached { limit }, None);
            }
        }

        observer.iteration_started(cutoff);
        let (end, stats) = traverse(
            world,
            root,
            strategy.discipline(),
            Some(cutoff),
            budget,
            observer,
        );
        traversals.push(stats);

        match end {
            TraversalEnd::Goal { solution, depth } => {
                break (TerminationReasonV1::GoalReached { depth }, Some(solution));
            }
            TraversalEnd::BudgetExceeded { budget } => {
                break (TerminationReasonV1::ExpansionBudgetExceeded { budget }, None);
            }
            TraversalEnd::Exhausted => {}
        }

        let Some(next) = cutoff.checked_add(1) else {
            break (TerminationReasonV1::FrontierExhausted, None);
        };
        cutoff = next;
    };

    SearchOutcome {
        strategy,
        termination,
        solution,
        traversals,
    }
}

/// How a single traversal ended.
enum TraversalEnd<A> {
    Goal { solution: Vec<A>, depth: u32 },
    Exhausted,
    BudgetExceeded { budget: u64 },
}

/// Expansion budget shared by all traversals of one run.
struct ExpansionBudget {
    limit: Option<u64>,
    spent: u64,
}

impl ExpansionBudget {
    fn new(limit: Option<u64>) -> Self {
        Self { limit, spent: 0 }
    }

    /// Spend one expansion. Returns the limit instead if it is used up.
    fn spend(&mut self) -> Result<(), u64> {
        match self.limit {
            Some(limit) if self.spent >= limit => Err(limit),
            _ => {
                self.spent += 1;
                Ok(())
            }
        }
    }
}

/// One frontier-managed traversal from a fresh root.
fn traverse<W: SearchWorld>(
    world: &W,
    root: &W::State,
    discipline: FrontierDiscipline,
    cutoff: Option<u32>,
    budget: &mut ExpansionBudget,
    observer: &mut dyn SearchObserver,
) -> (TraversalEnd<W::Action>, TraversalStatsV1) {
    let mut tree: SearchTree<W::State, W::Action> = SearchTree::new(root.clone());
    let mut frontier = TreeFrontier::new(discipline, tree.root());
    let mut stats = TraversalStatsV1 {
        cutoff,
        ..TraversalStatsV1::default()
    };

    let end = loop {
        let Some(id) = frontier.pop() else {
            break TraversalEnd::Exhausted;
        };
        let node = tree.get(id);
        let depth = node.depth;

        if cutoff.is_some_and(|limit| depth > limit) {
            stats.depth_skips += 1;
            continue;
        }

        let deeper = match stats.max_depth {
            Some(deepest) => depth > deepest,
            None => true,
        };
        if deeper {
            stats.max_depth = Some(depth);
            observer.depth_reached(depth);
        }

        if world.is_goal(&node.state) {
            break TraversalEnd::Goal {
                solution: tree.extract_solution(id),
                depth,
            };
        }

        if let Err(budget) = budget.spend() {
            break TraversalEnd::BudgetExceeded { budget };
        }
        stats.expansions += 1;
        frontier.insert_children(tree.expand(world, id));
    };

    stats.frontier_high_water = frontier.high_water();
    stats.nodes_allocated = tree.len() as u64;
    observer.traversal_finished(stats.expansions);
    (end, stats)
}
