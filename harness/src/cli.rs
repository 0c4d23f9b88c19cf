//! Command-line surface for the `ferry` binary.
//!
//! ```text
//! ferry [B|D|I] [--max-depth N] [--max-expansions N]
//! ```
//!
//! An absent strategy runs breadth-first search. Anything other than the
//! three strategy letters is rejected by clap before a search starts.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use ferry_search::strategy::Strategy;

use crate::console::{write_result, ConsoleObserver};
use crate::policy::PolicyConfig;
use crate::runner::run_search;
use crate::worlds::missionaries::MissionariesCannibals;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "ferry",
    about = "Solve missionaries and cannibals with uninformed tree search"
)]
pub struct Cli {
    /// Search strategy
    #[arg(value_enum, default_value_t = StrategyArg::B, ignore_case = true)]
    pub strategy: StrategyArg,

    /// Deepest node to expand (depth-first defaults to 15)
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Stop after this many expansions
    #[arg(long)]
    pub max_expansions: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Breadth-first search
    #[value(name = "B", alias = "bfs")]
    B,
    /// Depth-first search
    #[value(name = "D", alias = "dfs")]
    D,
    /// Iterative deepening depth-first search
    #[value(name = "I", alias = "iddfs")]
    I,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::B => Strategy::BreadthFirst,
            StrategyArg::D => Strategy::DepthFirst,
            StrategyArg::I => Strategy::IterativeDeepening,
        }
    }
}

impl Cli {
    #[must_use]
    pub fn policy_config(&self) -> PolicyConfig {
        PolicyConfig {
            max_depth: self.max_depth,
            max_expansions: self.max_expansions,
        }
    }
}

/// Run the puzzle as described by `cli`, writing all output to `out`.
///
/// # Errors
///
/// Fails on an invalid policy or on write errors.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let strategy = Strategy::from(cli.strategy);
    let mut observer = ConsoleObserver::new(&mut *out);
    let run = run_search(
        &MissionariesCannibals,
        strategy,
        &cli.policy_config(),
        &mut observer,
    )
    .with_context(|| format!("{strategy} run failed"))?;
    let elapsed = observer.elapsed();
    observer.finish().context("writing search progress")?;

    write_result(out, run.outcome.solution.as_deref(), elapsed)
        .context("writing search result")
}
