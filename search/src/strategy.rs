//! The three uninformed tree-search strategies.

use std::fmt;

use crate::frontier::FrontierDiscipline;

/// Which driver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::IterativeDeepening,
    ];

    /// Short label printed when a search starts (`BFS`, `DFS`, `IDDFS`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::IterativeDeepening => "IDDFS",
        }
    }

    /// Stable identifier used in run reports.
    #[must_use]
    pub fn report_id(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::IterativeDeepening => "iterative_deepening",
        }
    }

    /// Frontier discipline of each traversal.
    #[must_use]
    pub fn discipline(self) -> FrontierDiscipline {
        match self {
            Self::BreadthFirst => FrontierDiscipline::Fifo,
            Self::DepthFirst | Self::IterativeDeepening => FrontierDiscipline::BlockLifo,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
