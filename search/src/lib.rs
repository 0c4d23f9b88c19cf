//! Ferry Search: uninformed tree search (BFS, DFS, iterative deepening).
//!
//! This crate depends only on `ferry_kernel` for report hashing. It does not
//! know about any particular puzzle: worlds plug in through
//! [`contract::SearchWorld`].
//!
//! # Crate dependency graph
//!
//! ```text
//! ferry_kernel  ←  ferry_search  ←  ferry_harness
//! (state, proof)   (tree, drivers)   (world, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchTree`]: arena of nodes with upward parent links
//! - [`frontier::TreeFrontier`]: FIFO or block-LIFO frontier, no visited set
//! - [`search::search`]: the shared driver loop
//! - [`policy::SearchPolicyV1`]: optional depth limit and expansion budget
//! - [`observer::SearchObserver`]: progress hooks (the crate never prints)
//! - [`report::SearchReportV1`]: deterministic run summary with digest

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod observer;
pub mod policy;
pub mod report;
pub mod search;
pub mod strategy;
