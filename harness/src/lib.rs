//! Ferry Harness: runs the missionaries-and-cannibals world through search.
//!
//! The harness owns orchestration only: it picks runner defaults, drives
//! `ferry_search` and prints progress. Puzzle rules live in `ferry_kernel`;
//! search semantics live in `ferry_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod console;
pub mod contract;
pub mod policy;
pub mod runner;
pub mod worlds;
