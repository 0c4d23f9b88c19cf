//! Ferry Kernel: the Missionaries-and-Cannibals state model.
//!
//! # API Surface
//!
//! - [`carrier::state::RiverState`] -- the `(m, c, b)` triple with validity,
//!   goal test and lazy successor generation
//! - [`carrier::trip::Crossing`] -- the action label produced by each successor
//! - [`proof::hash::canonical_hash`] and [`proof::canon::canonical_json_bytes`]
//!   -- the single digest path for run reports
//!
//! # Module Dependency Direction
//!
//! `carrier` and `proof` are independent. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
