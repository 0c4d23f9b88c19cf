//! Carrier module: the puzzle state and the boat trips that move between states.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod state;
pub mod trip;
