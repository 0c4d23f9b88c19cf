//! Line-oriented console output for command-line runs.
//!
//! Format:
//!
//! ```text
//! BFS
//! [depth = 0] 0.00s
//! ...
//! 10963 expansions
//! solution (11 steps):
//! take 0 missionaries and 2 cannibals from the original shore to the new shore. < State (3, 1, 0) >
//! ...
//! elapsed time: 0.01s
//! ```
//!
//! Depth lines carry wall-clock seconds since the observer was created.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use ferry_search::observer::SearchObserver;
use ferry_search::strategy::Strategy;

/// Writes search progress to `out` as it happens.
///
/// Observer hooks cannot fail, so the first write error is kept and returned
/// by [`ConsoleObserver::finish`]; later events are dropped.
pub struct ConsoleObserver<W: Write> {
    out: W,
    started: Instant,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleObserver<W> {
    /// Start the clock now.
    pub fn new(out: W) -> Self {
        Self::with_start(out, Instant::now())
    }

    /// Measure elapsed time from `started`.
    pub fn with_start(out: W, started: Instant) -> Self {
        Self {
            out,
            started,
            error: None,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Hand back the writer, or the first write error.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error hit while writing progress lines.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}") {
            self.error = Some(err);
        }
    }
}

impl<W: Write> SearchObserver for ConsoleObserver<W> {
    fn search_started(&mut self, strategy: Strategy) {
        self.line(format_args!("{}", strategy.label()));
    }

    fn depth_reached(&mut self, depth: u32) {
        let secs = self.elapsed().as_secs_f64();
        self.line(format_args!("[depth = {depth}] {secs:.2}s"));
    }

    fn traversal_finished(&mut self, expansions: u64) {
        self.line(format_args!("{expansions} expansions"));
    }
}

/// Write the solution block and the closing elapsed-time line.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_result<W: Write, A: Display>(
    out: &mut W,
    solution: Option<&[A]>,
    elapsed: Duration,
) -> io::Result<()> {
    match solution {
        None => writeln!(out, "no solution")?,
        Some(steps) => {
            writeln!(out, "solution ({} steps):", steps.len())?;
            for step in steps {
                writeln!(out, "{step}")?;
            }
        }
    }
    writeln!(out, "elapsed time: {:.2}s", elapsed.as_secs_f64())
}
