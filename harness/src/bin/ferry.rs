//! `ferry`: run one uninformed search on missionaries and cannibals.

use std::io::{self, Write};

use clap::Parser;

use ferry_harness::cli::{execute, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}
