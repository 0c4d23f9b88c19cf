//! Binary that runs every strategy on missionaries and cannibals and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `<strategy>.<key>=<value>` lines, see `lock_tests::fixture_lines`.

fn main() {
    let lines = lock_tests::fixture_lines().expect("search run failed");
    for line in lines {
        println!("{line}");
    }
}
