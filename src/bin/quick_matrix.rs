use std::path::PathBuf;

use h2h_matrix::{matchups, matrix, render};

// This binary is intentionally simple: one positional path in, a Markdown
// table out. It skips the flagged CLI and is meant for quick manual checks.
fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/league.json"));

    let table = matchups::load(&path)?;
    let teams = matchups::sorted_teams(&table);
    let grid = matrix::build(&table, &teams);

    println!("{}", render::markdown(&grid));
    Ok(())
}
