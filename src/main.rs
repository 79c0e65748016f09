#[macro_use]
mod verbose;
mod cli;

use std::time::Instant;

use anyhow::Result;

use h2h_matrix::render::{self, OutputFormat};
use h2h_matrix::{matchups, matrix};

fn main() -> Result<()> {
    let args = cli::parse();
    if args.help {
        cli::print_help();
        return Ok(());
    }
    verbose::set(args.verbose);

    let Some(input) = args.input else {
        cli::print_help();
        anyhow::bail!("--input is required");
    };
    let format = match args.format.as_deref() {
        Some(raw) => OutputFormat::parse(raw)?,
        None => OutputFormat::Markdown,
    };

    let started = Instant::now();
    let table = matchups::load(&input)?;
    let teams = matchups::sorted_teams(&table);
    vprintln!(
        "[load] {} | {} teams | {:.1?}",
        input.display(),
        teams.len(),
        started.elapsed()
    );

    let started = Instant::now();
    let grid = matrix::build(&table, &teams);
    let rendered = match format {
        OutputFormat::Markdown => render::markdown(&grid),
        OutputFormat::Html => render::html(&grid),
    };
    vprintln!(
        "[render] {:?} | {} rows | {:.1?}",
        format,
        grid.len(),
        started.elapsed()
    );

    println!("{rendered}");
    Ok(())
}
