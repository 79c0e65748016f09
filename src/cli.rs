use std::path::PathBuf;

pub struct Cli {
    pub input: Option<PathBuf>,
    pub format: Option<String>, // validated against the renderer set in main
    pub verbose: bool,
    pub help: bool,
}

pub fn parse() -> Cli {
    parse_from(std::env::args().skip(1))
}

pub fn parse_from(args: impl Iterator<Item = String>) -> Cli {
    let mut input: Option<PathBuf> = None;
    let mut format: Option<String> = None;
    let mut verbose = false;
    let mut help = false;

    let mut it = args;
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                if let Some(p) = it.next() {
                    input = Some(PathBuf::from(p));
                }
            }
            "--format" | "-f" => {
                if let Some(f) = it.next() {
                    format = Some(f);
                }
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => help = true,
            _ => {}
        }
    }

    Cli { input, format, verbose, help }
}

pub fn print_help() {
    eprintln!(
        r#"Head-to-Head Matrix

Usage:
  h2h_matrix --input matchups.json [--format markdown|html] [-v]

Options:
  --input, -i PATH       JSON matchup file (team -> opponent -> record).
  --format, -f FORMAT    Table style: markdown (default) or html.
  -v, --verbose          Stage timings and counts on stderr.
  -h, --help             Show this help.

Notes:
  • The table goes to stdout; nothing is written to disk.
  • A matchup missing at any level counts as zero wins and renders blank.
"#
    );
}
