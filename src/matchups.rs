use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One team's record against one opponent. Only the win column feeds the
/// matrix; losses, draws and anything else the source carries are ignored.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MatchupRecord {
    #[serde(rename = "W", default)]
    pub wins: i64,
}

pub type MatchupTable = HashMap<String, HashMap<String, MatchupRecord>>;

pub fn load(path: &Path) -> Result<MatchupTable> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read matchup file {}", path.display()))?;
    parse_matchup_json(&raw)
}

pub fn parse_matchup_json(raw: &str) -> Result<MatchupTable> {
    serde_json::from_str(raw.trim()).context("invalid matchup json")
}

pub fn sorted_teams(table: &MatchupTable) -> Vec<String> {
    let mut teams: Vec<String> = table.keys().cloned().collect();
    teams.sort_unstable();
    teams
}

// A miss at any level of the lookup collapses to 0; callers cannot tell
// "no matchup recorded" apart from "recorded zero wins".
pub fn win_count(table: &MatchupTable, team: &str, opponent: &str) -> i64 {
    table
        .get(team)
        .and_then(|opponents| opponents.get(opponent))
        .map(|record| record.wins)
        .unwrap_or(0)
}
