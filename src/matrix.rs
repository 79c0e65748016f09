use crate::matchups::{self, MatchupTable};

/// Builds the head-to-head grid: a header row (blank corner cell, then the
/// team names), followed by one row per team in the same order. `teams` is
/// the ordering authority for both axes.
pub fn build(table: &MatchupTable, teams: &[String]) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(teams.len() + 1);

    let mut header = Vec::with_capacity(teams.len() + 1);
    header.push(String::new());
    header.extend(teams.iter().cloned());
    grid.push(header);

    for team in teams {
        let mut row = Vec::with_capacity(teams.len() + 1);
        row.push(team.clone());
        for opponent in teams {
            row.push(cell(table, team, opponent));
        }
        grid.push(row);
    }

    grid
}

// The two directions of a pairing are looked up independently; nothing here
// assumes table[A][B] and table[B][A] agree on anything.
fn cell(table: &MatchupTable, team: &str, opponent: &str) -> String {
    if team == opponent {
        return "--".to_string();
    }
    let wins = matchups::win_count(table, team, opponent);
    if wins > 0 {
        wins.to_string()
    } else {
        String::new()
    }
}
