use h2h_matrix::matchups::{parse_matchup_json, sorted_teams};
use h2h_matrix::{matrix, render};

fn grid_for(raw: &str) -> Vec<Vec<String>> {
    let table = parse_matchup_json(raw).expect("test input should parse");
    let teams = sorted_teams(&table);
    matrix::build(&table, &teams)
}

#[test]
fn markdown_two_team_table() {
    let grid = grid_for(r#"{"A": {"B": {"W": 3}}, "B": {"A": {"W": 1}}}"#);
    let expected = "\
|  | A | B |\n\
| --- | --- | --- |\n\
| A | -- | 3 |\n\
| B | 1 | -- |";
    assert_eq!(render::markdown(&grid), expected);
}

#[test]
fn markdown_blank_cells_when_nothing_recorded() {
    let grid = grid_for(r#"{"A": {}, "B": {}}"#);
    let out = render::markdown(&grid);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[2], "| A | -- |  |");
    assert_eq!(lines[3], "| B |  | -- |");
}

#[test]
fn markdown_rows_all_have_the_same_column_count() {
    let grid = grid_for(
        r#"{"Arsenal": {"Chelsea": {"W": 3}}, "Chelsea": {}, "Liverpool": {"Arsenal": {"W": 4}}}"#,
    );
    let out = render::markdown(&grid);
    for line in out.lines() {
        // Interior segments between the framing pipes.
        assert_eq!(line.split('|').count() - 2, 4, "line: {line}");
    }
}

#[test]
fn markdown_empty_table_is_header_and_separator_only() {
    let grid = grid_for("{}");
    assert_eq!(render::markdown(&grid), "|  |\n| --- |");
}

#[test]
fn html_two_team_table() {
    let grid = grid_for(r#"{"A": {"B": {"W": 3}}, "B": {"A": {"W": 1}}}"#);
    let expected = "\
<table>\n\
<thead><tr>\n\
<th></th>\n\
<th>A</th>\n\
<th>B</th>\n\
</tr></thead>\n\
<tbody>\n\
<tr>\n\
<th>A</th>\n\
<td>--</td>\n\
<td>3</td>\n\
</tr>\n\
<tr>\n\
<th>B</th>\n\
<td>1</td>\n\
<td>--</td>\n\
</tr>\n\
</tbody>\n\
</table>";
    assert_eq!(render::html(&grid), expected);
}

#[test]
fn html_empty_table_has_empty_body() {
    let grid = grid_for("{}");
    let expected = "\
<table>\n\
<thead><tr>\n\
<th></th>\n\
</tr></thead>\n\
<tbody>\n\
</tbody>\n\
</table>";
    assert_eq!(render::html(&grid), expected);
}

#[test]
fn both_renderers_return_empty_for_a_zero_row_grid() {
    let grid: Vec<Vec<String>> = Vec::new();
    assert_eq!(render::markdown(&grid), "");
    assert_eq!(render::html(&grid), "");
}

#[test]
fn cell_content_is_not_escaped() {
    let grid = grid_for(r#"{"A&B": {}, "C<D>": {}}"#);
    let html = render::html(&grid);
    assert!(html.contains("<th>A&B</th>"));
    assert!(html.contains("<th>C<D></th>"));
}
