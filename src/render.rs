use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Html,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "markdown" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => bail!("unsupported format {other:?} (expected markdown or html)"),
        }
    }
}

// Cell content is emitted verbatim in both renderers. A team name carrying
// a pipe or an angle bracket will break the table; that is accepted.

pub fn markdown(grid: &[Vec<String>]) -> String {
    let Some((header, body)) = grid.split_first() else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(grid.len() + 1);
    lines.push(pipe_row(header));
    let separator = vec![" --- "; header.len()].join("|");
    lines.push(format!("|{separator}|"));
    for row in body {
        lines.push(pipe_row(row));
    }
    lines.join("\n")
}

fn pipe_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

pub fn html(grid: &[Vec<String>]) -> String {
    let Some((header, body)) = grid.split_first() else {
        return String::new();
    };

    let mut lines = vec!["<table>".to_string(), "<thead><tr>".to_string()];
    for cell in header {
        lines.push(format!("<th>{cell}</th>"));
    }
    lines.push("</tr></thead>".to_string());

    lines.push("<tbody>".to_string());
    for row in body {
        lines.push("<tr>".to_string());
        for (idx, cell) in row.iter().enumerate() {
            // The leading cell of a body row is the team label.
            let tag = if idx == 0 { "th" } else { "td" };
            lines.push(format!("<{tag}>{cell}</{tag}>"));
        }
        lines.push("</tr>".to_string());
    }
    lines.push("</tbody>".to_string());

    lines.push("</table>".to_string());
    lines.join("\n")
}
