//! Text and JSON rendering for CLI output

use console::Style;
use serde::Serialize;
use stonestatlib::{CnfBounds, CnfPoints, Summary};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text (styled when stdout is a terminal)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputMode {
    /// Parse the `--format` flag value.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some("json") => OutputMode::Json,
            _ => OutputMode::Text,
        }
    }

    pub fn is_structured(self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

/// Style for section headings
fn heading() -> Style {
    Style::new().bold()
}

/// Serialize a value as pretty JSON with a trailing newline
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// JSON shape of the `stats` command
#[derive(Debug, Serialize)]
struct StatsJson<'a> {
    #[serde(flatten)]
    summary: &'a Summary,
    average: Option<f64>,
    target: Option<usize>,
}

/// Render a board summary
pub fn render_stats(
    summary: &Summary,
    target: Option<usize>,
    mode: OutputMode,
) -> Result<String, serde_json::Error> {
    if mode.is_structured() {
        return to_json(&StatsJson {
            summary,
            average: summary.average(),
            target,
        });
    }

    let Some(average) = summary.average() else {
        return Ok("No boards found.\n".to_string());
    };

    let heading = heading();
    let mut output = format!("Average stones: {:.6}\n", average);
    output.push_str(&format!("{}\n", heading.apply_to("Boards per stone count:")));
    for (stones, boards) in summary.distribution.iter() {
        output.push_str(&format!("  {}: {}\n", stones, boards));
    }

    if let Some(stones) = target {
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            heading.apply_to(format!("Boards with {} stones:", stones))
        ));
        if summary.matches.is_empty() {
            output.push_str("  No matching boards.\n");
        }
        for board in &summary.matches {
            output.push_str(board);
            output.push('\n');
        }
    }

    Ok(output)
}

/// JSON shape of the `cnf` command
#[derive(Debug, Serialize)]
struct CnfJson<'a> {
    points: &'a CnfPoints,
    bounds: Option<CnfBounds>,
}

/// Render decoded CNF points
pub fn render_cnf(points: &CnfPoints, mode: OutputMode) -> Result<String, serde_json::Error> {
    let bounds = points.bounds();
    if mode.is_structured() {
        return to_json(&CnfJson { points, bounds });
    }

    let mut output = format!("{}\n", heading().apply_to(format!("CNF records: {}", points.len())));
    output.push_str(&format!("  ans = true:  {}\n", points.satisfiable.len()));
    output.push_str(&format!("  ans = false: {}\n", points.unsatisfiable.len()));
    if let Some(bounds) = bounds {
        output.push_str(&format!(
            "vars:    {}..{}\n",
            bounds.vars.min, bounds.vars.max
        ));
        output.push_str(&format!(
            "clauses: {}..{}\n",
            bounds.clauses.min, bounds.clauses.max
        ));
    }
    Ok(output)
}
