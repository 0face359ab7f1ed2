//! Cross-dataset distribution report.
//!
//! `DistributionReport` merges any number of datasets into one table:
//!
//! - one row per stone count seen in *any* dataset, ascending
//! - one column per dataset, in the order given
//! - one total per dataset (its board count)
//!
//! The report is plain data and can be serialized directly or rendered as
//! Markdown with [`DistributionReport::to_markdown`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::summary::Dataset;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "# Stone Count Distribution";

/// Header of the stone-count column.
pub const STONES_HEADER: &str = "Stones";

/// Options for building a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// First line of the document
    pub title: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ReportOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// One row: a stone count and each dataset's frequency for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Stone count
    pub stones: usize,
    /// Boards with this stone count, one entry per dataset
    pub counts: Vec<u64>,
}

/// Board total for one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetTotal {
    /// Dataset name
    pub name: String,
    /// Boards read from the dataset
    pub boards: u64,
}

/// Table-ready comparison of several datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionReport {
    /// Title line
    pub title: String,
    /// Column headers: ["Stones", dataset1, dataset2, ...]
    pub headers: Vec<String>,
    /// Data rows, ascending by stone count
    pub rows: Vec<ReportRow>,
    /// Per-dataset totals, in column order
    pub totals: Vec<DatasetTotal>,
}

impl DistributionReport {
    /// Build a report from datasets. Column order follows `datasets`.
    ///
    /// No datasets, or only empty ones, give a report with no rows; that is
    /// not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stonestatlib::{Dataset, Distribution, DistributionReport};
    ///
    /// let a = Dataset::new("a", [(1, 2), (2, 1)].into_iter().collect::<Distribution>());
    /// let b = Dataset::new("b", [(2, 3), (4, 1)].into_iter().collect::<Distribution>());
    /// let report = DistributionReport::build(&[a, b], "# Stones");
    ///
    /// assert_eq!(report.stone_counts(), vec![1, 2, 4]);
    /// assert_eq!(report.rows[2].counts, vec![0, 1]);
    /// ```
    pub fn build(datasets: &[Dataset], title: impl Into<String>) -> Self {
        let stones: BTreeSet<usize> = datasets
            .iter()
            .flat_map(|d| d.distribution.keys())
            .collect();

        let rows = stones
            .into_iter()
            .map(|stones| ReportRow {
                stones,
                counts: datasets
                    .iter()
                    .map(|d| d.distribution.get(stones))
                    .collect(),
            })
            .collect();

        let mut headers = vec![STONES_HEADER.to_string()];
        headers.extend(datasets.iter().map(|d| d.name.clone()));

        let totals = datasets
            .iter()
            .map(|d| DatasetTotal {
                name: d.name.clone(),
                boards: d.board_count,
            })
            .collect();

        DistributionReport {
            title: title.into(),
            headers,
            rows,
            totals,
        }
    }

    /// Build a report using `options`.
    pub fn with_options(datasets: &[Dataset], options: &ReportOptions) -> Self {
        Self::build(datasets, options.title.clone())
    }

    /// Stone counts of the rows, in row order.
    pub fn stone_counts(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.stones).collect()
    }

    /// Render as a Markdown document ending with a newline.
    pub fn to_markdown(&self) -> String {
        let mut lines = vec![self.title.clone(), String::new()];

        lines.push(markdown_row(&self.headers));
        lines.push(markdown_row(&vec!["---".to_string(); self.headers.len()]));
        for row in &self.rows {
            let mut cells = vec![row.stones.to_string()];
            cells.extend(row.counts.iter().map(u64::to_string));
            lines.push(markdown_row(&cells));
        }

        lines.push(String::new());
        lines.push("Totals".to_string());
        for total in &self.totals {
            lines.push(format!("- {}: {} boards", total.name, total.boards));
        }
        lines.push(String::new());

        lines.join("\n")
    }
}

fn markdown_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
