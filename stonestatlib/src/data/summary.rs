//! Stone-count aggregation over a board stream.
//!
//! This module provides the main entry points for summarizing board files:
//! a single streaming pass that validates every board, counts its stones, and
//! folds the result into a [`Summary`]. The first malformed board aborts the
//! whole pass; no partial summary is ever returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StonestatError;
use crate::source::inputs::{dataset_name, resolve_inputs};
use crate::source::records::records;
use crate::Result;

use super::board::count_stones;
use super::distribution::Distribution;

/// Options for summarizing a board stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Collect boards with exactly this many stones
    pub target: Option<usize>,
}

impl SummaryOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the boards that have exactly `stones` stones.
    pub fn target(mut self, stones: usize) -> Self {
        self.target = Some(stones);
        self
    }
}

/// Result of summarizing one board stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of boards read
    pub board_count: u64,
    /// Boards per stone count
    pub distribution: Distribution,
    /// Boards matching the requested target, in input order
    pub matches: Vec<String>,
}

impl Summary {
    /// Create a new empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean stones per board. `None` when no boards were read.
    pub fn average(&self) -> Option<f64> {
        if self.board_count == 0 {
            return None;
        }
        Some(self.distribution.stone_total() as f64 / self.board_count as f64)
    }

    /// Name this summary, dropping the matched boards.
    pub fn into_dataset(self, name: impl Into<String>) -> Dataset {
        Dataset {
            name: name.into(),
            board_count: self.board_count,
            distribution: self.distribution,
        }
    }
}

/// A named, finished summary: one column of a distribution report.
///
/// `board_count` always equals the sum of the distribution; deserializing a
/// dataset where they disagree fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DatasetParts")]
pub struct Dataset {
    /// Column name (usually the input file name)
    pub name: String,
    /// Number of boards read
    pub board_count: u64,
    /// Boards per stone count
    pub distribution: Distribution,
}

impl Dataset {
    /// Create a dataset; the board count is taken from the distribution.
    pub fn new(name: impl Into<String>, distribution: Distribution) -> Self {
        Self {
            name: name.into(),
            board_count: distribution.board_count(),
            distribution,
        }
    }
}

/// Unchecked wire form of a [`Dataset`].
#[derive(Deserialize)]
struct DatasetParts {
    name: String,
    board_count: u64,
    distribution: Distribution,
}

impl TryFrom<DatasetParts> for Dataset {
    type Error = String;

    fn try_from(parts: DatasetParts) -> std::result::Result<Self, Self::Error> {
        let summed = parts.distribution.board_count();
        if parts.board_count != summed {
            return Err(format!(
                "dataset '{}' has board_count {} but its distribution sums to {}",
                parts.name, parts.board_count, summed
            ));
        }
        Ok(Dataset::new(parts.name, parts.distribution))
    }
}

/// Summarize a stream of boards.
///
/// Reads the input once. Blank lines are ignored; every other line must be a
/// valid board.
///
/// # Example
///
/// ```rust
/// use stonestatlib::{summarize, SummaryOptions};
///
/// let input = "OX-\nO--\n\nXXX\n";
/// let summary = summarize(input.as_bytes(), SummaryOptions::new().target(3)).unwrap();
/// assert_eq!(summary.board_count, 3);
/// assert_eq!(summary.distribution.get(2), 1);
/// assert_eq!(summary.matches, vec!["XXX"]);
/// assert_eq!(summary.average(), Some(2.0));
/// ```
pub fn summarize<R: BufRead>(reader: R, options: SummaryOptions) -> Result<Summary> {
    let mut summary = Summary::new();

    for board in records(reader) {
        let board = board?;
        let stones = count_stones(&board)?;
        summary.board_count += 1;
        summary.distribution.record(stones);
        if options.target == Some(stones) {
            summary.matches.push(board);
        }
    }

    debug!(
        boards = summary.board_count,
        distinct = summary.distribution.len(),
        "summarized board stream"
    );
    Ok(summary)
}

/// Summarize the boards in a file.
pub fn summarize_path(path: impl AsRef<Path>, options: SummaryOptions) -> Result<Summary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StonestatError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "reading boards");
    summarize(BufReader::new(file), options)
}

/// Load one dataset per file, in the order given.
///
/// Every path is checked up front; if any are missing the call fails naming
/// all of them. Files are then summarized on the rayon pool, so at most one
/// file per pool thread is open at a time, and collected back in input order.
/// A failing file stops the remaining work and its error is returned; when
/// several files are malformed, which one is reported is unspecified.
pub fn load_datasets<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Dataset>> {
    let paths = resolve_inputs(paths)?;

    paths
        .par_iter()
        .map(|path| -> Result<Dataset> {
            let summary = summarize_path(path, SummaryOptions::new())?;
            Ok(summary.into_dataset(dataset_name(path)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run(input: &str, options: SummaryOptions) -> Result<Summary> {
        summarize(input.as_bytes(), options)
    }

    #[test]
    fn test_three_boards() {
        let summary = run("OX-\nO--\nXXX\n", SummaryOptions::new()).unwrap();
        assert_eq!(summary.board_count, 3);
        assert_eq!(
            summary.distribution.iter().collect::<Vec<_>>(),
            vec![(1, 1), (2, 1), (3, 1)]
        );
        assert_eq!(summary.average(), Some(2.0));
        assert!(summary.matches.is_empty());
    }

    #[test]
    fn test_malformed_board_aborts() {
        let err = run("OX-\nOY-\nXXX\n", SummaryOptions::new()).unwrap_err();
        match err {
            StonestatError::MalformedRecord { record, .. } => assert_eq!(record, "OY-"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_board_is_reported_trimmed_but_verbatim() {
        let err = run("  O.X  \n", SummaryOptions::new()).unwrap_err();
        assert!(matches!(
            err,
            StonestatError::MalformedRecord { ref record, character: '.' } if record == "O.X"
        ));
    }

    #[test]
    fn test_empty_input() {
        let summary = run("\n  \n", SummaryOptions::new().target(0)).unwrap();
        assert_eq!(summary.board_count, 0);
        assert!(summary.distribution.is_empty());
        assert!(summary.matches.is_empty());
        assert_eq!(summary.average(), None);
    }

    #[test]
    fn test_target_matches_keep_order() {
        let input = "XX--\nO---\n-OX-\nOXOX\n--XO\n";
        let summary = run(input, SummaryOptions::new().target(2)).unwrap();
        assert_eq!(summary.matches, vec!["XX--", "-OX-", "--XO"]);
        assert_eq!(summary.distribution.get(2), 3);
    }

    #[test]
    fn test_target_without_matches() {
        let summary = run("OX-\n", SummaryOptions::new().target(7)).unwrap();
        assert_eq!(summary.board_count, 1);
        assert!(summary.matches.is_empty());
    }

    #[test]
    fn test_frequencies_sum_to_board_count() {
        let input = "O\nX\n-\nOO\nXX\n--\nOX\n\n";
        let summary = run(input, SummaryOptions::new()).unwrap();
        assert_eq!(summary.board_count, 7);
        assert_eq!(summary.distribution.board_count(), summary.board_count);
    }

    #[test]
    fn test_repeated_reads_agree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("boards.txt");
        fs::write(&path, "OX-\nO--\nXXX\n---\n").unwrap();

        let first = summarize_path(&path, SummaryOptions::new()).unwrap();
        let second = summarize_path(&path, SummaryOptions::new()).unwrap();
        assert_eq!(first.board_count, second.board_count);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn test_summarize_path_unreadable() {
        let dir = tempdir().unwrap();
        let err = summarize_path(dir.path().join("nope.txt"), SummaryOptions::new()).unwrap_err();
        assert!(matches!(err, StonestatError::FileRead { .. }));
    }

    #[test]
    fn test_into_dataset_drops_matches() {
        let summary = run("XXX\n", SummaryOptions::new().target(3)).unwrap();
        let dataset = summary.into_dataset("a.txt");
        assert_eq!(dataset.name, "a.txt");
        assert_eq!(dataset.board_count, 1);
        assert_eq!(dataset.distribution.get(3), 1);
    }

    #[test]
    fn test_load_datasets_in_input_order() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "O--\nO--\nOX-\n").unwrap();
        fs::write(&b, "OX--\nOX--\nXO--\nOXOX\n").unwrap();

        let datasets = load_datasets(&[&b, &a]).unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].name, "b.txt");
        assert_eq!(datasets[0].board_count, 4);
        assert_eq!(datasets[0].distribution.get(2), 3);
        assert_eq!(datasets[0].distribution.get(4), 1);
        assert_eq!(datasets[1].name, "a.txt");
        assert_eq!(datasets[1].board_count, 3);
    }

    #[test]
    fn test_dataset_board_count_follows_distribution() {
        let dataset = Dataset::new("a", [(1, 2), (4, 3)].into_iter().collect());
        assert_eq!(dataset.board_count, 5);
    }

    #[test]
    fn test_dataset_deserialize_checks_board_count() {
        let ok: Dataset =
            serde_json::from_str(r#"{"name":"a","board_count":3,"distribution":{"1":2,"2":1}}"#)
                .unwrap();
        assert_eq!(ok.board_count, 3);

        let err = serde_json::from_str::<Dataset>(
            r#"{"name":"a","board_count":9,"distribution":{"1":2,"2":1}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("distribution sums to 3"));
    }

    #[test]
    fn test_load_datasets_many_inputs() {
        let dir = tempdir().unwrap();
        let paths: Vec<_> = (0..600)
            .map(|i| {
                let path = dir.path().join(format!("f{i:03}.txt"));
                let boards = "OX--\n".repeat(i % 7 + 1);
                fs::write(&path, boards).unwrap();
                path
            })
            .collect();

        let datasets = load_datasets(paths.as_slice()).unwrap();
        assert_eq!(datasets.len(), 600);
        for (i, dataset) in datasets.iter().enumerate() {
            assert_eq!(dataset.name, format!("f{i:03}.txt"));
            assert_eq!(dataset.board_count, (i % 7 + 1) as u64);
            assert_eq!(dataset.distribution.get(2), dataset.board_count);
        }
    }

    #[test]
    fn test_load_datasets_reports_missing_before_reading() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.txt");
        fs::write(&bad, "OY-\n").unwrap();
        let missing = dir.path().join("missing.txt");

        let err = load_datasets(&[&bad, &missing]).unwrap_err();
        match err {
            StonestatError::MissingInputs(paths) => assert_eq!(paths, vec![missing]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_datasets_fails_on_any_bad_file() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        fs::write(&good, "OX-\n").unwrap();
        fs::write(&bad, "OX-\nOZ-\n").unwrap();

        let err = load_datasets(&[&good, &bad]).unwrap_err();
        assert!(matches!(err, StonestatError::MalformedRecord { ref record, .. } if record == "OZ-"));
    }
}
