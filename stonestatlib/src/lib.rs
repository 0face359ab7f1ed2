//! # stonestatlib
//!
//! Stone-count statistics for Othello board dumps, and cross-dataset
//! distribution reports.
//!
//! ## Overview
//!
//! Board files hold one board per line, written with three characters:
//!
//! - **`O`** and **`X`**: stones
//! - **`-`**: an empty square
//!
//! The library streams such files without loading them into memory, rejects
//! any board that contains another character, and counts how many boards have
//! each number of stones. Several of these distributions can then be merged
//! into one table, one column per file.
//!
//! ## Pipeline
//!
//! 1. **source**: trimmed, non-blank records from a reader; input checks
//! 2. **data**: per-board validation, stone counting, and summaries
//! 3. **output**: the merged `DistributionReport`
//!
//! The `cnf` module decodes the unrelated `ans=…, vars=…, clauses=…` records
//! written by SAT runs.
//!
//! ## Features
//!
//! - **Streaming**: one board in memory at a time
//! - **Fail-fast**: the first malformed board aborts the whole input
//! - **Pure data**: returns structured, serializable results, no printing
//!
//! ## Example
//!
//! ```rust
//! use stonestatlib::{load_datasets, summarize, DistributionReport, SummaryOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Summarize a single stream
//! let summary = summarize("OX-\nO--\nXXX\n".as_bytes(), SummaryOptions::new()).unwrap();
//! assert_eq!(summary.board_count, 3);
//! assert_eq!(summary.average(), Some(2.0));
//!
//! // Compare two files
//! let dir = tempdir().unwrap();
//! let a = dir.path().join("a.txt");
//! let b = dir.path().join("b.txt");
//! fs::write(&a, "O--\nO--\nOX-\n").unwrap();
//! fs::write(&b, "OX--\nXO--\nOX--\nOXOX\n").unwrap();
//!
//! let datasets = load_datasets(&[&a, &b]).unwrap();
//! let report = DistributionReport::build(&datasets, "# Stone Count Distribution");
//! assert_eq!(report.stone_counts(), vec![1, 2, 4]);
//! assert!(report.to_markdown().contains("| 2 | 1 | 3 |"));
//! ```

pub mod cnf;
pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use cnf::{
    collect_cnf_points, load_cnf_points, AxisBounds, CnfBounds, CnfPoint, CnfPoints, CnfRecord,
};
pub use data::{
    count_stones, load_datasets, summarize, summarize_path, Cell, Dataset, Distribution, Summary,
    SummaryOptions,
};
pub use error::StonestatError;
pub use output::{DatasetTotal, DistributionReport, ReportOptions, ReportRow, DEFAULT_TITLE};
pub use source::{records, resolve_inputs, InputSource};

/// Result type for stonestatlib operations
pub type Result<T> = std::result::Result<T, StonestatError>;
