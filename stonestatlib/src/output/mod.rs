//! Output formatting: merge datasets into a report.
//!
//! This module handles the final stage of the pipeline - lining up several
//! independently summarized datasets in one table. It provides:
//!
//! - **DistributionReport**: Headers, one row per stone count, per-dataset totals
//! - **Markdown rendering**: `DistributionReport::to_markdown`
//!
//! The report only reads the datasets it is given; it never touches the
//! summarizing machinery, so datasets from any source can be combined.
//!
//! ## Example
//!
//! ```rust,ignore
//! use stonestatlib::output::DistributionReport;
//!
//! let report = DistributionReport::build(&datasets, "# Stone Count Distribution");
//! // report.headers: ["Stones", "a.txt", "b.txt"]
//! // report.rows: [ReportRow { stones: 1, counts: [2, 0] }, ...]
//! // report.totals: [DatasetTotal { name: "a.txt", boards: 3 }, ...]
//! ```

pub mod report;

pub use report::{
    DatasetTotal, DistributionReport, ReportOptions, ReportRow, DEFAULT_TITLE, STONES_HEADER,
};
