//! Data collection: validate boards and collect statistics.
//!
//! This module handles the second stage of the pipeline - turning a board
//! stream into statistics. It provides:
//!
//! - **Validation**: Strict `O`/`X`/`-` alphabet check with stone counting
//! - **Distribution**: Boards per stone count, zero for unseen counts
//! - **Summaries**: Single-pass aggregation (`summarize`, `load_datasets`)
//!
//! ## Example
//!
//! ```rust
//! use stonestatlib::data::{summarize, SummaryOptions};
//!
//! let summary = summarize("OX-\nXXX\n".as_bytes(), SummaryOptions::new()).unwrap();
//! assert_eq!(summary.board_count, 2);
//! ```

pub mod board;
pub mod distribution;
pub mod summary;

pub use board::{count_stones, Cell};
pub use distribution::Distribution;
pub use summary::{load_datasets, summarize, summarize_path, Dataset, Summary, SummaryOptions};
