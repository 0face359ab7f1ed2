//! Source discovery: find and stream the records to analyze.
//!
//! This module handles the first stage of the pipeline - turning inputs into
//! a stream of board records. It provides:
//!
//! - **Record streaming**: Lazy iteration over trimmed, non-blank lines
//! - **Input resolution**: Check that every input file exists before any work starts
//!
//! ## Example
//!
//! ```rust
//! use stonestatlib::source::records;
//!
//! let boards: Vec<String> = records("OX-\n\n  XXX \n".as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(boards, vec!["OX-", "XXX"]);
//! ```

pub mod inputs;
pub mod records;

pub use inputs::{dataset_name, resolve_inputs, InputSource};
pub use records::{records, Records};
