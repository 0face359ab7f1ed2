//! Input resolution.
//!
//! Every input path is checked before any aggregation begins, and all missing
//! paths are reported together in a single error.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::StonestatError;
use crate::Result;

/// Where a stream of boards comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    Path(PathBuf),
}

impl InputSource {
    /// Build a source from an optional path, falling back to stdin.
    pub fn from_arg(path: Option<impl Into<PathBuf>>) -> Self {
        match path {
            Some(p) => InputSource::Path(p.into()),
            None => InputSource::Stdin,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Check that every path exists.
///
/// Returns the paths unchanged, in the same order, when all of them exist.
/// Otherwise fails with [`StonestatError::MissingInputs`] naming every
/// missing path.
pub fn resolve_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>> {
    let missing: Vec<PathBuf> = paths
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !p.exists())
        .map(Path::to_path_buf)
        .collect();

    if !missing.is_empty() {
        return Err(StonestatError::MissingInputs(missing));
    }

    Ok(paths.iter().map(|p| p.as_ref().to_path_buf()).collect())
}

/// Column name for a dataset read from `path`: its final component.
pub fn dataset_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_keeps_order() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "OX-\n").unwrap();
        fs::write(&b, "XXX\n").unwrap();

        let resolved = resolve_inputs(&[&b, &a]).unwrap();
        assert_eq!(resolved, vec![b, a]);
    }

    #[test]
    fn test_resolve_reports_all_missing() {
        let dir = tempdir().unwrap();
        let present = dir.path().join("present.txt");
        fs::write(&present, "OX-\n").unwrap();
        let gone1 = dir.path().join("gone1.txt");
        let gone2 = dir.path().join("gone2.txt");

        let err = resolve_inputs(&[&gone1, &present, &gone2]).unwrap_err();
        match err {
            StonestatError::MissingInputs(missing) => {
                assert_eq!(missing, vec![gone1, gone2]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dataset_name() {
        assert_eq!(dataset_name(Path::new("/data/run1/boards.txt")), "boards.txt");
        assert_eq!(dataset_name(Path::new("boards.txt")), "boards.txt");
    }

    #[test]
    fn test_input_source_display() {
        assert_eq!(InputSource::from_arg(None::<PathBuf>).to_string(), "<stdin>");
        assert_eq!(
            InputSource::from_arg(Some("x/y.txt")).to_string(),
            "x/y.txt"
        );
    }
}
