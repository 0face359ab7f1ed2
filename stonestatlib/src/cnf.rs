//! CNF size records.
//!
//! A separate input format produced by SAT runs: one record per line, made of
//! comma-separated `key=value` segments, for example
//!
//! ```text
//! ans=true, vars=120, clauses=480
//! ```
//!
//! Segments without `=` and unknown keys are ignored. `ans`, `vars` and
//! `clauses` are required; decoding is strict and fails on the first bad line.
//! Variable and clause counts are unsigned: a negative count is a malformed
//! line, not a point.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StonestatError;
use crate::source::records::records;
use crate::Result;

/// One decoded CNF size record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnfRecord {
    /// SAT answer
    pub answer: bool,
    /// Number of variables
    pub vars: u64,
    /// Number of clauses
    pub clauses: u64,
}

impl CnfRecord {
    /// Decode one line.
    pub fn parse(line: &str) -> Result<Self> {
        let mut answer = None;
        let mut vars = None;
        let mut clauses = None;

        for segment in line.split(',') {
            let Some((key, value)) = segment.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "ans" => answer = Some(value),
                "vars" => vars = Some(value),
                "clauses" => clauses = Some(value),
                _ => {}
            }
        }

        let malformed = |reason: String| StonestatError::MalformedCnfLine {
            line: line.to_string(),
            reason,
        };

        let answer = match answer.map(str::to_ascii_lowercase).as_deref() {
            Some("true") => true,
            Some("false") => false,
            Some(other) => return Err(malformed(format!("invalid ans value '{other}'"))),
            None => return Err(malformed("missing key 'ans'".to_string())),
        };
        let count = |key: &str, value: Option<&str>| -> Result<u64> {
            let value = value.ok_or_else(|| malformed(format!("missing key '{key}'")))?;
            value
                .parse()
                .map_err(|_| malformed(format!("invalid {key} value '{value}'")))
        };

        Ok(CnfRecord {
            answer,
            vars: count("vars", vars)?,
            clauses: count("clauses", clauses)?,
        })
    }
}

impl FromStr for CnfRecord {
    type Err = StonestatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A `(vars, clauses)` point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnfPoint {
    /// Number of variables
    pub vars: u64,
    /// Number of clauses
    pub clauses: u64,
}

/// Inclusive min/max of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Smallest value seen
    pub min: u64,
    /// Largest value seen
    pub max: u64,
}

impl AxisBounds {
    fn of(values: impl Iterator<Item = u64>) -> Option<Self> {
        values.fold(None, |acc, v| match acc {
            None => Some(AxisBounds { min: v, max: v }),
            Some(b) => Some(AxisBounds {
                min: b.min.min(v),
                max: b.max.max(v),
            }),
        })
    }
}

/// Shared bounds of both answer groups, so plots of each group line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnfBounds {
    /// Bounds of the variable counts
    pub vars: AxisBounds,
    /// Bounds of the clause counts
    pub clauses: AxisBounds,
}

/// CNF points grouped by SAT answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnfPoints {
    /// Points with `ans=true`
    pub satisfiable: Vec<CnfPoint>,
    /// Points with `ans=false`
    pub unsatisfiable: Vec<CnfPoint>,
}

impl CnfPoints {
    /// Create an empty set of points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to its answer group.
    pub fn push(&mut self, record: CnfRecord) {
        let point = CnfPoint {
            vars: record.vars,
            clauses: record.clauses,
        };
        if record.answer {
            self.satisfiable.push(point);
        } else {
            self.unsatisfiable.push(point);
        }
    }

    /// Total number of points.
    pub fn len(&self) -> usize {
        self.satisfiable.len() + self.unsatisfiable.len()
    }

    /// True when there are no points at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn all(&self) -> impl Iterator<Item = &CnfPoint> + '_ {
        self.satisfiable.iter().chain(self.unsatisfiable.iter())
    }

    /// Min/max of vars and clauses over both groups. `None` when empty.
    pub fn bounds(&self) -> Option<CnfBounds> {
        Some(CnfBounds {
            vars: AxisBounds::of(self.all().map(|p| p.vars))?,
            clauses: AxisBounds::of(self.all().map(|p| p.clauses))?,
        })
    }
}

/// Decode every record of a stream. Blank lines are skipped.
pub fn collect_cnf_points<R: BufRead>(reader: R) -> Result<CnfPoints> {
    let mut points = CnfPoints::new();
    for line in records(reader) {
        points.push(CnfRecord::parse(&line?)?);
    }
    Ok(points)
}

/// Decode a CNF counts file. A file with no records is an error.
pub fn load_cnf_points(path: impl AsRef<Path>) -> Result<CnfPoints> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StonestatError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let points = collect_cnf_points(BufReader::new(file))?;
    if points.is_empty() {
        return Err(StonestatError::EmptyInput(path.display().to_string()));
    }
    debug!(
        path = %path.display(),
        satisfiable = points.satisfiable.len(),
        unsatisfiable = points.unsatisfiable.len(),
        "loaded cnf points"
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn reason(err: StonestatError) -> String {
        match err {
            StonestatError::MalformedCnfLine { reason, .. } => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_basic() {
        let record: CnfRecord = "ans=true, vars=120, clauses=480".parse().unwrap();
        assert_eq!(
            record,
            CnfRecord {
                answer: true,
                vars: 120,
                clauses: 480
            }
        );
    }

    #[test]
    fn test_parse_ignores_noise_and_order() {
        let record =
            CnfRecord::parse(" clauses = 9 ,id=3, note , ans = FALSE,vars=4 ").unwrap();
        assert!(!record.answer);
        assert_eq!(record.vars, 4);
        assert_eq!(record.clauses, 9);
    }

    #[test]
    fn test_parse_missing_key() {
        let err = CnfRecord::parse("ans=true, vars=3").unwrap_err();
        assert_eq!(reason(err), "missing key 'clauses'");
    }

    #[test]
    fn test_parse_bad_count() {
        let err = CnfRecord::parse("ans=true, vars=x, clauses=1").unwrap_err();
        assert_eq!(reason(err), "invalid vars value 'x'");
    }

    #[test]
    fn test_parse_rejects_negative_count() {
        let err = CnfRecord::parse("ans=true, vars=-3, clauses=1").unwrap_err();
        assert_eq!(reason(err), "invalid vars value '-3'");

        let record = CnfRecord::parse("ans=true, vars=+3, clauses=1").unwrap();
        assert_eq!(record.vars, 3);
    }

    #[test]
    fn test_parse_bad_answer() {
        let err = CnfRecord::parse("ans=maybe, vars=1, clauses=1").unwrap_err();
        assert_eq!(reason(err), "invalid ans value 'maybe'");
    }

    #[test]
    fn test_error_keeps_line() {
        let err = CnfRecord::parse("vars=1").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse line: vars=1"));
    }

    #[test]
    fn test_collect_groups_and_bounds() {
        let input = "ans=true,vars=10,clauses=40\n\nans=false,vars=3,clauses=90\nans=true,vars=7,clauses=20\n";
        let points = collect_cnf_points(input.as_bytes()).unwrap();
        assert_eq!(points.satisfiable.len(), 2);
        assert_eq!(points.unsatisfiable.len(), 1);

        let bounds = points.bounds().unwrap();
        assert_eq!(bounds.vars, AxisBounds { min: 3, max: 10 });
        assert_eq!(bounds.clauses, AxisBounds { min: 20, max: 90 });
    }

    #[test]
    fn test_empty_points_have_no_bounds() {
        let points = collect_cnf_points("\n\n".as_bytes()).unwrap();
        assert!(points.is_empty());
        assert!(points.bounds().is_none());
    }

    #[test]
    fn test_load_rejects_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cnf_counts.txt");
        fs::write(&path, "\n").unwrap();
        assert!(matches!(
            load_cnf_points(&path),
            Err(StonestatError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cnf_counts.txt");
        fs::write(&path, "ans=false,vars=1,clauses=2\n").unwrap();
        let points = load_cnf_points(&path).unwrap();
        assert_eq!(points.unsatisfiable, vec![CnfPoint { vars: 1, clauses: 2 }]);
    }
}
