//! Stone-count frequency distribution.
//!
//! Maps a stone count to the number of boards that had it. Only observed
//! stone counts have entries; [`Distribution::get`] returns 0 for the rest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Frequency of each observed stone count, ordered by stone count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<usize, u64>",
    into = "BTreeMap<usize, u64>"
)]
pub struct Distribution {
    counts: BTreeMap<usize, u64>,
}

impl Distribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more board with `stones` stones.
    pub fn record(&mut self, stones: usize) {
        *self.counts.entry(stones).or_insert(0) += 1;
    }

    /// Number of boards with `stones` stones (0 when never observed).
    pub fn get(&self, stones: usize) -> u64 {
        self.counts.get(&stones).copied().unwrap_or(0)
    }

    /// True when no board has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct stone counts observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Observed stone counts, ascending.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.keys().copied()
    }

    /// `(stones, boards)` pairs, ascending by stone count.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(&stones, &boards)| (stones, boards))
    }

    /// Total boards recorded (sum of all frequencies).
    pub fn board_count(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Total stones across all recorded boards.
    pub fn stone_total(&self) -> u64 {
        self.iter().map(|(stones, boards)| stones as u64 * boards).sum()
    }

    /// Mean stone count, or `None` when nothing was recorded.
    pub fn average(&self) -> Option<f64> {
        match self.board_count() {
            0 => None,
            boards => Some(self.stone_total() as f64 / boards as f64),
        }
    }
}

impl FromIterator<(usize, u64)> for Distribution {
    /// Build from `(stones, boards)` pairs. Repeated stone counts accumulate;
    /// zero frequencies are dropped.
    fn from_iter<I: IntoIterator<Item = (usize, u64)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (stones, boards) in iter {
            if boards > 0 {
                *counts.entry(stones).or_insert(0) += boards;
            }
        }
        Self { counts }
    }
}

impl From<BTreeMap<usize, u64>> for Distribution {
    fn from(counts: BTreeMap<usize, u64>) -> Self {
        counts.into_iter().collect()
    }
}

impl From<Distribution> for BTreeMap<usize, u64> {
    fn from(distribution: Distribution) -> Self {
        distribution.counts
    }
}
