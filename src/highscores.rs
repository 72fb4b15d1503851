//! High score leaderboard
//!
//! Session-scoped: entries live for the process and are never persisted.
//! Tracks the top 10 runs.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Pipes passed
    pub score: u32,
    /// Run length in simulation ticks
    pub ticks: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a run to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u32, ticks: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, ticks };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        if rank == 1 {
            log::info!("New session best: {}", score);
        }

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_insert_keeps_descending_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(3, 100), Some(1));
        assert_eq!(scores.add_score(7, 200), Some(1));
        assert_eq!(scores.add_score(5, 150), Some(2));

        let ranked: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ranked, vec![7, 5, 3]);
        assert_eq!(scores.top_score(), Some(7));
    }

    #[test]
    fn test_leaderboard_trims_to_capacity() {
        let mut scores = HighScores::new();
        for s in 1..=15u32 {
            scores.add_score(s, s as u64);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // Lowest kept entry is 6 (15..=6 descending)
        assert_eq!(scores.entries.last().unwrap().score, 6);
        assert!(!scores.qualifies(5));
        assert!(scores.qualifies(16));
    }

    #[test]
    fn test_top_score_monotone() {
        let mut scores = HighScores::new();
        let mut best = 0;
        for s in [3u32, 1, 4, 1, 5, 9, 2, 6] {
            scores.add_score(s, 0);
            let top = scores.top_score().unwrap_or(0);
            assert!(top >= best);
            best = top;
        }
    }
}
