//! High score leaderboard
//!
//! The engine only hands finished scores to a `ScoreService`; ranking and
//! storage belong to the service. Two local services are provided: an
//! in-memory top-10 table and a JSON-file-backed store built on it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScoreServiceError;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub player_name: String,
    pub score: u32,
}

/// A backend that accepts finished scores and lists the leaderboard
///
/// Calls are synchronous and the caller holds the game for their duration.
/// That is fine for the local stores here. A remote backend should queue
/// the submission (or run it on the host's executor) and return promptly,
/// reporting the eventual result through the host rather than blocking the
/// frame loop.
pub trait ScoreService {
    /// Record a score for `name`
    fn submit_score(&mut self, name: &str, score: u32) -> Result<(), ScoreServiceError>;

    /// Current leaderboard, in the service's own ranking order
    fn list_high_scores(&self) -> Result<Vec<HighScoreEntry>, ScoreServiceError>;
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
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
    ///
    /// Any score qualifies while the table has room, zero included.
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
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

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, player_name: &str, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            player_name: player_name.to_string(),
            score,
        };

        // Ties rank below existing entries
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

        self.entries.truncate(MAX_HIGH_SCORES);

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

impl ScoreService for HighScores {
    fn submit_score(&mut self, name: &str, score: u32) -> Result<(), ScoreServiceError> {
        match self.add_score(name, score) {
            Some(rank) => log::info!("{name} placed #{rank} with {score}"),
            None => log::info!("{name}'s score {score} did not make the leaderboard"),
        }
        Ok(())
    }

    fn list_high_scores(&self) -> Result<Vec<HighScoreEntry>, ScoreServiceError> {
        Ok(self.entries.clone())
    }
}

/// Leaderboard persisted as JSON on disk
///
/// The file is rewritten after every accepted submission. If the write
/// fails the in-memory table is left as it was before the submission.
#[derive(Debug)]
pub struct FileScoreStore {
    path: PathBuf,
    scores: HighScores,
}

impl FileScoreStore {
    /// Open the store, starting empty when the file does not exist yet
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScoreServiceError> {
        let path = path.as_ref().to_path_buf();
        let scores = match fs::read_to_string(&path) {
            Ok(json) => {
                let scores: HighScores = serde_json::from_str(&json)?;
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                HighScores::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, scores })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    fn save(&self, scores: &HighScores) -> Result<(), ScoreServiceError> {
        let json = serde_json::to_string_pretty(scores)?;
        fs::write(&self.path, json)?;
        log::info!("High scores saved ({} entries)", scores.entries.len());
        Ok(())
    }
}

impl ScoreService for FileScoreStore {
    fn submit_score(&mut self, name: &str, score: u32) -> Result<(), ScoreServiceError> {
        let mut updated = self.scores.clone();
        updated.submit_score(name, score)?;
        self.save(&updated)?;
        self.scores = updated;
        Ok(())
    }

    fn list_high_scores(&self) -> Result<Vec<HighScoreEntry>, ScoreServiceError> {
        self.scores.list_high_scores()
    }
}
