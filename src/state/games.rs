//! Best-score slots for the memory and quiz games.
//!
//! Game logic lives with the host; these types only decide whether a finished
//! round beats the stored record and persist it when it does.

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use serde::{Deserialize, Serialize};

use crate::store::{Persisted, Store, keys};

/// Memory game difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Chill,
    Normal,
    Hard,
}

/// A finished memory round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub moves: u32,
    pub seconds: u32,
}

impl Score {
    /// Fewer moves wins; seconds break ties.
    #[must_use]
    pub fn beats(self, other: Self) -> bool {
        self.moves < other.moves || (self.moves == other.moves && self.seconds < other.seconds)
    }
}

/// Best memory score per difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecords {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chill: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard: Option<Score>,
}

impl MemoryRecords {
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> Option<Score> {
        match difficulty {
            Difficulty::Chill => self.chill,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut Option<Score> {
        match difficulty {
            Difficulty::Chill => &mut self.chill,
            Difficulty::Normal => &mut self.normal,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// Persisted memory game records.
#[derive(Clone, Debug)]
pub struct MemoryBest {
    records: Persisted<MemoryRecords>,
}

impl MemoryBest {
    #[must_use]
    pub fn open(store: &Store) -> Self {
        Self { records: store.open(keys::MEMORY_BEST, MemoryRecords::default()) }
    }

    #[must_use]
    pub fn best(&self, difficulty: Difficulty) -> Option<Score> {
        self.records.with(|r| r.get(difficulty))
    }

    /// Store `score` if it beats the current record. Returns whether it did.
    /// Nothing is written when the record stands.
    pub fn record(&self, difficulty: Difficulty, score: Score) -> bool {
        let better = self.best(difficulty).is_none_or(|current| score.beats(current));
        if better {
            self.records.modify(|r| *r.slot_mut(difficulty) = Some(score));
        }
        better
    }
}

/// Best quiz result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    /// When the result was achieved (RFC 3339).
    pub at: String,
}

impl QuizResult {
    /// Higher correct ratio wins; raw score breaks ties.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        let (a_num, a_den) = self.ratio();
        let (b_num, b_den) = other.ratio();
        let lhs = a_num * b_den;
        let rhs = b_num * a_den;
        lhs > rhs || (lhs == rhs && self.score > other.score)
    }

    /// `score / total` as a fraction; an empty quiz counts as zero.
    fn ratio(&self) -> (u64, u64) {
        if self.total == 0 { (0, 1) } else { (u64::from(self.score), u64::from(self.total)) }
    }
}

/// Persisted quiz record, `null` until the first finished quiz.
#[derive(Clone, Debug)]
pub struct QuizBest {
    best: Persisted<Option<QuizResult>>,
}

impl QuizBest {
    #[must_use]
    pub fn open(store: &Store) -> Self {
        Self { best: store.open(keys::QUIZ_BEST, None) }
    }

    #[must_use]
    pub fn best(&self) -> Option<QuizResult> {
        self.best.get()
    }

    /// Store `result` if it beats the current record. Returns whether it did.
    pub fn record(&self, result: QuizResult) -> bool {
        let better = self.best.with(|best| best.as_ref().is_none_or(|current| result.beats(current)));
        if better {
            self.best.set(Some(result));
        }
        better
    }
}
