//! Scoring rules for one level run.

use serde::{Deserialize, Serialize};

/// Questions in a full level run.
pub const QUESTIONS_PER_LEVEL: usize = 15;
/// Correct answers needed to pass a full level run.
pub const PASS_THRESHOLD: usize = 12;
/// Points per correct answer.
pub const POINTS_PER_CORRECT: u32 = 100;

/// Correct answers (out of [`QUESTIONS_PER_LEVEL`]) for 1, 2 and 3 stars.
const STAR_CUTOFFS: [usize; 3] = [10, 12, 14];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRules {
    pub questions_per_level: usize,
    pub pass_threshold: usize,
}

impl Default for LevelRules {
    fn default() -> Self {
        Self {
            questions_per_level: QUESTIONS_PER_LEVEL,
            pass_threshold: PASS_THRESHOLD,
        }
    }
}

impl LevelRules {
    /// Set the run length (at least one question).
    pub fn with_questions_per_level(mut self, count: usize) -> Self {
        self.questions_per_level = count.max(1);
        self
    }

    /// Set the pass mark (clamped to the run length).
    pub fn with_pass_threshold(mut self, threshold: usize) -> Self {
        self.pass_threshold = threshold.min(self.questions_per_level);
        self
    }

    /// Rules for a run of `len` questions: the pass mark keeps its share of
    /// the run, rounding up.
    pub fn for_run_length(&self, len: usize) -> Self {
        let len = len.max(1);
        let per_level = self.questions_per_level.max(1);
        Self {
            questions_per_level: len,
            pass_threshold: (self.pass_threshold * len).div_ceil(per_level).min(len),
        }
    }

    pub fn passed(&self, correct: usize) -> bool {
        correct >= self.pass_threshold
    }

    /// 0-3 stars. Cut-offs scale with the run length, rounding up.
    pub fn stars(&self, correct: usize) -> u8 {
        let scaled = STAR_CUTOFFS.map(|c| {
            (c * self.questions_per_level).div_ceil(QUESTIONS_PER_LEVEL)
        });
        scaled.iter().filter(|&&cut| correct >= cut).count() as u8
    }
}
