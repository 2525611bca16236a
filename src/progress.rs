//! Saved progress: best result per level and the unlock pointer.
//!
//! Levels unlock one at a time. Passing the highest unlocked level opens the
//! next one; replaying an earlier level only updates its best result.

use std::collections::BTreeMap;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{DrillError, DrillResult},
    levels::{level_info, LAST_LEVEL, LEVEL_COUNT},
    session::LevelOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelBest {
    pub best_correct: usize,
    pub best_stars: u8,
    /// Sticky: once passed, stays passed.
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProgress {
    pub unlocked_max: u32,
    pub best_by_level: BTreeMap<u32, LevelBest>,
}

impl UserProgress {
    pub fn is_unlocked(&self, level_id: u32) -> bool {
        level_id <= self.unlocked_max
    }

    /// Ok when `level_id` is in the catalog and unlocked.
    pub fn check_playable(&self, level_id: u32) -> DrillResult<()> {
        if level_info(level_id).is_none() {
            return Err(DrillError::UnknownLevel(level_id));
        }
        if !self.is_unlocked(level_id) {
            return Err(DrillError::LevelLocked { level: level_id, unlocked_max: self.unlocked_max });
        }
        Ok(())
    }

    pub fn best(&self, level_id: u32) -> Option<&LevelBest> {
        self.best_by_level.get(&level_id)
    }

    /// Fold a finished run into the saved bests. Returns `true` when the run
    /// unlocked a new level. Outcomes for levels outside the catalog are
    /// ignored.
    pub fn record(&mut self, outcome: &LevelOutcome) -> bool {
        if level_info(outcome.level_id).is_none() {
            warn!("ignoring outcome for unknown level {}", outcome.level_id);
            return false;
        }
        let best = self.best_by_level.entry(outcome.level_id).or_default();
        best.best_correct = best.best_correct.max(outcome.correct);
        best.best_stars = best.best_stars.max(outcome.stars);
        best.passed |= outcome.passed;

        if outcome.passed && outcome.level_id == self.unlocked_max && self.unlocked_max < LAST_LEVEL {
            self.unlocked_max += 1;
            info!("level {} passed; unlocked level {}", outcome.level_id, self.unlocked_max);
            return true;
        }
        if outcome.passed {
            info!("level {} passed ({}/{})", outcome.level_id, outcome.correct, outcome.total);
        }
        false
    }

    pub fn passed_count(&self) -> usize {
        self.best_by_level.values().filter(|b| b.passed).count()
    }

    /// Share of catalog levels passed, 0.0..=1.0.
    pub fn completion_ratio(&self) -> f32 {
        self.passed_count() as f32 / LEVEL_COUNT as f32
    }

    pub fn to_json(&self) -> DrillResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> DrillResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
