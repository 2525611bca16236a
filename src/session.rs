//! One playthrough of a level: answer, advance, finish.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::{
    config::{LevelRules, POINTS_PER_CORRECT},
    drill_engine::{generate_batch, Question},
    error::{DrillError, DrillResult},
    levels::level_info,
    progress::UserProgress,
};

/// What the player sees after choosing an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_index: usize,
    pub answer: String,
    pub explanation: String,
}

/// Result of a finished run, fed to [`UserProgress::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOutcome {
    pub level_id: u32,
    pub correct: usize,
    pub total: usize,
    pub score: u32,
    pub stars: u8,
    pub passed: bool,
}

#[derive(Debug, Clone)]
pub struct LevelRun {
    level_id: u32,
    rules: LevelRules,
    questions: Vec<Question>,
    index: usize,
    score: u32,
    correct_count: usize,
    /// The current question has been answered.
    locked: bool,
    complete: bool,
    history: Vec<bool>,
}

impl LevelRun {
    /// Generate a fresh batch for an unlocked catalog level.
    pub fn start<R: RngCore>(
        level_id: u32,
        progress: &UserProgress,
        rules: &LevelRules,
        rng: &mut R,
    ) -> DrillResult<Self> {
        progress.check_playable(level_id)?;
        let questions = generate_batch(level_id, rules.questions_per_level, rng);
        Self::from_questions(level_id, questions, rules.clone())
    }

    /// Run over an existing batch (replays, tests). Scoring follows the
    /// batch length; the pass mark is rescaled from `rules`.
    pub fn from_questions(
        level_id: u32,
        questions: Vec<Question>,
        rules: LevelRules,
    ) -> DrillResult<Self> {
        if level_info(level_id).is_none() {
            return Err(DrillError::UnknownLevel(level_id));
        }
        if questions.is_empty() {
            return Err(DrillError::EmptyRun);
        }
        Ok(LevelRun {
            level_id,
            rules: rules.for_run_length(questions.len()),
            questions,
            index: 0,
            score: 0,
            correct_count: 0,
            locked: false,
            complete: false,
            history: Vec::new(),
        })
    }

    pub fn level_id(&self) -> u32 {
        self.level_id
    }

    /// Zero-based position of the current question.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// One entry per answered question, `true` when correct.
    pub fn history(&self) -> &[bool] {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn current(&self) -> Option<&Question> {
        if self.complete { None } else { self.questions.get(self.index) }
    }

    pub fn answer(&mut self, choice: usize) -> DrillResult<AnswerFeedback> {
        if self.complete {
            return Err(DrillError::RunComplete);
        }
        if self.locked {
            return Err(DrillError::AlreadyAnswered);
        }
        let q = &self.questions[self.index];
        if choice >= q.options.len() {
            return Err(DrillError::OptionOutOfRange { index: choice, len: q.options.len() });
        }

        let correct = q.is_correct(choice);
        let feedback = AnswerFeedback {
            correct,
            correct_index: q.correct_index,
            answer: q.answer.clone(),
            explanation: q.explanation.clone(),
        };
        if correct {
            self.score += POINTS_PER_CORRECT;
            self.correct_count += 1;
        }
        self.locked = true;
        self.history.push(correct);
        Ok(feedback)
    }

    /// Move to the next question. `Ok(false)` once the last question is
    /// behind; the run is then complete.
    pub fn advance(&mut self) -> DrillResult<bool> {
        if self.complete {
            return Err(DrillError::RunComplete);
        }
        if !self.locked {
            return Err(DrillError::NotAnswered);
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.locked = false;
            Ok(true)
        } else {
            self.complete = true;
            Ok(false)
        }
    }

    /// Score the run. Unanswered questions count as wrong.
    pub fn finish(&self) -> LevelOutcome {
        LevelOutcome {
            level_id: self.level_id,
            correct: self.correct_count,
            total: self.questions.len(),
            score: self.score,
            stars: self.rules.stars(self.correct_count),
            passed: self.rules.passed(self.correct_count),
        }
    }
}
