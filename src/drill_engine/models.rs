use std::fmt;
use serde::{Deserialize, Serialize};

use crate::config::QUESTIONS_PER_LEVEL;

/// Number of answer options on every question.
pub const OPTION_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Grammar tags
// ---------------------------------------------------------------------------

/// Which perfect aspect the correct answer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    /// Present perfect simple: finished action, result now.
    Simple,
    /// Present perfect continuous: activity, duration or visible evidence.
    Continuous,
}

impl fmt::Display for AspectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectMode::Simple     => write!(f, "simple"),
            AspectMode::Continuous => write!(f, "continuous"),
        }
    }
}

/// Sentence pattern a question was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    EvidenceContinuous,
    ResultSimple,
    StativeDuration,
    QuantityCount,
    SinceContinuous,
    JustSimple,
}

impl Pattern {
    /// The aspect every question of this pattern tests.
    pub fn mode(self) -> AspectMode {
        match self {
            Pattern::EvidenceContinuous | Pattern::SinceContinuous => AspectMode::Continuous,
            Pattern::ResultSimple
            | Pattern::StativeDuration
            | Pattern::QuantityCount
            | Pattern::JustSimple => AspectMode::Simple,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Pattern::EvidenceContinuous => "Evidence → Continuous",
            Pattern::ResultSimple       => "Result → Simple",
            Pattern::StativeDuration    => "Stative Duration",
            Pattern::QuantityCount      => "Quantity Count",
            Pattern::SinceContinuous    => "Since + Time → Continuous",
            Pattern::JustSimple         => "Just → Simple",
        };
        write!(f, "{}", s)
    }
}

/// A group of levels sharing the same patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Introductory,
    Stative,
    Quantity,
    Generic,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Introductory => write!(f, "Introductory"),
            Tier::Stative      => write!(f, "Stative"),
            Tier::Quantity     => write!(f, "Quantity"),
            Tier::Generic      => write!(f, "Generic"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRequest {
    pub level_id: u32,
    pub count: usize,
    pub rng_seed: Option<u64>,
}

impl DrillRequest {
    /// A full level's worth of questions with entropy seeding.
    pub fn new(level_id: u32) -> Self {
        DrillRequest { level_id, count: QUESTIONS_PER_LEVEL, rng_seed: None }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// One multiple-choice question, ready to render and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// `"<PREFIX>-<8 hex digits>"`, prefix per pattern (e.g. `"EV-1A2B3C4D"`).
    pub question_id: String,
    pub pattern: Pattern,
    pub mode: AspectMode,
    /// Prompt with a `______` blank.
    pub text: String,
    pub answer: String,
    pub options: [String; OPTION_COUNT],
    /// Always satisfies `options[correct_index] == answer`.
    pub correct_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}
