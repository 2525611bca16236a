//! Errors for level runs and saved progress.
//!
//! Question generation never fails; these cover the surfaces around it.

use thiserror::Error;

/// Result type for run and progress operations.
pub type DrillResult<T> = Result<T, DrillError>;

#[derive(Debug, Error)]
pub enum DrillError {
    /// Level id not in the catalog.
    #[error("unknown level: {0}")]
    UnknownLevel(u32),

    /// Level is above the unlock pointer.
    #[error("level {level} is locked (highest unlocked: {unlocked_max})")]
    LevelLocked { level: u32, unlocked_max: u32 },

    /// Chosen option outside the option list.
    #[error("option {index} out of range (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    /// The current question already has an answer.
    #[error("question already answered")]
    AlreadyAnswered,

    /// Tried to move on before answering.
    #[error("current question has not been answered")]
    NotAnswered,

    /// Every question of the run has been answered.
    #[error("level run is complete")]
    RunComplete,

    /// A run needs at least one question.
    #[error("level run has no questions")]
    EmptyRun,

    /// Saved progress could not be read or written.
    #[error("progress JSON: {0}")]
    Json(#[from] serde_json::Error),
}
