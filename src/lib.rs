//! # aspect_drill_gen
//!
//! An offline, seedable generator of multiple-choice drills for the contrast
//! between the present perfect simple ("has painted") and the present perfect
//! continuous ("has been painting").
//!
//! Every question is synthesized from a small fixed lexicon: a subject with
//! its agreement forms, a verb, and a sentence pattern chosen by level. Wrong
//! options are curated near-misses (real forms used in the wrong context),
//! shuffled together with the answer.
//!
//! ## How it works
//!
//! 1. The level id selects a tier and, within it, a sentence pattern
//!    (levels 0–1 evidence vs. result, 2 stative verbs, 3 quantities,
//!    everything above: "since" vs. "just").
//! 2. The pattern generator fills its template with agreement-correct forms
//!    and returns the answer, three distractors and an explanation.
//! 3. The options are shuffled and the answer located. If it were ever
//!    missing, slot 0 is overwritten with it, so
//!    `options[correct_index] == answer` always holds.
//!
//! Around the engine sit the pieces a quiz front end needs: a level catalog,
//! a [`LevelRun`] that scores one playthrough, and [`UserProgress`] with the
//! unlock pointer and per-level bests (JSON via `serde_json`).
//!
//! ## Quick start
//!
//! ```rust
//! use aspect_drill_gen::{generate_drill, DrillRequest};
//!
//! // A full level (15 questions), reproducible with a seed:
//! let batch = generate_drill(DrillRequest::new(0).with_seed(42));
//! assert_eq!(batch.len(), 15);
//!
//! for q in &batch {
//!     println!("{} [{}]", q.text, q.mode);
//!     for (i, opt) in q.options.iter().enumerate() {
//!         let mark = if i == q.correct_index { "+" } else { " " };
//!         println!("  [{mark}] {opt}");
//!     }
//! }
//! ```
//!
//! Bring your own RNG with [`generate_batch`]:
//!
//! ```rust
//! use aspect_drill_gen::{generate_batch, AspectMode};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let stative = generate_batch(2, 5, &mut rng);
//! assert!(stative.iter().all(|q| q.mode == AspectMode::Simple));
//! ```

pub mod client_adapter;
pub mod config;
pub mod drill_engine;
pub mod error;
pub mod levels;
pub mod progress;
pub mod session;

// Convenience re-exports so callers can use `aspect_drill_gen::generate_batch`
// directly without reaching into `drill_engine::`.
pub use client_adapter::to_client_question;
pub use config::{LevelRules, PASS_THRESHOLD, QUESTIONS_PER_LEVEL};
pub use drill_engine::{
    generate_batch, generate_drill, generate_question, AspectMode, DrillRequest, Pattern,
    Question, Tier, OPTION_COUNT,
};
pub use error::{DrillError, DrillResult};
pub use levels::{level_info, LevelInfo, INTRO_SLIDES, LEVELS, LEVEL_COUNT};
pub use progress::{LevelBest, UserProgress};
pub use session::{AnswerFeedback, LevelOutcome, LevelRun};

#[cfg(test)]
mod tests;
