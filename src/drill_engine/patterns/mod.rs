//! Sentence generators, one pure function per [`Pattern`].
//!
//! Every generator has the same shape:
//!
//! ```ignore
//! pub fn <pattern>(subject: &Subject, rng: &mut dyn RngCore) -> Draft
//! ```
//!
//! It draws its own verb entry from the lexicon, fills the prompt, and
//! returns the canonical answer with its curated distractors. Shuffling and
//! ids happen later in `generator.rs`.
//!
//! [`Pattern`]: crate::drill_engine::models::Pattern

use rand::RngCore;

use crate::drill_engine::{lexicon::Subject, options::Distractors};

/// evidence → continuous, result → simple
pub mod aspect;
/// how many → simple
pub mod quantity;
/// stative verb + duration → simple
pub mod stative;
/// since + time → continuous, just → simple
pub mod time_marker;

/// Placeholder the learner fills in.
pub const BLANK: &str = "______";

pub type PatternFn = fn(&Subject, &mut dyn RngCore) -> Draft;

/// A question before its options are shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub answer: String,
    pub distractors: Distractors,
    pub explanation: String,
}
