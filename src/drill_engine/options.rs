//! Curated distractor families and option-set assembly.
//!
//! Each family is a fixed set of three near-miss forms: real grammatical
//! forms placed where they would be wrong. They are never derived from a
//! general heuristic; the specific contrasts are the teaching content.
//!
//! [`build_options`] shuffles answer + distractors, then locates the answer.
//! If the answer is not found verbatim, [`locate_or_repair`] forces it into
//! slot 0 so `options[correct_index] == answer` always holds.

use log::warn;
use rand::{Rng, RngCore};

use crate::drill_engine::{conjugation::Conjugation, models::OPTION_COUNT};

pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

pub type Distractors = [String; DISTRACTOR_COUNT];

/// Answer is continuous-perfect: offer simple-perfect, past-perfect and
/// present-progressive.
pub fn continuous_family(c: &Conjugation<'_>) -> Distractors {
    [c.simple_perfect(), c.past_perfect(), c.present_progressive()]
}

/// Answer is simple-perfect: offer continuous-perfect, present-progressive
/// and past-progressive.
pub fn simple_family(c: &Conjugation<'_>) -> Distractors {
    [c.continuous_perfect(), c.present_progressive(), c.past_progressive()]
}

/// Stative answer: the same three forms as [`simple_family`], built from the
/// invented "-ing" form of the stative verb.
pub fn stative_family(c: &Conjugation<'_>) -> Distractors {
    simple_family(c)
}

/// Quantity answer: a duration, a time point and "lately".
pub fn quantity_family(n: u32) -> Distractors {
    [format!("for {n} hours"), format!("since {n} o'clock"), "lately".to_string()]
}

/// Shuffle `answer` and its distractors into one option set and report
/// where the answer landed.
pub fn build_options<R: RngCore + ?Sized>(
    answer: &str,
    distractors: Distractors,
    rng: &mut R,
) -> ([String; OPTION_COUNT], usize) {
    let [a, b, c] = distractors;
    let mut options = [answer.to_string(), a, b, c];

    // Fisher-Yates shuffle
    for i in (1..options.len()).rev() {
        let j = rng.gen_range(0..=i);
        options.swap(i, j);
    }

    locate_or_repair(options, answer)
}

/// Find `answer` in `options`; if it is missing, overwrite slot 0 with it.
pub fn locate_or_repair(
    mut options: [String; OPTION_COUNT],
    answer: &str,
) -> ([String; OPTION_COUNT], usize) {
    match options.iter().position(|o| o == answer) {
        Some(idx) => (options, idx),
        None => {
            warn!("answer {answer:?} missing from options {options:?}; forcing slot 0");
            options[0] = answer.to_string();
            (options, 0)
        }
    }
}
