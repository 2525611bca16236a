//! Time adverbials that force the aspect.
//!
//! "since + starting point" measures an activity still going on; "just"
//! marks a completed action whose result matters now. "just" sits after
//! the first auxiliary in the answer and in every distractor.

use rand::RngCore;

use crate::drill_engine::{
    conjugation::Conjugation,
    helpers::pick,
    lexicon::{Subject, ACTION_VERBS, TIME_POINTS},
    options::{continuous_family, simple_family},
    patterns::{Draft, BLANK},
};

pub fn since_continuous(subject: &Subject, rng: &mut dyn RngCore) -> Draft {
    let verb = pick(rng, &ACTION_VERBS);
    let since = pick(rng, &TIME_POINTS);
    let c = Conjugation::action(subject, verb);

    Draft {
        text: format!(
            "{} {BLANK} ({}) since {since}. {}",
            subject.name, verb.base, subject.render(verb.evidence)
        ),
        answer: c.continuous_perfect(),
        distractors: continuous_family(&c),
        explanation: format!(
            "\"Since {since}\" measures how long an activity has been going on, \
             so the continuous form fits."
        ),
    }
}

pub fn just_simple(subject: &Subject, rng: &mut dyn RngCore) -> Draft {
    let verb = pick(rng, &ACTION_VERBS);
    let c = Conjugation::action(subject, verb).with_adverb("just");

    Draft {
        text: format!(
            "Good news! {} {BLANK} (just / {}) it. {}",
            subject.name, verb.base, subject.render(verb.result)
        ),
        answer: c.simple_perfect(),
        distractors: simple_family(&c),
        explanation: "\"Just\" marks an action completed a moment ago whose result matters now, \
                      so the simple form fits."
            .to_string(),
    }
}
