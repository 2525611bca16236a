//! Result vs. activity, the introductory contrast.
//!
//! Both generators use the same verb entry: its evidence sentence licenses
//! the continuous form, its result sentence licenses the simple form.

use rand::RngCore;

use crate::drill_engine::{
    conjugation::Conjugation,
    helpers::pick,
    lexicon::{Subject, ACTION_VERBS},
    options::{continuous_family, simple_family},
    patterns::{Draft, BLANK},
};

pub fn evidence_continuous(subject: &Subject, rng: &mut dyn RngCore) -> Draft {
    let verb = pick(rng, &ACTION_VERBS);
    let c = Conjugation::action(subject, verb);
    let evidence = subject.render(verb.evidence);
    let name = subject.name;
    let looks = subject.present("looks", "look");

    Draft {
        text: format!("{name} {looks} tired. {name} {BLANK} ({}) for a while. {evidence}", verb.base),
        answer: c.continuous_perfect(),
        distractors: continuous_family(&c),
        explanation: format!(
            "Present perfect continuous focuses on the activity or its evidence. \
             \"{evidence}\" is a trace of the {}, not a finished result.",
            verb.gerund
        ),
    }
}

pub fn result_simple(subject: &Subject, rng: &mut dyn RngCore) -> Draft {
    let verb = pick(rng, &ACTION_VERBS);
    let c = Conjugation::action(subject, verb);
    let result = subject.render(verb.result);

    Draft {
        text: format!("Look! {} {BLANK} ({}) it. {result}", subject.name, verb.base),
        answer: c.simple_perfect(),
        distractors: simple_family(&c),
        explanation: format!(
            "Present perfect simple focuses on the finished result. \
             \"{result}\" is what the completed action left behind."
        ),
    }
}
