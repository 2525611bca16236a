use rand::RngCore;

use crate::drill_engine::{
    conjugation::Conjugation,
    helpers::pick,
    lexicon::{Subject, FIRST_PERSON, STATIVE_VERBS},
    options::stative_family,
    patterns::{Draft, BLANK},
};

/// "I ______ (know) her for years." The drawn subject is the object of the
/// sentence; the speaker is always first person.
pub fn stative_duration(subject: &Subject, rng: &mut dyn RngCore) -> Draft {
    let verb = pick(rng, &STATIVE_VERBS);
    let gerund = verb.invented_gerund();
    let c = Conjugation::stative(&FIRST_PERSON, verb, &gerund);

    Draft {
        text: format!("{} {BLANK} ({}) {} for years.", FIRST_PERSON.name, verb.base, subject.object),
        answer: c.simple_perfect(),
        distractors: stative_family(&c),
        explanation: format!(
            "Stative verbs such as \"{}\" describe a state, not an activity, so they rarely \
             take continuous forms. Even with a duration, \"{}\" is the natural choice.",
            verb.base,
            c.simple_perfect()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::lexicon::SUBJECTS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn answer_is_first_person_simple_perfect() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..30 {
            let d = stative_duration(&SUBJECTS[1], &mut rng);
            let pp = d.answer.strip_prefix("have ").expect("answer starts with have");
            assert!(STATIVE_VERBS.iter().any(|v| v.past_participle == pp), "{}", d.answer);
            assert!(d.text.starts_with("I ______ ("));
            assert!(d.text.contains(" him for years."));
        }
    }

    #[test]
    fn distractors_are_invented_progressives() {
        let mut rng = StdRng::seed_from_u64(4);
        let d = stative_duration(&SUBJECTS[0], &mut rng);
        assert!(d.distractors[0].starts_with("have been "));
        assert!(d.distractors[1].starts_with("am "));
        assert!(d.distractors[2].starts_with("was "));
        assert!(d.distractors.iter().all(|o| o.ends_with("ing")));
    }
}
