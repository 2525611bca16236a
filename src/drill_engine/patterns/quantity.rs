use rand::{Rng, RngCore};

use crate::drill_engine::{
    helpers::pick,
    lexicon::{Subject, QUANTITY_ITEMS, QUANTITY_RANGE},
    options::quantity_family,
    patterns::{Draft, BLANK},
};

/// "How many" questions. The context clue states the count; the blank asks
/// for it, so the answer is a bare numeral.
pub fn quantity_count(subject: &Subject, rng: &mut dyn RngCore) -> Draft {
    let n: u32 = rng.gen_range(QUANTITY_RANGE);
    let item = pick(rng, &QUANTITY_ITEMS);
    let clue = item.clue.replace("{n}", &n.to_string());

    Draft {
        text: format!(
            "{clue} {} {} {} {BLANK} {} {}.",
            subject.name, subject.have, item.past_participle, item.noun, item.timeframe
        ),
        answer: n.to_string(),
        distractors: quantity_family(n),
        explanation: format!(
            "When you say how many (a quantity), use the simple form: \"{} {} {n} {}\". \
             \"For {n} hours\" and \"since {n} o'clock\" answer how long, which points \
             to the continuous form.",
            subject.have, item.past_participle, item.noun
        ),
    }
}
