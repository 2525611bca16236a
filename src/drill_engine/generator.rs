use log::debug;
use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::drill_engine::{
    helpers::pick,
    lexicon::SUBJECTS,
    models::{DrillRequest, Pattern, Question, Tier},
    options::build_options,
    selector::select_template,
};

/// Generate a question ID from pattern + RNG.
fn make_question_id<R: RngCore + ?Sized>(pattern: Pattern, rng: &mut R) -> String {
    let prefix = match pattern {
        Pattern::EvidenceContinuous => "EV",
        Pattern::ResultSimple       => "RS",
        Pattern::StativeDuration    => "ST",
        Pattern::QuantityCount      => "QT",
        Pattern::SinceContinuous    => "SN",
        Pattern::JustSimple         => "JS",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Build one question for `level_id`: subject, pattern, sentence, options.
pub fn generate_question<R: RngCore>(level_id: u32, rng: &mut R) -> Question {
    let subject = pick(rng, &SUBJECTS);
    let choice = select_template(level_id, rng);
    let pattern = choice.pattern();

    let draft = (choice.entry.generate)(subject, rng);
    let (options, correct_index) = build_options(&draft.answer, draft.distractors, rng);
    let question_id = make_question_id(pattern, rng);

    Question {
        question_id,
        pattern,
        mode: pattern.mode(),
        text: draft.text,
        answer: draft.answer,
        options,
        correct_index,
        explanation: draft.explanation,
    }
}

/// Produce exactly `count` independent questions for `level_id`.
///
/// Any level id is accepted; ids above the enumerated tiers use the generic
/// tier. `count == 0` yields an empty batch.
pub fn generate_batch<R: RngCore>(level_id: u32, count: usize, rng: &mut R) -> Vec<Question> {
    debug!("generating {count} questions for level {level_id} ({} tier)", Tier::for_level(level_id));
    (0..count).map(|_| generate_question(level_id, rng)).collect()
}

/// Seeded entry point: same `rng_seed` → identical batch.
pub fn generate_drill(request: DrillRequest) -> Vec<Question> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_batch(request.level_id, request.count, &mut rng)
}
