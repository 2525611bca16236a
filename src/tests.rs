//! Crate-level tests for `aspect_drill_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical batch; different seeds → varied batches |
//! | Structural | 4 unique options; answer at `correct_index`; non-empty text and explanation |
//! | Per-tier | Pattern and mode per level; both branches of coin-flip tiers reached |
//! | Quantity | Bare numeral answer that appears in the prompt |
//! | Batch | Exact length for any count, including 0 |
//! | Repair | Missing answer forced into slot 0 |
//! | Properties | proptest over seeds, levels and counts |
//! | End to end | Play a level, record progress, unlock the next level |

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::drill_engine::{
    lexicon::{STATIVE_VERBS, SUBJECTS},
    options::locate_or_repair,
};
use crate::{
    generate_batch, generate_drill, AspectMode, DrillRequest, LevelRules, LevelRun, Pattern,
    Question, UserProgress, OPTION_COUNT,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn batch(level: u32, count: usize, seed: u64) -> Vec<Question> {
    generate_drill(DrillRequest::new(level).with_count(count).with_seed(seed))
}

fn assert_well_formed(q: &Question) {
    assert_eq!(q.options.len(), OPTION_COUNT);
    let unique: HashSet<&String> = q.options.iter().collect();
    assert_eq!(unique.len(), OPTION_COUNT, "duplicate options in {:?}", q.options);
    assert_eq!(q.options[q.correct_index], q.answer, "{}", q.question_id);
    assert_eq!(q.options.iter().filter(|o| **o == q.answer).count(), 1);
    assert!(q.text.contains("______"), "no blank in {}", q.text);
    assert!(!q.explanation.is_empty());
    assert_eq!(q.mode, q.pattern.mode());
}

/// Levels covering every tier, plus ids past the catalog.
const LEVELS_UNDER_TEST: [u32; 9] = [0, 1, 2, 3, 4, 6, 9, 10, 500];

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_batch() {
    for level in LEVELS_UNDER_TEST {
        assert_eq!(batch(level, 15, 12345), batch(level, 15, 12345), "level {level}");
    }
}

#[test]
fn different_seeds_produce_varied_batches() {
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = batch(0, 5, seed);
        let b = batch(0, 5, seed + 500);
        if a.iter().map(|q| &q.text).eq(b.iter().map(|q| &q.text)) {
            same += 1;
        }
    }
    assert!(same < pairs as usize / 4, "too many identical batches ({same}/{pairs})");
}

#[test]
fn entropy_seed_produces_a_valid_batch() {
    let qs = generate_drill(DrillRequest::new(1));
    assert_eq!(qs.len(), crate::QUESTIONS_PER_LEVEL);
    qs.iter().for_each(assert_well_formed);
}

// ── structural invariants ────────────────────────────────────────────────────

#[test]
fn every_question_is_well_formed() {
    for level in LEVELS_UNDER_TEST {
        for seed in SEEDS {
            batch(level, 30, seed).iter().for_each(assert_well_formed);
        }
    }
}

#[test]
fn question_ids_carry_pattern_prefix() {
    let prefixes = [
        (Pattern::EvidenceContinuous, "EV-"),
        (Pattern::ResultSimple,       "RS-"),
        (Pattern::StativeDuration,    "ST-"),
        (Pattern::QuantityCount,      "QT-"),
        (Pattern::SinceContinuous,    "SN-"),
        (Pattern::JustSimple,         "JS-"),
    ];
    let all: Vec<Question> = [0, 2, 3, 4].iter().flat_map(|&l| batch(l, 40, 3)).collect();
    for (pattern, prefix) in prefixes {
        let q = all.iter().find(|q| q.pattern == pattern).expect("pattern reached");
        assert!(q.question_id.starts_with(prefix), "{} for {pattern:?}", q.question_id);
        assert_eq!(q.question_id.len(), prefix.len() + 8);
    }
}

#[test]
fn answers_agree_with_subject() {
    // The subject opens every action prompt; its have-form must open the answer.
    for level in [0, 1, 4, 7] {
        for q in batch(level, 60, 77) {
            let subject = SUBJECTS
                .iter()
                .filter(|s| q.text.contains(&format!("{} ______", s.name)))
                .max_by_key(|s| s.name.len())
                .expect("subject before the blank");
            assert!(
                q.answer.starts_with(&format!("{} ", subject.have)),
                "{:?} does not agree with {}",
                q.answer,
                subject.name
            );
        }
    }
}

// ── per-tier behaviour ───────────────────────────────────────────────────────

#[test]
fn coin_flip_tiers_reach_both_modes() {
    for level in [0, 1, 4, 5, 9, 100] {
        let modes: HashSet<AspectMode> = batch(level, 200, 5).iter().map(|q| q.mode).collect();
        assert_eq!(modes.len(), 2, "level {level} only produced {modes:?}");
    }
}

#[test]
fn introductory_and_generic_tiers_use_their_patterns() {
    for q in batch(1, 100, 8) {
        assert!(matches!(q.pattern, Pattern::EvidenceContinuous | Pattern::ResultSimple));
    }
    for q in batch(6, 100, 8) {
        assert!(matches!(q.pattern, Pattern::SinceContinuous | Pattern::JustSimple));
    }
}

#[test]
fn stative_level_is_always_simple_perfect() {
    for q in batch(2, 100, 9) {
        assert_eq!(q.mode, AspectMode::Simple);
        assert_eq!(q.pattern, Pattern::StativeDuration);
        let pp = q.answer.strip_prefix("have ").expect("have + participle");
        assert!(STATIVE_VERBS.iter().any(|v| v.past_participle == pp), "{}", q.answer);
        assert!(!q.answer.contains("been") && !q.answer.ends_with("ing"));
    }
}

#[test]
fn quantity_level_answers_with_the_prompt_numeral() {
    for q in batch(3, 100, 10) {
        assert_eq!(q.mode, AspectMode::Simple);
        assert!(!q.answer.is_empty() && q.answer.chars().all(|c| c.is_ascii_digit()));
        let digits: String = q.text.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits, q.answer, "{}", q.text);
        assert!(q.options.contains(&"lately".to_string()));
    }
}

// ── batch length ─────────────────────────────────────────────────────────────

#[test]
fn batch_has_exact_length() {
    let mut rng = StdRng::seed_from_u64(1);
    for count in [0, 1, 2, 15, 64] {
        assert_eq!(generate_batch(4, count, &mut rng).len(), count);
    }
}

#[test]
fn zero_count_is_empty_not_an_error() {
    assert!(batch(0, 0, 1).is_empty());
}

// ── repair rule ──────────────────────────────────────────────────────────────

#[test]
fn repair_rule_forces_answer_into_slot_zero() {
    // A construction path where interpolation produced the wrong verb.
    let qs = batch(0, 1, 2);
    let q = &qs[0];
    let mut broken = q.options.clone();
    broken[q.correct_index] = format!("{}!", q.answer);
    let (opts, idx) = locate_or_repair(broken, &q.answer);
    assert_eq!(idx, 0);
    assert_eq!(opts[0], q.answer);
}

// ── end to end ───────────────────────────────────────────────────────────────

#[test]
fn scenario_level_zero_fifteen_questions() {
    let qs = generate_drill(DrillRequest::new(0).with_count(15).with_seed(2024));
    assert_eq!(qs.len(), 15);
    for q in &qs {
        assert!(matches!(q.mode, AspectMode::Simple | AspectMode::Continuous));
        assert_eq!(q.options.len(), 4);
        assert!(!q.explanation.is_empty());
    }
}

#[test]
fn scenario_level_two_all_simple() {
    let qs = generate_drill(DrillRequest::new(2).with_count(15).with_seed(2025));
    assert_eq!(qs.len(), 15);
    assert!(qs.iter().all(|q| q.mode == AspectMode::Simple));
}

#[test]
fn scenario_level_three_single_numeral() {
    let qs = generate_drill(DrillRequest::new(3).with_count(1).with_seed(2026));
    assert_eq!(qs.len(), 1);
    let q = &qs[0];
    assert!(q.answer.chars().all(|c| c.is_ascii_digit()) && !q.answer.is_empty());
    assert!(q.text.contains(&q.answer));
}

#[test]
fn passing_level_zero_unlocks_level_one() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut progress = UserProgress::default();
    let rules = LevelRules::default();

    let mut run = LevelRun::start(0, &progress, &rules, &mut rng).unwrap();
    loop {
        let pick = run.current().unwrap().correct_index;
        assert!(run.answer(pick).unwrap().correct);
        if !run.advance().unwrap() {
            break;
        }
    }
    let outcome = run.finish();
    assert!(outcome.passed);
    assert!(progress.record(&outcome));
    assert!(progress.is_unlocked(1));

    let restored = UserProgress::from_json(&progress.to_json().unwrap()).unwrap();
    assert_eq!(restored, progress);
    assert!(LevelRun::start(1, &restored, &rules, &mut rng).is_ok());
}

// ── properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_options_hold_the_answer_exactly_once(seed: u64, level in 0u32..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for q in generate_batch(level, 8, &mut rng) {
            prop_assert_eq!(&q.options[q.correct_index], &q.answer);
            let unique: HashSet<&String> = q.options.iter().collect();
            prop_assert_eq!(unique.len(), OPTION_COUNT);
        }
    }

    #[test]
    fn prop_batch_length_matches_count(seed: u64, level: u32, count in 0usize..40) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(generate_batch(level, count, &mut rng).len(), count);
    }

    #[test]
    fn prop_stative_never_continuous(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for q in generate_batch(2, 10, &mut rng) {
            prop_assert_eq!(q.mode, AspectMode::Simple);
            prop_assert!(q.answer.starts_with("have ") && !q.answer.contains("been"));
        }
    }
}
