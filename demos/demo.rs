//! Walk through every level tier, then play one level end to end.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **Tiers** — one seeded question per tier, with options, the correct
//!    one marked, and the explanation.
//! 2. **A level run** — a simulated learner answers level 0, the run is
//!    scored, and the outcome is folded into saved progress (printed as JSON).

use aspect_drill_gen::{
    generate_drill, to_client_question, DrillRequest, LevelRules, LevelRun, Question,
    UserProgress, LEVELS,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Pretty-print one question.
fn print_question(q: &Question) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  Mode: {}  ID: {}", q.pattern, q.mode, q.question_id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", q.text);
    println!();
    for (i, opt) in q.options.iter().enumerate() {
        let marker = if i == q.correct_index { "✓" } else { " " };
        println!("  [{}] {marker} {opt}", i + 1);
    }
    println!();
    println!("  ℹ {}", q.explanation);
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    // ── Tiers ──────────────────────────────────────────────────────────────
    println!();
    println!("══ One question per tier ══");
    println!();
    for (level, seed) in [(0, 11), (2, 22), (3, 33), (6, 44)] {
        let info = &LEVELS[level as usize];
        println!("  Level {} — {} ({}), tier {}", level + 1, info.name, info.description, info.tier());
        for q in generate_drill(DrillRequest::new(level).with_count(1).with_seed(seed)) {
            print_question(&q);
        }
    }

    // ── A level run ────────────────────────────────────────────────────────
    println!("══ Playing level 1 with a learner who is right ~85% of the time ══");
    println!();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut progress = UserProgress::default();
    let rules = LevelRules::default();
    let mut run = LevelRun::start(0, &progress, &rules, &mut rng)?;

    loop {
        let Some(q) = run.current() else { break };
        let choice = if rng.gen_bool(0.85) {
            q.correct_index
        } else {
            (q.correct_index + 1) % q.options.len()
        };
        let feedback = run.answer(choice)?;
        let mark = if feedback.correct { "✓" } else { "✗" };
        println!("  {mark} Q{:>2}: {}", run.position() + 1, feedback.answer);
        if !run.advance()? {
            break;
        }
    }

    let outcome = run.finish();
    println!();
    println!(
        "  {}/{} correct, {} pts, {} star(s) — {}",
        outcome.correct,
        outcome.total,
        outcome.score,
        outcome.stars,
        if outcome.passed { "PASSED" } else { "not passed" }
    );
    if progress.record(&outcome) {
        println!("  Level {} unlocked.", progress.unlocked_max + 1);
    }
    println!("  Saved progress: {}", progress.to_json()?);

    // ── Client payload ─────────────────────────────────────────────────────
    println!();
    println!("══ Client payload for the next level's first question ══");
    let next = generate_drill(DrillRequest::new(progress.unlocked_max).with_count(1).with_seed(7));
    if let Some(q) = next.first() {
        let payload = to_client_question(q, progress.unlocked_max, 0, rules.questions_per_level);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }
    Ok(())
}
