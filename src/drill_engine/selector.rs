//! Level → tier → pattern selection.
//!
//! The tier table below is the only place that knows which patterns a level
//! can produce. Adding a tier means adding one row here and one arm to
//! [`Tier::for_level`]; pattern generators stay untouched.
//!
//! | Levels | Tier | Patterns | Rule |
//! |--------|------|----------|------|
//! | 0–1 | Introductory | evidence→continuous, result→simple | coin flip |
//! | 2   | Stative      | stative duration | always |
//! | 3   | Quantity     | quantity count   | always |
//! | ≥4  | Generic      | since→continuous, just→simple | coin flip |

use rand::{Rng, RngCore};

use crate::drill_engine::{
    models::{Pattern, Tier},
    patterns::{aspect, quantity, stative, time_marker, PatternFn},
};

/// A pattern together with the function that writes it.
#[derive(Clone, Copy)]
pub struct PatternEntry {
    pub pattern: Pattern,
    pub generate: PatternFn,
}

impl std::fmt::Debug for PatternEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternEntry").field("pattern", &self.pattern).finish()
    }
}

const INTRODUCTORY: &[PatternEntry] = &[
    PatternEntry { pattern: Pattern::EvidenceContinuous, generate: aspect::evidence_continuous },
    PatternEntry { pattern: Pattern::ResultSimple,       generate: aspect::result_simple },
];

const STATIVE: &[PatternEntry] = &[
    PatternEntry { pattern: Pattern::StativeDuration, generate: stative::stative_duration },
];

const QUANTITY: &[PatternEntry] = &[
    PatternEntry { pattern: Pattern::QuantityCount, generate: quantity::quantity_count },
];

const GENERIC: &[PatternEntry] = &[
    PatternEntry { pattern: Pattern::SinceContinuous, generate: time_marker::since_continuous },
    PatternEntry { pattern: Pattern::JustSimple,      generate: time_marker::just_simple },
];

impl Tier {
    /// Total over all level ids: anything not listed falls to `Generic`.
    pub fn for_level(level_id: u32) -> Tier {
        match level_id {
            0 | 1 => Tier::Introductory,
            2     => Tier::Stative,
            3     => Tier::Quantity,
            _     => Tier::Generic,
        }
    }

    pub fn entries(self) -> &'static [PatternEntry] {
        match self {
            Tier::Introductory => INTRODUCTORY,
            Tier::Stative      => STATIVE,
            Tier::Quantity     => QUANTITY,
            Tier::Generic      => GENERIC,
        }
    }

    pub fn patterns(self) -> Vec<Pattern> {
        self.entries().iter().map(|e| e.pattern).collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateChoice {
    pub tier: Tier,
    pub entry: PatternEntry,
}

impl TemplateChoice {
    pub fn pattern(&self) -> Pattern {
        self.entry.pattern
    }
}

/// Pick the pattern for one question. Single-pattern tiers draw nothing
/// from `rng`; two-pattern tiers flip a fair coin.
pub fn select_template<R: RngCore + ?Sized>(level_id: u32, rng: &mut R) -> TemplateChoice {
    let tier = Tier::for_level(level_id);
    let entries = tier.entries();
    let entry = match entries {
        [only] => *only,
        _      => entries[rng.gen_range(0..entries.len())],
    };
    TemplateChoice { tier, entry }
}
