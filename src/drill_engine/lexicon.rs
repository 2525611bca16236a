//! Fixed vocabulary the pattern generators draw from.
//!
//! Everything here is a closed, `static` table of plain records. Sentence
//! templates use placeholders that [`Subject::render`] fills in, so no
//! template ever spells out an agreement form directly:
//!
//! | Placeholder | Replaced with |
//! |-------------|---------------|
//! | `{Subject}` | subject display name |
//! | `{have}`    | has / have |
//! | `{be}`      | is / are / am |
//! | `{obj}`     | object pronoun |
//! | `{poss}`    | possessive pronoun |

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammaticalNumber {
    Singular,
    Plural,
}

/// A sentence subject with its agreement forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub name: &'static str,
    pub number: GrammaticalNumber,
    pub have: &'static str,
    pub be: &'static str,
    pub was: &'static str,
    pub object: &'static str,
    pub possessive: &'static str,
    /// First person takes the bare verb in the present ("I look").
    pub first_person: bool,
}

impl Subject {
    /// Present-tense form of a lexical verb: "looks" vs "look".
    pub fn present<'a>(&self, third_singular: &'a str, base: &'a str) -> &'a str {
        if self.number == GrammaticalNumber::Singular && !self.first_person {
            third_singular
        } else {
            base
        }
    }

    /// Fill a lexicon template with this subject's forms.
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{Subject}", self.name)
            .replace("{have}", self.have)
            .replace("{be}", self.be)
            .replace("{obj}", self.object)
            .replace("{poss}", self.possessive)
    }
}

const fn third_person(
    name: &'static str,
    object: &'static str,
    possessive: &'static str,
) -> Subject {
    Subject {
        name,
        number: GrammaticalNumber::Singular,
        have: "has",
        be: "is",
        was: "was",
        object,
        possessive,
        first_person: false,
    }
}

/// Subjects drawn at random for every question.
pub static SUBJECTS: [Subject; 5] = [
    third_person("She", "her", "her"),
    third_person("He", "him", "his"),
    Subject {
        name: "They",
        number: GrammaticalNumber::Plural,
        have: "have",
        be: "are",
        was: "were",
        object: "them",
        possessive: "their",
        first_person: false,
    },
    third_person("The manager", "him", "his"),
    third_person("My friend", "him", "his"),
];

/// Speaker of the stative prompts ("I ______ (know) her for years.").
pub static FIRST_PERSON: Subject = Subject {
    name: "I",
    number: GrammaticalNumber::Singular,
    have: "have",
    be: "am",
    was: "was",
    object: "me",
    possessive: "my",
    first_person: true,
};

/// A dynamic verb with a result sentence and an evidence sentence.
///
/// `result` describes the present consequence of the finished action;
/// `evidence` describes what you can see right after a stretch of activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionVerb {
    pub base: &'static str,
    pub past_participle: &'static str,
    pub gerund: &'static str,
    pub result: &'static str,
    pub evidence: &'static str,
}

pub static ACTION_VERBS: [ActionVerb; 7] = [
    ActionVerb {
        base: "paint",
        past_participle: "painted",
        gerund: "painting",
        result: "The room looks different now.",
        evidence: "There is paint on {poss} clothes.",
    },
    ActionVerb {
        base: "run",
        past_participle: "run",
        gerund: "running",
        result: "{Subject} {have} the finish-line medal.",
        evidence: "{Subject} {be} out of breath now.",
    },
    ActionVerb {
        base: "cook",
        past_participle: "cooked",
        gerund: "cooking",
        result: "Dinner is ready.",
        evidence: "The kitchen is a bit messy.",
    },
    ActionVerb {
        base: "write",
        past_participle: "written",
        gerund: "writing",
        result: "The email has been sent.",
        evidence: "{Subject} {be} still at the keyboard.",
    },
    ActionVerb {
        base: "fix",
        past_participle: "fixed",
        gerund: "fixing",
        result: "The system works again.",
        evidence: "There is grease on {poss} hands.",
    },
    ActionVerb {
        base: "study",
        past_participle: "studied",
        gerund: "studying",
        result: "The exam notes are complete.",
        evidence: "Open books are piled around {obj}.",
    },
    ActionVerb {
        base: "clean",
        past_participle: "cleaned",
        gerund: "cleaning",
        result: "The floor is spotless.",
        evidence: "There is soap on {poss} sleeves.",
    },
];

/// A verb of state; conventionally has no progressive form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StativeVerb {
    pub base: &'static str,
    pub past_participle: &'static str,
}

impl StativeVerb {
    /// The made-up "-ing" form used in distractors. Drops a silent final `e`.
    pub fn invented_gerund(&self) -> String {
        match self.base.strip_suffix('e') {
            Some(stem) if !stem.ends_with('e') => format!("{stem}ing"),
            _ => format!("{}ing", self.base),
        }
    }
}

pub static STATIVE_VERBS: [StativeVerb; 5] = [
    StativeVerb { base: "know",       past_participle: "known" },
    StativeVerb { base: "believe",    past_participle: "believed" },
    StativeVerb { base: "understand", past_participle: "understood" },
    StativeVerb { base: "love",       past_participle: "loved" },
    StativeVerb { base: "own",        past_participle: "owned" },
];

/// Starting points for "since ..." prompts.
pub static TIME_POINTS: [&str; 4] = ["8 a.m.", "this morning", "lunchtime", "Monday"];

/// Countable output for the "how many" pattern.
///
/// `clue` contains `{n}`, replaced with the quantifier so the numeral is
/// visible in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityItem {
    pub past_participle: &'static str,
    pub noun: &'static str,
    pub timeframe: &'static str,
    pub clue: &'static str,
}

pub static QUANTITY_ITEMS: [QuantityItem; 3] = [
    QuantityItem {
        past_participle: "written",
        noun: "emails",
        timeframe: "today",
        clue: "The outbox shows {n} new messages.",
    },
    QuantityItem {
        past_participle: "cooked",
        noun: "dishes",
        timeframe: "this evening",
        clue: "There are {n} plates on the counter.",
    },
    QuantityItem {
        past_participle: "fixed",
        noun: "bikes",
        timeframe: "this week",
        clue: "The workshop log lists {n} finished repairs.",
    },
];

/// Quantifiers are drawn from this inclusive range.
pub const QUANTITY_RANGE: std::ops::RangeInclusive<u32> = 2..=11;
