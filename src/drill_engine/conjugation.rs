//! Agreement-correct verb phrases for one subject/verb pair.
//!
//! Every answer and every distractor is one of the five phrases built here,
//! so the auxiliaries always come from the [`Subject`] lookup. An optional
//! adverb ("just") is placed after the first auxiliary of every phrase.

use crate::drill_engine::lexicon::{ActionVerb, StativeVerb, Subject};

#[derive(Debug, Clone, Copy)]
pub struct Conjugation<'a> {
    subject: &'a Subject,
    past_participle: &'a str,
    gerund: &'a str,
    adverb: Option<&'static str>,
}

impl<'a> Conjugation<'a> {
    pub fn new(subject: &'a Subject, past_participle: &'a str, gerund: &'a str) -> Self {
        Conjugation { subject, past_participle, gerund, adverb: None }
    }

    pub fn action(subject: &'a Subject, verb: &'a ActionVerb) -> Self {
        Self::new(subject, verb.past_participle, verb.gerund)
    }

    /// Stative verbs get their invented "-ing" form, which is the point of
    /// the distractors built from them.
    pub fn stative(subject: &'a Subject, verb: &'a StativeVerb, gerund: &'a str) -> Self {
        Self::new(subject, verb.past_participle, gerund)
    }

    pub fn with_adverb(mut self, adverb: &'static str) -> Self {
        self.adverb = Some(adverb);
        self
    }

    fn phrase(&self, aux: &str, rest: &str) -> String {
        match self.adverb {
            Some(adv) => format!("{aux} {adv} {rest}"),
            None => format!("{aux} {rest}"),
        }
    }

    /// has painted
    pub fn simple_perfect(&self) -> String {
        self.phrase(self.subject.have, self.past_participle)
    }

    /// has been painting
    pub fn continuous_perfect(&self) -> String {
        self.phrase(self.subject.have, &format!("been {}", self.gerund))
    }

    /// had painted
    pub fn past_perfect(&self) -> String {
        self.phrase("had", self.past_participle)
    }

    /// is painting
    pub fn present_progressive(&self) -> String {
        self.phrase(self.subject.be, self.gerund)
    }

    /// was painting
    pub fn past_progressive(&self) -> String {
        self.phrase(self.subject.was, self.gerund)
    }
}
