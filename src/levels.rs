//! Level catalog and the intro lesson shown before the first level.
//!
//! Static content only. Example sentences carry fixed Russian and Uzbek
//! translations next to the English.

use serde::Serialize;

use crate::drill_engine::{models::Tier, AspectMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

impl LevelInfo {
    /// Tier the engine uses for this level.
    pub fn tier(&self) -> Tier {
        Tier::for_level(self.id)
    }
}

pub const LEVEL_COUNT: u32 = 10;

/// Highest level id in the catalog.
pub const LAST_LEVEL: u32 = LEVEL_COUNT - 1;

pub static LEVELS: [LevelInfo; LEVEL_COUNT as usize] = [
    LevelInfo { id: 0, name: "INIT",       description: "System Basics" },
    LevelInfo { id: 1, name: "RES vs ACT", description: "Result vs Activity" },
    LevelInfo { id: 2, name: "STATIVE",    description: "Stative Verbs" },
    LevelInfo { id: 3, name: "QUANTITY",   description: "How many / How long" },
    LevelInfo { id: 4, name: "LIFE EXP",   description: "Ever / Never / Before" },
    LevelInfo { id: 5, name: "EVIDENCE",   description: "Visible Evidence" },
    LevelInfo { id: 6, name: "TIME",       description: "Since / For / Just" },
    LevelInfo { id: 7, name: "NEWS",       description: "Recent Events" },
    LevelInfo { id: 8, name: "ADVANCED",   description: "Complex Contexts" },
    LevelInfo { id: 9, name: "BOSS",       description: "Final Mix" },
];

pub fn level_info(id: u32) -> Option<&'static LevelInfo> {
    LEVELS.get(id as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideExample {
    pub en: &'static str,
    pub ru: &'static str,
    pub uz: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LessonSlide {
    pub title: &'static str,
    /// Aspect the slide introduces; `None` for the opening slide.
    pub mode: Option<AspectMode>,
    pub content: &'static str,
    pub examples: &'static [SlideExample],
}

pub static INTRO_SLIDES: [LessonSlide; 3] = [
    // The unlock rule below quotes the default `LevelRules`.
    LessonSlide {
        title: "Tap. Learn. Win.",
        mode: None,
        content: "Choose the tense by meaning: result now vs activity/time. \
                  Unlock rule: at least 12/15 and 2 stars to open the next level.",
        examples: &[],
    },
    LessonSlide {
        title: "Perfect Simple",
        mode: Some(AspectMode::Simple),
        content: "Finished action → result now.",
        examples: &[
            SlideExample {
                en: "I have lost my keys. → I can’t get into the house.",
                ru: "Я потерял ключи → я не могу попасть в дом.",
                uz: "Men kalitlarimni yo‘qotdim → uyga kira olmayapman.",
            },
            SlideExample {
                en: "She has finished the report. Now we can submit it.",
                ru: "Она закончила отчёт. Теперь мы можем отправить его.",
                uz: "U hisobotni tugatdi. Endi biz uni topshira olamiz.",
            },
        ],
    },
    LessonSlide {
        title: "Perfect Continuous",
        mode: Some(AspectMode::Continuous),
        content: "Activity/time/evidence → happening recently or still now.",
        examples: &[
            SlideExample {
                en: "I have been running. → I’m sweating.",
                ru: "Я бегал → я весь в поту.",
                uz: "Men yugurib kelmoqdaman → terlab ketdim.",
            },
            SlideExample {
                en: "She has been studying all day, so she looks exhausted.",
                ru: "Она училась весь день, поэтому выглядит уставшей.",
                uz: "U butun kun o‘qib kelmoqda, shuning uchun charchagan ko‘rinadi.",
            },
        ],
    },
];
