//! Question generation engine.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `lexicon`     | Fixed subjects, action verbs, stative verbs, time points, quantity items |
//! | `conjugation` | Agreement-correct verb phrases for one subject/verb pair |
//! | `selector`    | Level → tier → pattern registry |
//! | `patterns`    | One sentence generator per pattern |
//! | `options`     | Curated distractor families, shuffle, answer lookup + repair |
//! | `helpers`     | Shared picking helper |
//! | `generator`   | `generate_question`, `generate_batch`, `generate_drill` |
//! | `models`      | `Question`, `AspectMode`, `Pattern`, `Tier`, `DrillRequest` |

pub mod conjugation;
pub mod generator;
pub mod helpers;
pub mod lexicon;
pub mod models;
pub mod options;
pub mod patterns;
pub mod selector;

pub use generator::{generate_batch, generate_drill, generate_question};
pub use models::{AspectMode, DrillRequest, Pattern, Question, Tier, OPTION_COUNT};
pub use selector::{select_template, TemplateChoice};
