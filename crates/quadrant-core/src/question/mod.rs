//! Questionnaire reference data.
//!
//! Questions are static: loaded once from the built-in catalog and never
//! mutated. A survey flow works on a [`QuestionSet`], which is either the full
//! catalog or a prefix of it.

mod catalog;
mod model;

pub use catalog::{AVATAR_EMOJIS, EMOJI_SUGGESTIONS, QUESTIONS};
pub use model::{Axis, Question, QuestionSet};
