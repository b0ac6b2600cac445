//! Domain core of the political quadrant survey.
//!
//! Holds the reference data (questions, locale strings, quadrant texts), the
//! scoring engine, the per-respondent survey state machine with its session
//! registry, and the result record model together with the storage traits
//! that adapters implement.

pub mod answer;
pub mod config;
pub mod error;
pub mod locale;
pub mod question;
pub mod record;
pub mod scoring;
pub mod survey;

// Re-export common error type
pub use error::{QuadrantError, Result};
