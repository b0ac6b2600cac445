//! Application layer for the political quadrant survey.
//!
//! This crate provides the use cases that coordinate the domain core with
//! the storage and remote adapters: persisting results with local fallback
//! and running the survey as a chat conversation.

pub mod conversation;
pub mod results;

pub use conversation::{ChatEvent, Participant, Reply, SurveyConversation};
pub use results::{FetchOutcome, RecordSource, ResultService, SaveDestination, SaveReceipt};
