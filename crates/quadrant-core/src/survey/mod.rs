//! Survey flow: per-respondent state machine and the registry that holds
//! sessions for conversational front ends.

pub mod profile;
pub mod registry;
pub mod session;
pub mod stage;
pub mod transition;

#[cfg(test)]
mod session_test;

pub use profile::{
    DEFAULT_NICKNAME_MAX, DEFAULT_SLOGAN_MAX, NicknamePolicy, ProfileLimits, is_skip,
    normalize_emoji, normalize_nickname, normalize_slogan,
};
pub use registry::{Applied, ParticipantId, SessionRegistry};
pub use session::{SurveyFlow, SurveySession};
pub use stage::Stage;
pub use transition::{CompletedSurvey, Transition, ValidationError};
