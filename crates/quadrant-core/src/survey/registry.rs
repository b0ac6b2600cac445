use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::error::{QuadrantError, Result};
use crate::locale::Locale;

use super::session::{SurveyFlow, SurveySession};
use super::stage::Stage;
use super::transition::Transition;

/// Identifier of a respondent on a conversational transport (chat user id).
pub type ParticipantId = i64;

/// Result of running one transition through the registry.
#[derive(Debug, Clone)]
pub struct Applied {
    pub transition: Transition,
    /// State of the session right after the transition. For a completed
    /// survey this is the final state of a session that is no longer held by
    /// the registry.
    pub session: SurveySession,
}

/// Holds the active survey session of every participant.
///
/// `SessionRegistry` is responsible for:
/// - Creating sessions on an explicit start action
/// - Running transitions on a participant's session
/// - Dropping a session on cancel or as soon as it completes
///
/// Sessions of different participants never interact; the lock only guards
/// the map itself, and no await point is held while it is taken.
pub struct SessionRegistry {
    flow: Arc<SurveyFlow>,
    /// In-memory session map
    sessions: RwLock<HashMap<ParticipantId, SurveySession>>,
    disposed: AtomicBool,
}

impl SessionRegistry {
    /// Creates an empty registry whose sessions run `flow`.
    pub fn init(flow: Arc<SurveyFlow>) -> Self {
        Self {
            flow,
            sessions: RwLock::new(HashMap::new()),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn flow(&self) -> &Arc<SurveyFlow> {
        &self.flow
    }

    /// Creates a fresh, not yet started session for `id`, replacing any
    /// session the participant already had.
    ///
    /// # Errors
    ///
    /// Returns a config error once the registry has been disposed.
    pub async fn begin(&self, id: ParticipantId, locale_hint: Locale) -> Result<SurveySession> {
        if self.disposed.load(Ordering::Acquire) {
            return Err(QuadrantError::config("session registry has been disposed"));
        }
        let session = SurveySession::new(Arc::clone(&self.flow), locale_hint);

        let mut sessions = self.sessions.write().await;
        if sessions.insert(id, session.clone()).is_some() {
            tracing::debug!(participant = id, "Replaced existing survey session");
        }
        Ok(session)
    }

    /// Runs `f` against the participant's session.
    ///
    /// When the transition completes the survey, the session is removed in
    /// the same critical section, so any event that arrives while the result
    /// is being submitted finds no session.
    ///
    /// # Returns
    ///
    /// `None` if the participant has no session.
    pub async fn apply<F>(&self, id: ParticipantId, f: F) -> Option<Applied>
    where
        F: FnOnce(&mut SurveySession) -> Transition,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        let transition = f(session);

        let session = if transition.is_completed() {
            sessions.remove(&id)?
        } else {
            session.clone()
        };

        Some(Applied {
            transition,
            session,
        })
    }

    /// Cancels the participant's session.
    ///
    /// # Returns
    ///
    /// The discarded session, if there was one.
    pub async fn remove(&self, id: ParticipantId) -> Option<SurveySession> {
        self.sessions.write().await.remove(&id)
    }

    /// A copy of the participant's session.
    pub async fn get(&self, id: ParticipantId) -> Option<SurveySession> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn stage(&self, id: ParticipantId) -> Option<Stage> {
        self.sessions.read().await.get(&id).map(SurveySession::stage)
    }

    pub async fn locale(&self, id: ParticipantId) -> Option<Locale> {
        self.sessions.read().await.get(&id).map(SurveySession::locale)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops every session and refuses new ones.
    ///
    /// # Returns
    ///
    /// The number of sessions that were still in progress.
    pub async fn dispose(&self) -> usize {
        self.disposed.store(true, Ordering::Release);
        let mut sessions = self.sessions.write().await;
        let dropped = sessions.len();
        sessions.clear();
        dropped
    }
}
