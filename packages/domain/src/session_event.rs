//! Base payload shared by all session-scoped events.

use crate::session_id::SessionId;
use serde::{Deserialize, Serialize};

/// Anything that happened inside a session.
///
/// Richer event payloads embed [`SessionEventArgs`] and implement this
/// trait by delegating to it.
pub trait SessionEvent {
    /// Identifier of the session the event belongs to.
    fn session_id(&self) -> &SessionId;
}

/// Event arguments that only carry the session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEventArgs {
    session_id: SessionId,
}

impl SessionEventArgs {
    /// Create session event arguments.
    ///
    /// A supplied id is stored as given; `None` generates a new one.
    pub fn new<S: Into<SessionId>>(session_id: Option<S>) -> Self {
        Self {
            session_id: session_id.map_or_else(SessionId::generate, Into::into),
        }
    }

    /// Create session event arguments with a generated id.
    pub fn generated() -> Self {
        Self::new(None::<SessionId>)
    }
}

impl SessionEvent for SessionEventArgs {
    #[inline]
    fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}

impl From<SessionId> for SessionEventArgs {
    fn from(session_id: SessionId) -> Self {
        Self { session_id }
    }
}
