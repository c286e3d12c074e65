//! Event raised when translated speech has been synthesized.

use crate::session_event::{SessionEvent, SessionEventArgs};
use crate::session_id::SessionId;
use crate::translation_synthesis_result::TranslationSynthesisResult;
use std::sync::Arc;

/// Translation synthesis event arguments.
///
/// Pairs the session the event belongs to with the synthesis result that
/// triggered it. The result is shared, not copied: the producer may keep
/// its own handle and every listener observes the same value.
///
/// The payload is read-only once built:
///
/// ```compile_fail
/// use fluent_translation_domain::{TranslationSynthesisEventArgs, TranslationSynthesisResult};
/// use std::sync::Arc;
///
/// let mut args = TranslationSynthesisEventArgs::new(TranslationSynthesisResult::completed(), Some("s"));
/// args.result = Arc::new(TranslationSynthesisResult::completed());
/// ```
#[derive(Debug, Clone)]
pub struct TranslationSynthesisEventArgs {
    session: SessionEventArgs,
    result: Arc<TranslationSynthesisResult>,
}

impl TranslationSynthesisEventArgs {
    /// Create event arguments for `result`, generating a session id when
    /// none is given.
    pub fn new<R, S>(result: R, session_id: Option<S>) -> Self
    where
        R: Into<Arc<TranslationSynthesisResult>>,
        S: Into<SessionId>,
    {
        Self {
            session: SessionEventArgs::new(session_id),
            result: result.into(),
        }
    }

    /// The translation synthesis result.
    #[inline]
    pub fn result(&self) -> &TranslationSynthesisResult {
        &self.result
    }

    /// Shared handle to the result, for listeners that outlive the event.
    #[inline]
    pub fn shared_result(&self) -> &Arc<TranslationSynthesisResult> {
        &self.result
    }

    /// The embedded session payload.
    #[inline]
    pub fn session(&self) -> &SessionEventArgs {
        &self.session
    }
}

impl SessionEvent for TranslationSynthesisEventArgs {
    #[inline]
    fn session_id(&self) -> &SessionId {
        self.session.session_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result_reason::ResultReason;

    #[test]
    fn result_is_the_supplied_reference() {
        let result = Arc::new(TranslationSynthesisResult::from_audio(vec![0x52, 0x49]));
        let args = TranslationSynthesisEventArgs::new(Arc::clone(&result), Some("sess-1"));

        assert!(Arc::ptr_eq(args.shared_result(), &result));
        assert_eq!(args.session_id().id(), "sess-1");
    }

    #[test]
    fn result_accessor_is_idempotent() {
        let args =
            TranslationSynthesisEventArgs::new(TranslationSynthesisResult::completed(), Some("s"));
        assert!(std::ptr::eq(args.result(), args.result()));
        assert_eq!(args.result().reason(), ResultReason::SynthesizingAudioCompleted);
    }

    #[test]
    fn missing_session_id_is_generated() {
        let args = TranslationSynthesisEventArgs::new(
            TranslationSynthesisResult::from_audio(vec![1]),
            None::<SessionId>,
        );
        assert!(!args.session_id().id().is_empty());
        assert_eq!(args.session().session_id(), args.session_id());
    }

    #[test]
    fn clones_share_the_result() {
        let args =
            TranslationSynthesisEventArgs::new(TranslationSynthesisResult::completed(), Some("s"));
        let copy = args.clone();
        assert!(Arc::ptr_eq(args.shared_result(), copy.shared_result()));
        assert_eq!(copy.session_id(), args.session_id());
    }
}
