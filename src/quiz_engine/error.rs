use thiserror::Error;

/// Everything that can go wrong while loading content or driving a session.
///
/// Degraded content (missing titles, empty topics) is never an error: the
/// generator substitutes fallback text instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("content store has no topics")]
    EmptyContentStore,

    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    #[error("no topic other than {0:?} is available")]
    NoAlternativeTopic(String),

    #[error("no topic has been chosen yet")]
    NotStarted,

    #[error("cannot {command}: {reason}")]
    Precondition {
        command: &'static str,
        reason: &'static str,
    },

    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed content JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuizError {
    pub(crate) fn precondition(command: &'static str, reason: &'static str) -> Self {
        QuizError::Precondition { command, reason }
    }
}
