use thiserror::Error;

pub type Result<T> = std::result::Result<T, RobotError>;

#[derive(Debug, Error)]
pub enum RobotError {
    #[error("failed to serialize message: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse webhook response: {source} - {body}")]
    ParseResponse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("dingtalk robot send failed: {message}")]
    Rejected { code: i64, message: String },
}

/// Coarse classification of [`RobotError`], for callers that only branch on
/// the failure stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Serialization,
    Transport,
    ResponseParse,
    RemoteRejection,
}

impl RobotError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Serialize(_) => ErrorKind::Serialization,
            Self::Transport(_) => ErrorKind::Transport,
            Self::ParseResponse { .. } => ErrorKind::ResponseParse,
            Self::Rejected { .. } => ErrorKind::RemoteRejection,
        }
    }
}
