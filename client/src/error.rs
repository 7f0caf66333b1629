use std::time::Duration;

use thiserror::Error;

/// Why a request to the posts API did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("could not reach the server: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

impl NetworkError {
    /// Only failures that never reached the server are worth repeating.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Transport(_))
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
