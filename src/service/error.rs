use std::time::Duration;
use thiserror::Error;

/// Every way an outbound chat request can fail.
///
/// The dispatcher treats all variants the same; the distinction only
/// matters for the diagnostic log.
#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("failed to reach chat service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("chat service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("chat service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed chat service response: {0}")]
    Malformed(String),

    #[error("request cancelled")]
    Cancelled,
}

impl RequestFailure {
    /// Classifies a reqwest error, keeping timeouts distinct from other
    /// transport problems.
    pub fn from_reqwest(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            Self::Timeout(timeout)
        } else if error.is_decode() {
            Self::Malformed(error.to_string())
        } else {
            Self::Transport(error)
        }
    }
}
