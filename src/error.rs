use std::sync::Arc;

use thiserror::Error;

/// Result type used throughout the Vanity client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the Vanity client.
///
/// Validation errors are returned synchronously before any request is made. Everything else
/// comes out of a round trip with the store and is either returned from a confirmed call or
/// delivered to the client's [`NotificationHandler`](crate::NotificationHandler).
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Participant identifier is empty.
    #[error("expecting participant to be a non-empty identifier")]
    InvalidParticipant,

    /// Requested alternative does not exist in this split test.
    #[error("alternative {alternative} is out of range, split test has {alternatives} alternatives")]
    AlternativeOutOfRange {
        /// Requested alternative.
        alternative: u32,
        /// Number of alternatives in the split test.
        alternatives: u32,
    },

    /// Split test identifier contains characters other than alphanumeric, underscore and hyphen.
    #[error("split test identifier may only contain alphanumeric, underscore and hyphen: {0:?}")]
    InvalidSplitTestId(String),

    /// Split test needs at least two alternatives.
    #[error("split test needs at least 2 alternatives, got {0}")]
    TooFewAlternatives(u32),

    /// Split test was already created with a different number of alternatives.
    #[error("split test {id:?} already exists with {existing} alternatives, requested {requested}")]
    AlternativeCountMismatch {
        /// Split test identifier.
        id: String,
        /// Number of alternatives the split test was created with.
        existing: u32,
        /// Number of alternatives requested.
        requested: u32,
    },

    /// Invalid base URL configuration.
    #[error("invalid base_url configuration")]
    InvalidBaseUrl(#[source] url::ParseError),

    /// Operation needs a server but the client has no base URL or token.
    #[error("missing base_url or token")]
    Disconnected,

    /// Fire-and-forget request issued outside of a tokio runtime.
    #[error("no tokio runtime available to send request")]
    NoRuntime,

    /// Network error reaching the store.
    #[error(transparent)]
    Network(Arc<reqwest::Error>),

    /// Store returned an error status (other than conflict).
    #[error("server returned {status}: {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Store response could not be understood.
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),
}

impl Error {
    /// Returns `true` for errors caused by invalid arguments. These are never retried and never
    /// reach the network.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidParticipant
                | Error::AlternativeOutOfRange { .. }
                | Error::InvalidSplitTestId(_)
                | Error::TooFewAlternatives(_)
                | Error::AlternativeCountMismatch { .. }
        )
    }

    /// HTTP status code of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            Error::Network(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Network(Arc::new(value.without_url()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidResponse(value.to_string())
    }
}
