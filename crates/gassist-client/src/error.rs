//! Client error types for the game assistant SDK

/// Errors that can occur while talking to the game assistant service.
///
/// Application failures reported inside a decoded envelope are not errors;
/// they come back as [`crate::ApiOutcome::Failure`]. Only
/// [`crate::ApiOutcome::into_error`] turns one into [`AssistantError::Application`].
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("response does not match the expected schema: {0}")]
    SchemaMismatch(#[source] serde_json::Error),

    #[error("server reported success (code={code}) without data")]
    MissingData { code: i32 },

    #[error("server returned error: code={code}, message={message}")]
    Application { code: i32, message: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl AssistantError {
    /// Connection failures, timeouts and undecodable non-2xx responses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// The body arrived but could not be turned into the expected envelope.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Decode(_) | Self::SchemaMismatch(_) | Self::MissingData { .. }
        )
    }

    pub fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }

    /// Sorts a serde_json failure into malformed JSON or a shape mismatch.
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::SchemaMismatch(err),
            Category::Syntax | Category::Eof | Category::Io => Self::Decode(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
