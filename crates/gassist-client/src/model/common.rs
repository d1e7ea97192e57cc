// Common model types: the response envelope and its outcome

use std::collections::HashMap;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    config::SuccessCodes,
    error::{AssistantError, Result},
};

/// Free-form JSON object used by action params, action status and config sets
pub type DynamicMap = HashMap<String, serde_json::Value>;

/// Envelope wrapping every response from the service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Informational only ("ok" / "error")
    pub status: String,
    /// Authoritative outcome code
    pub code: i32,
    pub message: String,
    /// Present on success, `null` or missing on failure
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self, codes: &SuccessCodes) -> bool {
        codes.contains(self.code)
    }

    /// Split the envelope into a success payload or an application failure.
    ///
    /// A success code without `data` is a protocol violation and fails with
    /// [`AssistantError::MissingData`].
    pub fn into_result(self, codes: &SuccessCodes) -> Result<ApiOutcome<T>> {
        if !codes.contains(self.code) {
            return Ok(ApiOutcome::Failure(ApplicationFailure {
                status: self.status,
                code: self.code,
                message: self.message,
            }));
        }

        match self.data {
            Some(data) => Ok(ApiOutcome::Success(data)),
            None => Err(AssistantError::MissingData { code: self.code }),
        }
    }
}

/// Decode a raw response body into an envelope carrying `T`
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<ApiResponse<T>> {
    serde_json::from_slice(body).map_err(AssistantError::from_json)
}

/// Failure reported by the service inside a well-formed envelope
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationFailure {
    pub status: String,
    pub code: i32,
    pub message: String,
}

/// Result of a call that reached the service and decoded cleanly
#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure(ApplicationFailure),
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            ApiOutcome::Success(data) => Some(data),
            ApiOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ApplicationFailure> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Failure(failure) => Some(failure),
        }
    }

    /// Treat an application failure as an error, for callers using `?`
    pub fn into_error(self) -> Result<T> {
        match self {
            ApiOutcome::Success(data) => Ok(data),
            ApiOutcome::Failure(failure) => Err(AssistantError::Application {
                code: failure.code,
                message: failure.message,
            }),
        }
    }
}
