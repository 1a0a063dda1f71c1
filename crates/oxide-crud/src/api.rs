//! JSON payloads of the AJAX endpoints.

use oxide_crud_router::Response;
use serde::{Deserialize, Serialize};

/// Outcome flag of an AJAX call. The HTTP status is always 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    /// The action went through.
    Success,
    /// The action was refused or failed.
    Error,
}

/// Body of every AJAX response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Outcome.
    pub status: ApiStatus,
    /// Human readable message.
    pub message: String,
    /// Extra payload, e.g. the affected entity id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    /// A success without payload.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
            data: None,
        }
    }

    /// A success carrying `{"entity_id": id}`.
    pub fn success_with_entity(message: impl Into<String>, entity_id: &str) -> Self {
        Self {
            data: Some(serde_json::json!({ "entity_id": entity_id })),
            ..Self::success(message)
        }
    }

    /// A failure.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            message: message.into(),
            data: None,
        }
    }

    /// Whether this is a success.
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }

    /// The `entity_id` carried in `data`, if any.
    pub fn entity_id(&self) -> Option<&str> {
        self.data.as_ref()?.get("entity_id")?.as_str()
    }

    /// Wraps the payload in a JSON response.
    pub fn into_response(self) -> Response {
        Response::json(&self)
    }
}
