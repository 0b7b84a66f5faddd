//! Uniform response envelope.
//!
//! Every endpoint answers with `{status, message, data}`. `status` is an
//! integer code understood by the front end, `data` is an object keyed by
//! payload name.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Envelope status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// `0`
    Success,
    /// `1`
    Error,
    /// `-1`, the caller has no valid session
    LoginRequired,
}

impl MessageStatus {
    pub fn code(&self) -> i32 {
        match self {
            MessageStatus::Success => 0,
            MessageStatus::Error => 1,
            MessageStatus::LoginRequired => -1,
        }
    }
}

impl Serialize for MessageStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

/// Response envelope.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Message {
    #[cfg_attr(feature = "openapi", schema(value_type = i32, example = 0))]
    pub status: MessageStatus,
    pub message: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub data: Map<String, Value>,
}

impl Message {
    fn new(status: MessageStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: Map::new(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(MessageStatus::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(MessageStatus::Error, message)
    }

    pub fn login_required(message: impl Into<String>) -> Self {
        Self::new(MessageStatus::LoginRequired, message)
    }

    /// Attach a payload entry.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Default HTTP status for this envelope
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            MessageStatus::Success => StatusCode::OK,
            MessageStatus::Error => StatusCode::BAD_REQUEST,
            MessageStatus::LoginRequired => StatusCode::UNAUTHORIZED,
        }
    }

    /// Pair the envelope with an explicit HTTP status.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> Response {
        let status = self.http_status();
        self.with_status(status)
    }
}
