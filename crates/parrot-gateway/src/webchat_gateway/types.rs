//! Request, response and error payloads for the webchat API.

use super::*;

#[derive(Debug)]
pub(super) struct WebchatApiError {
    pub(super) status: StatusCode,
    pub(super) code: &'static str,
    pub(super) message: String,
}

impl WebchatApiError {
    pub(super) fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub(super) fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    pub(super) fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, "input_too_large", message)
    }
}

impl IntoResponse for WebchatApiError {
    fn into_response(self) -> Response {
        let error_type = if self.status.is_client_error() {
            "invalid_request_error"
        } else {
            "server_error"
        };
        (
            self.status,
            Json(json!({
                "error": {
                    "type": error_type,
                    "code": self.code,
                    "message": self.message,
                }
            })),
        )
            .into_response()
    }
}

/// Relay call body: the new chat line plus the transcript so far.
#[derive(Debug, Deserialize)]
pub(super) struct RelayRequest {
    pub(super) message: String,
    #[serde(default)]
    pub(super) history: Vec<TranscriptEntry>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(super) struct TranscriptResponse {
    pub(super) history: Vec<TranscriptEntry>,
    pub(super) input: String,
}

impl From<(Vec<TranscriptEntry>, String)> for TranscriptResponse {
    fn from((history, input): (Vec<TranscriptEntry>, String)) -> Self {
        Self { history, input }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ExamplesResponse {
    pub(super) examples: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub(super) struct HealthResponse {
    pub(super) status: &'static str,
    pub(super) command: String,
    pub(super) timeout_ms: u64,
    pub(super) relayed_requests: u64,
}
