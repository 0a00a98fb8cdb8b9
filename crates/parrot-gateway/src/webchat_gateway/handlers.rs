//! Route handlers for the webchat page and relay API.

use super::webchat_page::render_webchat_page;
use super::*;

pub(super) async fn handle_webchat_page() -> Html<String> {
    Html(render_webchat_page())
}

pub(super) async fn handle_relay(
    State(state): State<Arc<WebchatGatewayState>>,
    body: Bytes,
) -> Response {
    let request = match parse_webchat_json_body::<RelayRequest>(&body) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };
    let message_chars = request.message.chars().count();
    if message_chars > state.config.max_input_chars {
        return WebchatApiError::payload_too_large(format!(
            "message exceeds max input length of {} characters",
            state.config.max_input_chars
        ))
        .into_response();
    }

    let sequence = state.next_sequence();
    tracing::debug!(
        sequence,
        message_chars,
        history_len = request.history.len(),
        "relay request received"
    );
    let (history, input) = state
        .relay
        .handle(&request.message, request.history)
        .await;
    (StatusCode::OK, Json(TranscriptResponse { history, input })).into_response()
}

pub(super) async fn handle_clear(State(state): State<Arc<WebchatGatewayState>>) -> Response {
    let response = TranscriptResponse::from(state.relay.clear());
    (StatusCode::OK, Json(response)).into_response()
}

pub(super) async fn handle_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: example_commands(),
    })
}

pub(super) async fn handle_health(State(state): State<Arc<WebchatGatewayState>>) -> Response {
    let invoker = state.relay.invoker();
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            command: invoker.command_line(&[]),
            timeout_ms: u64::try_from(invoker.timeout().as_millis()).unwrap_or(u64::MAX),
            relayed_requests: state.relayed_requests(),
        }),
    )
        .into_response()
}

fn parse_webchat_json_body<T: serde::de::DeserializeOwned>(
    body: &Bytes,
) -> Result<T, WebchatApiError> {
    serde_json::from_slice::<T>(body).map_err(|error| {
        WebchatApiError::bad_request(
            "malformed_json",
            format!("failed to parse request body: {error}"),
        )
    })
}
