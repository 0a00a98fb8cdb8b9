//! Webchat gateway server bootstrap and router wiring.

use super::*;

/// Binds `config.bind` and serves the webchat until Ctrl-C.
pub async fn run_webchat_gateway_server(config: WebchatGatewayConfig) -> Result<()> {
    let bind_addr = config
        .bind
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid --bind '{}'", config.bind))?;

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind webchat gateway on {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve bound webchat gateway address")?;

    println!(
        "parrot webchat listening: addr={} url=http://{} printer={} timeout_ms={}",
        local_addr,
        local_addr,
        config.relay.program.display(),
        config.relay.timeout.as_millis()
    );
    println!("press Ctrl+C to stop the server");
    tracing::info!(%local_addr, "webchat gateway started");

    let state = Arc::new(WebchatGatewayState::new(config));
    let app = build_webchat_gateway_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("webchat gateway server exited unexpectedly")?;

    tracing::info!("webchat gateway stopped");
    Ok(())
}

pub(super) fn build_webchat_gateway_router(state: Arc<WebchatGatewayState>) -> Router {
    Router::new()
        .route(WEBCHAT_ENDPOINT, get(handle_webchat_page))
        .route(RELAY_ENDPOINT, post(handle_relay))
        .route(CLEAR_ENDPOINT, post(handle_clear))
        .route(EXAMPLES_ENDPOINT, get(handle_examples))
        .route(HEALTH_ENDPOINT, get(handle_health))
        .with_state(state)
}
