use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parrot_relay::{
    example_commands, CommandRelay, ParamsInvoker, ProcessInvoker, RelayConfig, TranscriptEntry,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

mod endpoints;
mod handlers;
mod server_bootstrap;
mod types;
mod webchat_page;

use endpoints::*;
use handlers::*;
use types::*;

pub use server_bootstrap::run_webchat_gateway_server;
#[cfg(test)]
use server_bootstrap::build_webchat_gateway_router;

#[derive(Debug, Clone)]
/// Startup configuration for the webchat gateway.
pub struct WebchatGatewayConfig {
    pub bind: String,
    pub relay: RelayConfig,
    pub max_input_chars: usize,
}

#[derive(Clone)]
struct WebchatGatewayState {
    config: WebchatGatewayConfig,
    relay: CommandRelay,
    relay_sequence: Arc<AtomicU64>,
}

impl WebchatGatewayState {
    fn new(config: WebchatGatewayConfig) -> Self {
        let invoker = Arc::new(ProcessInvoker::new(config.relay.clone()));
        Self::with_invoker(config, invoker)
    }

    fn with_invoker(config: WebchatGatewayConfig, invoker: Arc<dyn ParamsInvoker>) -> Self {
        Self {
            config,
            relay: CommandRelay::new(invoker),
            relay_sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    fn next_sequence(&self) -> u64 {
        self.relay_sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn relayed_requests(&self) -> u64 {
        self.relay_sequence.load(Ordering::Relaxed)
    }
}
