//! Browser webchat gateway for the parrot command relay.
//!
//! Serves a single-page chat UI and the JSON endpoints it calls. The chat
//! transcript lives in the browser and travels with every relay request.

mod webchat_gateway;

pub use webchat_gateway::{run_webchat_gateway_server, WebchatGatewayConfig};
