//! Route paths served by the webchat gateway.

pub(super) const WEBCHAT_ENDPOINT: &str = "/";
pub(super) const RELAY_ENDPOINT: &str = "/api/relay";
pub(super) const CLEAR_ENDPOINT: &str = "/api/clear";
pub(super) const EXAMPLES_ENDPOINT: &str = "/api/examples";
pub(super) const HEALTH_ENDPOINT: &str = "/api/health";
