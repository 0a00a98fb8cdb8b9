use anyhow::Result;
use clap::Parser;
use parrot_cli::Cli;
use parrot_core::init_tracing;
use parrot_gateway::run_webchat_gateway_server;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.gateway_config()?;
    tracing::debug!(?config, "resolved webchat configuration");
    run_webchat_gateway_server(config).await
}
