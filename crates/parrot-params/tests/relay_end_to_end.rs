//! Relay round trips against the real `print-params` binary.

use std::path::PathBuf;
use std::sync::Arc;

use parrot_relay::{CommandRelay, ProcessInvoker, RelayConfig};

fn printer_relay() -> CommandRelay {
    let program = PathBuf::from(env!("CARGO_BIN_EXE_print-params"));
    CommandRelay::new(Arc::new(ProcessInvoker::new(RelayConfig::new(program))))
}

#[tokio::test]
async fn quoted_named_values_reach_the_printer_intact() {
    let relay = printer_relay();
    let (history, input) = relay
        .handle("--name 'Jane Doe' --city 'New York' --debug", Vec::new())
        .await;

    assert_eq!(input, "");
    assert_eq!(history.len(), 1);
    let response = history[0].response();
    assert!(response.contains("Command executed successfully:"));
    assert!(response.contains("  --name: Jane Doe\n"));
    assert!(response.contains("  --city: New York\n"));
    assert!(response.contains("DEBUG OUTPUT:"));
    assert!(!response.contains("**Warnings:**"));
}

#[tokio::test]
async fn validation_failure_is_rendered_as_failed_command() {
    let relay = printer_relay();
    let (history, _) = relay.handle("--age abc", Vec::new()).await;
    let response = history[0].response();
    assert!(response.contains("Command failed:"));
    assert!(response.contains("**Error (Exit Code 2):**"));
    assert!(response.contains("argument --age"));
    assert!(!response.contains("Partial Output"));
}

#[tokio::test]
async fn history_grows_across_calls_and_clears() {
    let relay = printer_relay();
    let (history, _) = relay.handle("hello world", Vec::new()).await;
    let (history, _) = relay.handle("item1 --verbose", history).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].user_input(), "hello world");
    assert!(history[0].response().contains("  Total parameters: 2\n"));
    assert!(history[1].response().contains("VERBOSE OUTPUT:"));

    let (cleared, input) = relay.clear();
    assert!(cleared.is_empty());
    assert_eq!(input, "");
}

#[tokio::test]
async fn missing_printer_yields_not_found_diagnostic() {
    let missing = PathBuf::from(env!("CARGO_BIN_EXE_print-params")).with_file_name("no-such-printer");
    let relay = CommandRelay::new(Arc::new(ProcessInvoker::new(RelayConfig::new(&missing))));
    let (history, _) = relay.handle("hello", Vec::new()).await;
    let response = history[0].response();
    assert!(response.contains("Error:"));
    assert!(response.contains(&missing.display().to_string()));
    assert!(!response.contains("os error"));
}
