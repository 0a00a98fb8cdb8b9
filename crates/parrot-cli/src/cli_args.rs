use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use parrot_gateway::WebchatGatewayConfig;
use parrot_relay::RelayConfig;

const PRINTER_BINARY_NAME: &str = "print-params";

fn parse_positive_usize(value: &str) -> Result<usize, String> {
    let parsed = value
        .parse::<usize>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

/// Returns `print-params` next to the running executable, or the bare name when
/// the executable path cannot be resolved.
pub fn default_printer_path() -> PathBuf {
    let binary = format!("{PRINTER_BINARY_NAME}{}", std::env::consts::EXE_SUFFIX);
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&binary)))
        .unwrap_or_else(|| PathBuf::from(binary))
}

#[derive(Debug, Parser)]
#[command(
    name = "parrot",
    about = "Webchat that relays each message to the print-params binary",
    version
)]
/// Public struct `Cli` for the `parrot` binary.
pub struct Cli {
    #[arg(
        long,
        env = "PARROT_BIND",
        default_value = "0.0.0.0:7860",
        help = "Socket address the webchat server listens on"
    )]
    pub bind: String,

    #[arg(
        long,
        env = "PARROT_PRINTER",
        help = "print-params binary: a path, or a bare name looked up on PATH. Defaults to print-params next to this executable."
    )]
    pub printer: Option<PathBuf>,

    #[arg(
        long,
        env = "PARROT_LAUNCHER",
        default_value = "",
        help = "Optional shell-quoted command prefix used to run the printer, e.g. 'nice -n 10'"
    )]
    pub launcher: String,

    #[arg(
        long = "timeout-ms",
        env = "PARROT_TIMEOUT_MS",
        default_value_t = 30_000,
        value_parser = parse_positive_u64,
        help = "Wall-clock budget per relay call in milliseconds"
    )]
    pub timeout_ms: u64,

    #[arg(
        long = "max-input-chars",
        env = "PARROT_MAX_INPUT_CHARS",
        default_value_t = 4_096,
        value_parser = parse_positive_usize,
        help = "Longest chat message accepted by the relay endpoint"
    )]
    pub max_input_chars: usize,
}

impl Cli {
    pub fn printer_path(&self) -> PathBuf {
        self.printer.clone().unwrap_or_else(default_printer_path)
    }

    pub fn launcher_words(&self) -> Result<Vec<String>> {
        shell_words::split(&self.launcher)
            .with_context(|| format!("invalid --launcher '{}'", self.launcher))
    }

    pub fn relay_config(&self) -> Result<RelayConfig> {
        Ok(RelayConfig::new(self.printer_path())
            .with_launcher(self.launcher_words()?)
            .with_timeout(Duration::from_millis(self.timeout_ms)))
    }

    pub fn gateway_config(&self) -> Result<WebchatGatewayConfig> {
        Ok(WebchatGatewayConfig {
            bind: self.bind.clone(),
            relay: self.relay_config()?,
            max_input_chars: self.max_input_chars,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("parrot").chain(args.iter().copied()))
            .expect("parse cli")
    }

    #[test]
    fn unit_defaults_match_documented_deployment() {
        let cli = parse(&[]);
        assert_eq!(cli.bind, "0.0.0.0:7860");
        assert_eq!(cli.timeout_ms, 30_000);
        assert_eq!(cli.max_input_chars, 4_096);
        let relay = cli.relay_config().expect("relay config");
        assert!(relay.launcher.is_empty());
        assert_eq!(relay.timeout, Duration::from_secs(30));
        assert!(relay.program.ends_with(format!(
            "{PRINTER_BINARY_NAME}{}",
            std::env::consts::EXE_SUFFIX
        )));
    }

    #[test]
    fn unit_launcher_is_split_shell_style() {
        let cli = parse(&[
            "--printer",
            "/opt/print-params",
            "--launcher",
            "env 'FOO=a b'",
            "--timeout-ms",
            "1500",
        ]);
        let config = cli.gateway_config().expect("gateway config");
        assert_eq!(config.relay.program, PathBuf::from("/opt/print-params"));
        assert_eq!(config.relay.launcher, vec!["env", "FOO=a b"]);
        assert_eq!(config.relay.timeout, Duration::from_millis(1_500));
    }

    #[test]
    fn regression_unbalanced_launcher_is_an_error() {
        let cli = parse(&["--launcher", "'unterminated"]);
        let error = cli.relay_config().expect_err("unbalanced quote");
        assert!(error.to_string().contains("invalid --launcher"));
    }

    #[test]
    fn regression_zero_timeout_is_rejected() {
        let error = Cli::try_parse_from(["parrot", "--timeout-ms", "0"]).expect_err("zero timeout");
        assert!(error.to_string().contains("value must be greater than 0"));
    }
}
