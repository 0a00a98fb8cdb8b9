//! CLI argument model for the `parrot` webchat binary.
//!
//! Exposes the clap-backed [`Cli`] plus the conversion into gateway and
//! relay configuration used by `main`.

pub mod cli_args;

pub use cli_args::{default_printer_path, Cli};
