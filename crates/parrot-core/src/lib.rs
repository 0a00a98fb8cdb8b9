//! Foundational low-level utilities shared across parrot crates.
//!
//! Provides the wall-clock formatting used by printer banners and relay
//! transcript entries, plus the tracing bootstrap shared by the binaries.

pub mod logging;
pub mod time_utils;

pub use logging::init_tracing;
pub use time_utils::{current_local_time, format_banner_timestamp, format_clock_label};
