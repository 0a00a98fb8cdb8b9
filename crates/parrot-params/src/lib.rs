//! Parameter classification and reporting for the `print-params` binary.
//!
//! An [`OptionSchema`] declares the recognized named options and flags;
//! [`OptionSchema::classify`] sorts an argv-style token list into positional,
//! named and flag buckets, and [`render_report`] turns the result into the
//! fixed-order text report printed on stdout.

pub mod classify;
pub mod error;
pub mod report;
pub mod schema;

pub use classify::{ArgumentSet, NamedValue};
pub use error::ParamsError;
pub use report::{render_report, render_usage, runtime_version, write_rendered, ReportContext};
pub use schema::{OptionKind, OptionSchema, OptionSpec};

/// Binary name used when argv[0] is unavailable.
pub const PRINTER_PROGRAM_NAME: &str = "print-params";
