//! Command relay between a chat transcript and the `print-params` binary.
//!
//! A user line is tokenized shell-style, handed to a [`ParamsInvoker`]
//! (normally [`ProcessInvoker`], which runs the printer under a wall-clock
//! budget), and the captured outcome is rendered into a timestamped Markdown
//! message appended to a caller-owned transcript. Faults never escape
//! [`CommandRelay::handle`]; they become transcript content.

pub mod error;
pub mod invoker;
pub mod render;
pub mod tokenize;
pub mod transcript;

pub use error::RelayError;
pub use invoker::{
    ExecutionResult, ParamsInvoker, ProcessInvoker, RelayConfig, DEFAULT_RELAY_TIMEOUT,
};
pub use render::{render_response, RelayOutcome};
pub use tokenize::tokenize_message;
pub use transcript::{example_commands, CommandRelay, TranscriptEntry};
