use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
/// Enumerates subordinate invocation failures seen by the relay.
///
/// Invokers may report timeouts and non-zero exits either as errors or as an
/// [`ExecutionResult`](crate::ExecutionResult); the relay renders both the same way.
pub enum RelayError {
    #[error("could not find the parameter printer at {}", path.display())]
    SubordinateNotFound { path: PathBuf },
    #[error("command timed out after {} ms", budget.as_millis())]
    SubordinateTimeout { budget: Duration },
    #[error("command exited with code {exit_code}")]
    SubordinateFault { exit_code: i32, stderr: String },
    #[error("{0}")]
    Unexpected(String),
}
