use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};
use parrot_core::{current_local_time, format_clock_label};

use crate::error::RelayError;
use crate::invoker::ExecutionResult;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Classified result of one relay call, ready for rendering.
pub enum RelayOutcome {
    Success {
        command_line: String,
        result: ExecutionResult,
    },
    Failure {
        command_line: String,
        result: ExecutionResult,
    },
    Timeout {
        budget: Duration,
    },
    NotFound {
        path: PathBuf,
    },
    Unexpected {
        message: String,
    },
}

impl RelayOutcome {
    pub fn from_invocation(
        command_line: String,
        budget: Duration,
        invocation: Result<ExecutionResult, RelayError>,
    ) -> Self {
        match invocation {
            Ok(result) if result.is_timed_out() => Self::Timeout { budget },
            Ok(result) if result.exit_code() == 0 => Self::Success {
                command_line,
                result,
            },
            Ok(result) => Self::Failure {
                command_line,
                result,
            },
            Err(RelayError::SubordinateNotFound { path }) => Self::NotFound { path },
            Err(RelayError::SubordinateTimeout { budget }) => Self::Timeout { budget },
            Err(RelayError::SubordinateFault { exit_code, stderr }) => Self::Failure {
                command_line,
                result: ExecutionResult::new(
                    exit_code,
                    String::new(),
                    stderr,
                    false,
                    current_local_time(),
                ),
            },
            Err(RelayError::Unexpected(message)) => Self::Unexpected { message },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Failure { .. } => "failure",
            Self::Timeout { .. } => "timeout",
            Self::NotFound { .. } => "not_found",
            Self::Unexpected { .. } => "unexpected",
        }
    }
}

/// Renders the Markdown transcript message for `outcome`, stamped `[HH:MM:SS]`.
pub fn render_response(outcome: &RelayOutcome, at: &DateTime<Local>) -> String {
    let clock = format_clock_label(at);
    match outcome {
        RelayOutcome::Success {
            command_line,
            result,
        } => {
            let mut message = format!(
                "**[{clock}] Command executed successfully:**\n\n**Command:** `{command_line}`\n\n**Output:**\n{}",
                fenced(result.stdout())
            );
            if !result.stderr().is_empty() {
                message.push_str(&format!("\n\n**Warnings:**\n{}", fenced(result.stderr())));
            }
            message
        }
        RelayOutcome::Failure {
            command_line,
            result,
        } => {
            let mut message = format!(
                "**[{clock}] Command failed:**\n\n**Command:** `{command_line}`\n\n**Error (Exit Code {}):**\n{}",
                result.exit_code(),
                fenced(result.stderr())
            );
            if !result.stdout().is_empty() {
                message.push_str(&format!(
                    "\n\n**Partial Output:**\n{}",
                    fenced(result.stdout())
                ));
            }
            message
        }
        RelayOutcome::Timeout { budget } => format!(
            "**[{clock}] Command timed out:**\n\nThe command took too long to execute (>{}).",
            describe_budget(*budget)
        ),
        RelayOutcome::NotFound { path } => format!(
            "**[{clock}] Error:**\n\nCould not find the parameter printer at {}",
            path.display()
        ),
        RelayOutcome::Unexpected { message } => {
            format!("**[{clock}] Unexpected error:**\n\n{}", fenced(message))
        }
    }
}

fn fenced(body: &str) -> String {
    format!("```\n{}\n```", body.trim_end_matches('\n'))
}

fn describe_budget(budget: Duration) -> String {
    if budget.subsec_nanos() == 0 {
        format!("{} seconds", budget.as_secs())
    } else {
        format!("{} ms", budget.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 6, 1, 14, 2, 9)
            .single()
            .expect("unambiguous local time")
    }

    fn outcome(invocation: Result<ExecutionResult, RelayError>) -> RelayOutcome {
        RelayOutcome::from_invocation(
            "print-params hello".to_string(),
            Duration::from_secs(30),
            invocation,
        )
    }

    #[test]
    fn success_renders_output_block() {
        let rendered = render_response(
            &outcome(Ok(ExecutionResult::completed(0, "report\n", ""))),
            &at(),
        );
        assert_eq!(
            rendered,
            "**[14:02:09] Command executed successfully:**\n\n**Command:** `print-params hello`\n\n**Output:**\n```\nreport\n```"
        );
    }

    #[test]
    fn success_with_stderr_adds_warnings_block() {
        let rendered = render_response(
            &outcome(Ok(ExecutionResult::completed(0, "report", "careful\n"))),
            &at(),
        );
        assert!(rendered.ends_with("\n\n**Warnings:**\n```\ncareful\n```"));
    }

    #[test]
    fn failure_leads_with_stderr_and_keeps_partial_output() {
        let rendered = render_response(
            &outcome(Ok(ExecutionResult::completed(2, "half", "bad input\n"))),
            &at(),
        );
        assert!(rendered.starts_with("**[14:02:09] Command failed:**"));
        assert!(rendered.contains("**Error (Exit Code 2):**\n```\nbad input\n```"));
        assert!(rendered.ends_with("**Partial Output:**\n```\nhalf\n```"));
    }

    #[test]
    fn failure_without_stdout_has_no_partial_block() {
        let rendered = render_response(
            &outcome(Err(RelayError::SubordinateFault {
                exit_code: 7,
                stderr: "nope".to_string(),
            })),
            &at(),
        );
        assert!(rendered.contains("**Error (Exit Code 7):**"));
        assert!(!rendered.contains("Partial Output"));
    }

    #[test]
    fn timeout_hides_stream_content() {
        let timed_out = outcome(Ok(ExecutionResult::timed_out()));
        assert_eq!(timed_out.kind(), "timeout");
        let rendered = render_response(&timed_out, &at());
        assert_eq!(
            rendered,
            "**[14:02:09] Command timed out:**\n\nThe command took too long to execute (>30 seconds)."
        );
        let explicit = outcome(Err(RelayError::SubordinateTimeout {
            budget: Duration::from_millis(1_500),
        }));
        assert!(render_response(&explicit, &at()).contains("(>1500 ms)"));
    }

    #[test]
    fn not_found_names_the_path() {
        let rendered = render_response(
            &outcome(Err(RelayError::SubordinateNotFound {
                path: PathBuf::from("/srv/bin/print-params"),
            })),
            &at(),
        );
        assert_eq!(
            rendered,
            "**[14:02:09] Error:**\n\nCould not find the parameter printer at /srv/bin/print-params"
        );
    }

    #[test]
    fn unexpected_fault_is_rendered_verbatim() {
        let rendered = render_response(
            &outcome(Err(RelayError::Unexpected("pipe closed".to_string()))),
            &at(),
        );
        assert_eq!(
            rendered,
            "**[14:02:09] Unexpected error:**\n\n```\npipe closed\n```"
        );
    }
}
