use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Enumerates classifier failures surfaced to the invoking environment.
pub enum ParamsError {
    #[error("argument --{option}: {reason}")]
    Validation { option: String, reason: String },
    #[error("unrecognized option: {option}")]
    UnknownOption { option: String },
    #[error("help requested")]
    HelpRequested,
}

impl ParamsError {
    pub(crate) fn validation(option: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            option: option.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit code used by `print-params` for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::HelpRequested => 0,
            Self::Validation { .. } | Self::UnknownOption { .. } => 2,
        }
    }
}
