use std::fmt;
use std::num::IntErrorKind;

use crate::error::ParamsError;
use crate::schema::{OptionKind, OptionSchema};

const OPTION_TERMINATOR: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parsed value of a named option.
pub enum NamedValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for NamedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of classifying one argv against an [`OptionSchema`].
pub struct ArgumentSet {
    pub program: String,
    pub raw: Vec<String>,
    pub positional: Vec<String>,
    pub named: Vec<(String, NamedValue)>,
    pub flags: Vec<String>,
}

impl ArgumentSet {
    pub fn total(&self) -> usize {
        self.positional.len() + self.named.len() + self.flags.len()
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|flag| flag == name)
    }

    pub fn named_value(&self, name: &str) -> Option<&NamedValue> {
        self.named
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// One-line dump of the classified buckets for the debug report block.
    pub fn debug_summary(&self) -> String {
        let named = self
            .named
            .iter()
            .map(|(key, value)| format!("{key}={value:?}"))
            .collect::<Vec<_>>();
        format!(
            "positional={:?} named=[{}] flags={:?}",
            self.positional,
            named.join(", "),
            self.flags
        )
    }
}

impl OptionSchema {
    /// Sorts `tokens` into positional, named and flag buckets.
    ///
    /// Repeated options keep the last value. A bare `--` ends option parsing.
    pub fn classify(&self, program: &str, tokens: &[String]) -> Result<ArgumentSet, ParamsError> {
        let mut positional = Vec::new();
        let mut values: Vec<Option<NamedValue>> = vec![None; self.specs().len()];
        let mut flags_seen = vec![false; self.specs().len()];
        let mut options_closed = false;
        let mut index = 0usize;

        while index < tokens.len() {
            let token = &tokens[index];
            index += 1;

            if options_closed || !looks_like_option(token) {
                positional.push(token.clone());
                continue;
            }
            if token == OPTION_TERMINATOR {
                options_closed = true;
                continue;
            }
            if token == "-h" || token == "--help" {
                return Err(ParamsError::HelpRequested);
            }

            let (option_token, attached) = match token.split_once('=') {
                Some((option_token, value)) => (option_token, Some(value)),
                None => (token.as_str(), None),
            };
            let lookup = option_token
                .strip_prefix("--")
                .and_then(|name| self.lookup(name));
            let Some((slot, spec)) = lookup else {
                if self.tolerate_unknown() {
                    tracing::debug!(token = %token, "keeping unknown option as positional");
                    positional.push(token.clone());
                    continue;
                }
                return Err(ParamsError::UnknownOption {
                    option: option_token.to_string(),
                });
            };

            if spec.kind == OptionKind::Flag {
                if attached.is_some() {
                    return Err(ParamsError::validation(
                        spec.name,
                        "ignored explicit argument for a flag",
                    ));
                }
                flags_seen[slot] = true;
                continue;
            }

            let raw_value = match attached {
                Some(value) => value.to_string(),
                None => match tokens.get(index) {
                    Some(next) if !looks_like_option(next) => {
                        index += 1;
                        next.clone()
                    }
                    _ => return Err(ParamsError::validation(spec.name, "expected one argument")),
                },
            };
            values[slot] = Some(parse_value(spec.name, spec.kind, raw_value)?);
        }

        let named = self
            .specs()
            .iter()
            .zip(values)
            .filter_map(|(spec, value)| value.map(|value| (spec.name.to_string(), value)))
            .collect();
        let flags = self
            .specs()
            .iter()
            .zip(flags_seen)
            .filter(|(_, seen)| *seen)
            .map(|(spec, _)| spec.name.to_string())
            .collect();

        Ok(ArgumentSet {
            program: program.to_string(),
            raw: tokens.to_vec(),
            positional,
            named,
            flags,
        })
    }
}

fn parse_value(option: &str, kind: OptionKind, raw: String) -> Result<NamedValue, ParamsError> {
    match kind {
        // Integers are 64-bit signed; larger magnitudes are rejected, not truncated.
        OptionKind::Integer => raw
            .trim()
            .parse::<i64>()
            .map(NamedValue::Integer)
            .map_err(|error| {
                let reason = match error.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        format!("int value out of 64-bit range: '{raw}'")
                    }
                    _ => format!("invalid int value: '{raw}'"),
                };
                ParamsError::validation(option, reason)
            }),
        OptionKind::Text | OptionKind::Flag => Ok(NamedValue::Text(raw)),
    }
}

fn looks_like_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && !is_negative_number(token)
}

fn is_negative_number(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('-') else {
        return false;
    };
    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in rest.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
