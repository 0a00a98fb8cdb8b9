use std::sync::Arc;

use parrot_core::current_local_time;
use serde::{Deserialize, Serialize};

use crate::invoker::ParamsInvoker;
use crate::render::{render_response, RelayOutcome};
use crate::tokenize::tokenize_message;

const EXAMPLE_COMMANDS: &[&str] = &[
    "hello world",
    "--name John --age 25",
    "item1 item2 item3 --verbose",
    "--name 'Jane Doe' --city 'New York' --debug",
    "test --output results.txt --verbose",
];

/// Canned inputs offered by the chat page.
pub fn example_commands() -> &'static [&'static str] {
    EXAMPLE_COMMANDS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One `[user_input, rendered_response]` pair of the chat transcript.
pub struct TranscriptEntry(String, String);

impl TranscriptEntry {
    pub fn new(user_input: impl Into<String>, response: impl Into<String>) -> Self {
        Self(user_input.into(), response.into())
    }

    pub fn user_input(&self) -> &str {
        &self.0
    }

    pub fn response(&self) -> &str {
        &self.1
    }
}

#[derive(Clone)]
/// Relays chat lines to the parameter printer.
///
/// Holds no transcript of its own: callers pass the history in and get the
/// extended history back.
pub struct CommandRelay {
    invoker: Arc<dyn ParamsInvoker>,
}

impl CommandRelay {
    pub fn new(invoker: Arc<dyn ParamsInvoker>) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &Arc<dyn ParamsInvoker> {
        &self.invoker
    }

    /// Runs one relay call and appends exactly one entry to `history`.
    ///
    /// Returns the extended history and an empty string for the input field.
    pub async fn handle(
        &self,
        user_message: &str,
        mut history: Vec<TranscriptEntry>,
    ) -> (Vec<TranscriptEntry>, String) {
        let outcome = self.run(user_message).await;
        tracing::info!(
            outcome = outcome.kind(),
            history_len = history.len() + 1,
            "relay call finished"
        );
        let response = render_response(&outcome, &current_local_time());
        history.push(TranscriptEntry::new(user_message, response));
        (history, String::new())
    }

    /// Resets the transcript and input field.
    pub fn clear(&self) -> (Vec<TranscriptEntry>, String) {
        (Vec::new(), String::new())
    }

    async fn run(&self, user_message: &str) -> RelayOutcome {
        let args = tokenize_message(user_message);
        tracing::debug!(tokens = args.len(), "relaying message to parameter printer");
        let command_line = self.invoker.command_line(&args);
        let invocation = self.invoker.invoke(&args).await;
        RelayOutcome::from_invocation(command_line, self.invoker.timeout(), invocation)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::RelayError;
    use crate::invoker::ExecutionResult;

    #[derive(Default)]
    struct ScriptedInvoker {
        seen: Mutex<Vec<Vec<String>>>,
        reply: Mutex<Option<Result<ExecutionResult, RelayError>>>,
    }

    impl ScriptedInvoker {
        fn replying(reply: Result<ExecutionResult, RelayError>) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                reply: Mutex::new(Some(reply)),
            })
        }
    }

    #[async_trait]
    impl ParamsInvoker for ScriptedInvoker {
        async fn invoke(&self, args: &[String]) -> Result<ExecutionResult, RelayError> {
            self.seen.lock().expect("seen lock").push(args.to_vec());
            self.reply
                .lock()
                .expect("reply lock")
                .take()
                .unwrap_or_else(|| Err(RelayError::Unexpected("no scripted reply".to_string())))
        }

        fn command_line(&self, args: &[String]) -> String {
            shell_words::join(std::iter::once("print-params").chain(args.iter().map(String::as_str)))
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(30)
        }
    }

    #[tokio::test]
    async fn handle_appends_one_entry_and_clears_input() {
        let invoker = ScriptedInvoker::replying(Ok(ExecutionResult::completed(0, "report", "")));
        let relay = CommandRelay::new(invoker.clone());
        let prior = vec![TranscriptEntry::new("earlier", "reply")];

        let (history, input) = relay.handle("--name 'Jane Doe'", prior.clone()).await;

        assert_eq!(input, "");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], prior[0]);
        assert_eq!(history[1].user_input(), "--name 'Jane Doe'");
        assert!(history[1].response().contains("Command executed successfully"));
        assert_eq!(
            invoker.seen.lock().expect("seen lock").as_slice(),
            &[vec!["--name".to_string(), "Jane Doe".to_string()]]
        );
    }

    #[tokio::test]
    async fn rendered_command_line_round_trips_tokens() {
        let invoker = ScriptedInvoker::replying(Ok(ExecutionResult::completed(0, "ok", "")));
        let relay = CommandRelay::new(invoker);
        let (history, _) = relay
            .handle("--city \"New York\" it\\'s --verbose", Vec::new())
            .await;
        let response = history[0].response();
        let command_line = response
            .split("**Command:** `")
            .nth(1)
            .and_then(|rest| rest.split('`').next())
            .expect("command line present");
        let reparsed = shell_words::split(command_line).expect("valid quoting");
        assert_eq!(
            reparsed,
            vec!["print-params", "--city", "New York", "it's", "--verbose"]
        );
    }

    #[tokio::test]
    async fn faults_become_transcript_content() {
        let invoker = ScriptedInvoker::replying(Err(RelayError::Unexpected(
            "broken pipe".to_string(),
        )));
        let relay = CommandRelay::new(invoker);
        let (history, input) = relay.handle("x", Vec::new()).await;
        assert_eq!(input, "");
        assert!(history[0].response().contains("Unexpected error:"));
        assert!(history[0].response().contains("broken pipe"));
    }

    #[tokio::test]
    async fn timeout_entry_carries_no_stream_content() {
        let invoker = ScriptedInvoker::replying(Ok(ExecutionResult::timed_out()));
        let relay = CommandRelay::new(invoker);
        let (history, _) = relay.handle("slow", Vec::new()).await;
        let response = history[0].response();
        assert!(response.contains("Command timed out:"));
        assert!(!response.contains("```"));
    }

    #[test]
    fn clear_always_returns_empty_state() {
        let relay = CommandRelay::new(ScriptedInvoker::replying(Ok(ExecutionResult::completed(
            0, "", "",
        ))));
        assert_eq!(relay.clear(), (Vec::new(), String::new()));
    }

    #[test]
    fn transcript_entry_serializes_as_pair() {
        let entry = TranscriptEntry::new("hello", "**reply**");
        let encoded = serde_json::to_string(&entry).expect("serialize");
        assert_eq!(encoded, r#"["hello","**reply**"]"#);
        let decoded: TranscriptEntry = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, entry);
    }

    #[test]
    fn examples_cover_flags_and_quoting() {
        assert!(example_commands()
            .iter()
            .any(|example| example.contains("'Jane Doe'")));
        assert_eq!(example_commands().len(), 5);
    }
}
