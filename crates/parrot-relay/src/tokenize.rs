/// Splits a chat line into argv tokens using shell quoting rules.
///
/// Unbalanced quotes fall back to plain whitespace splitting.
pub fn tokenize_message(message: &str) -> Vec<String> {
    match shell_words::split(message) {
        Ok(tokens) => tokens,
        Err(error) => {
            tracing::debug!(%error, "falling back to whitespace tokenization");
            message.split_whitespace().map(str::to_string).collect()
        }
    }
}
