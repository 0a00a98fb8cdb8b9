use std::io::{self, ErrorKind, Write};

use chrono::{DateTime, Local};
use parrot_core::{current_local_time, format_banner_timestamp};

use crate::classify::ArgumentSet;
use crate::schema::OptionSchema;

const RULE_WIDTH: usize = 50;
const REPORT_TITLE: &str = "PARAMETER PRINTER";
const USAGE_DESCRIPTION: &str = "Print multiple parameters to terminal";
const USAGE_EXAMPLES: &[&str] = &[
    "hello world",
    "--name John --age 25",
    "item1 item2 --verbose --output results.txt",
];

/// Returns `<crate> <version>` for the verbose report block.
pub fn runtime_version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Environment captured once per invocation so rendering stays deterministic.
pub struct ReportContext {
    pub generated_at: DateTime<Local>,
    pub runtime_version: String,
}

impl ReportContext {
    pub fn now() -> Self {
        Self {
            generated_at: current_local_time(),
            runtime_version: runtime_version(),
        }
    }
}

/// Renders the fixed-order parameter report written to stdout.
pub fn render_report(args: &ArgumentSet, context: &ReportContext) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        REPORT_TITLE.to_string(),
        rule.clone(),
        format!(
            "Execution time: {}",
            format_banner_timestamp(&context.generated_at)
        ),
        String::new(),
    ];

    if !args.positional.is_empty() {
        lines.push("POSITIONAL ARGUMENTS:".to_string());
        for (index, item) in args.positional.iter().enumerate() {
            lines.push(format!("  {}. {}", index + 1, item));
        }
        lines.push(String::new());
    }

    if !args.named.is_empty() {
        lines.push("NAMED ARGUMENTS:".to_string());
        for (key, value) in &args.named {
            lines.push(format!("  --{key}: {value}"));
        }
        lines.push(String::new());
    }

    if !args.flags.is_empty() {
        lines.push("FLAGS:".to_string());
        for flag in &args.flags {
            lines.push(format!("  --{flag}: enabled"));
        }
        lines.push(String::new());
    }

    lines.push("SUMMARY:".to_string());
    lines.push(format!(
        "  Total positional arguments: {}",
        args.positional.len()
    ));
    lines.push(format!("  Total named arguments: {}", args.named.len()));
    lines.push(format!("  Total flags: {}", args.flags.len()));
    lines.push(format!("  Total parameters: {}", args.total()));

    if args.has_flag("verbose") {
        lines.push(String::new());
        lines.push("VERBOSE OUTPUT:".to_string());
        lines.push(format!("  Program name: {}", args.program));
        lines.push(format!("  Runtime version: {}", context.runtime_version));
        lines.push(format!("  Command line: {}", reconstruct_command_line(args)));
    }

    if args.has_flag("debug") {
        lines.push(String::new());
        lines.push("DEBUG OUTPUT:".to_string());
        lines.push(format!("  Classified arguments: {}", args.debug_summary()));
        lines.push(format!("  Raw argv: {:?}", raw_argv(args)));
    }

    lines.push(rule);
    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Renders the `--help` screen for `schema`.
pub fn render_usage(schema: &OptionSchema, program: &str) -> String {
    let mut synopsis = vec![format!("usage: {program}"), "[-h]".to_string()];
    let mut rows = vec![(
        "-h, --help".to_string(),
        "show this help message and exit".to_string(),
    )];
    for spec in schema.specs() {
        let invocation = match spec.kind.metavar() {
            Some(metavar) => format!("--{} {}", spec.name, metavar),
            None => format!("--{}", spec.name),
        };
        synopsis.push(format!("[{invocation}]"));
        rows.push((invocation, spec.help.to_string()));
    }
    synopsis.push("[items ...]".to_string());

    let width = rows
        .iter()
        .map(|(invocation, _)| invocation.len())
        .max()
        .unwrap_or_default();
    let mut lines = vec![
        synopsis.join(" "),
        String::new(),
        USAGE_DESCRIPTION.to_string(),
        String::new(),
        "positional arguments:".to_string(),
        format!("  {:<width$}  Positional arguments", "items"),
        String::new(),
        "options:".to_string(),
    ];
    for (invocation, help) in rows {
        lines.push(format!("  {invocation:<width$}  {help}"));
    }
    lines.push(String::new());
    lines.push("examples:".to_string());
    for example in USAGE_EXAMPLES {
        lines.push(format!("  {program} {example}"));
    }
    let mut usage = lines.join("\n");
    usage.push('\n');
    usage
}

fn raw_argv(args: &ArgumentSet) -> Vec<&str> {
    std::iter::once(args.program.as_str())
        .chain(args.raw.iter().map(String::as_str))
        .collect()
}

fn reconstruct_command_line(args: &ArgumentSet) -> String {
    shell_words::join(raw_argv(args))
}

/// Writes rendered text and flushes. A reader that hung up early
/// (`print-params --debug | head -1`) is not an error.
pub fn write_rendered<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(error) if error.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
