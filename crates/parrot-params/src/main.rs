use std::path::Path;
use std::process::ExitCode;

use parrot_core::init_tracing;
use parrot_params::{
    render_report, render_usage, write_rendered, OptionSchema, ParamsError, ReportContext,
    PRINTER_PROGRAM_NAME,
};

const TOLERATE_UNKNOWN_ENV: &str = "PARROT_PRINTER_TOLERATE_UNKNOWN";

fn tolerate_unknown_from_env() -> bool {
    std::env::var(TOLERATE_UNKNOWN_ENV)
        .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn display_name(program: &str) -> &str {
    Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(PRINTER_PROGRAM_NAME)
}

fn emit(program: &str, text: &str) -> ExitCode {
    match write_rendered(&mut std::io::stdout().lock(), text) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}: error: failed to write output: {error}", display_name(program));
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let mut argv = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let program = argv
        .next()
        .unwrap_or_else(|| PRINTER_PROGRAM_NAME.to_string());
    let tokens = argv.collect::<Vec<_>>();
    let schema = OptionSchema::printer().with_tolerate_unknown(tolerate_unknown_from_env());

    match schema.classify(&program, &tokens) {
        Ok(args) => {
            tracing::debug!(total = args.total(), "classified printer arguments");
            emit(&program, &render_report(&args, &ReportContext::now()))
        }
        Err(ParamsError::HelpRequested) => {
            emit(&program, &render_usage(&schema, display_name(&program)))
        }
        Err(error) => {
            let name = display_name(&program);
            eprintln!("usage: {name} [-h] [options] [items ...]");
            eprintln!("{name}: error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}
