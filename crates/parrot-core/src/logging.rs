use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the compact stderr subscriber used by every parrot binary.
///
/// Stdout is reserved for program output, which the relay captures verbatim.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
