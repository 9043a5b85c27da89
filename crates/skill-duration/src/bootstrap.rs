use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` value (`DEBUG`, `INFO`, `WARNING`, `ERROR`) to a
/// tracing filter directive. Unknown values pass through lowercased.
pub fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        other => other.to_lowercase(),
    }
}

/// Build the filter for `log_level`, falling back to `"info"` when the
/// directive is not understood.
pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialise the global `tracing` subscriber.
///
/// Logs go to stderr so stdout carries only the response JSON.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(build_filter(log_level))
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
