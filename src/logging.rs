// Tracing setup.
//
// The TUI owns stdout, so interactive sessions log to a file through a
// non-blocking appender. Headless commands log to stderr.
// Precedence: RUST_LOG env var > config file level > "info".

use crate::config::Config;
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE: &str = "ideagramer.log";

fn env_filter(config: &Config) -> EnvFilter {
    let default_filter = format!("ideagramer={}", config.logging.level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// Log to `<log_dir>/ideagramer.log`.
///
/// The returned guard must stay alive for the whole session so buffered
/// lines get flushed on exit.
pub fn init_file_logging(config: &Config) -> Result<WorkerGuard> {
    let dir = config.log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

/// Log to stderr, keeping stdout clean for command output
pub fn init_stderr_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
