//! Tracing subscriber setup.
//!
//! While the game owns the terminal, log lines would corrupt the screen, so
//! TUI runs log to a file only. Headless runs may log to stderr instead.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The configured log file
    File,
    /// Standard error
    Stderr,
}

/// Default filter for this crate at the configured level.
fn default_filter(config: &LoggingConfig) -> String {
    format!("hanoi_towers={},hanoi={}", config.level, config.level)
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the configured level. For [`LogTarget::File`] the
/// returned guard flushes the background writer on drop and must be held
/// until exit. Nothing is installed when logging is disabled.
pub fn init(config: &LoggingConfig, target: LogTarget) -> std::io::Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            Ok(None)
        }
        LogTarget::File => {
            std::fs::create_dir_all(&config.directory)?;
            let file_appender =
                tracing_appender::rolling::never(&config.directory, &config.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
            Ok(Some(guard))
        }
    }
}
