//! Tracing setup.

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use wcagfix_config::LoggingConfig;

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Get the ~/.wcagfix directory path.
pub(crate) fn wcagfix_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".wcagfix"))
        .unwrap_or_else(|| PathBuf::from(".wcagfix"))
}

/// Initialize tracing with console output and, if enabled, a daily log file.
///
/// `RUST_LOG` overrides the configured level.
pub(crate) fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so `--json` output stays clean.
    let console = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    let file = if config.file {
        let log_dir = config
            .directory
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| wcagfix_dir().join("logs"));
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("wcagfix")
            .filename_suffix("log")
            .max_log_files(30)
            .build(&log_dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false).boxed())
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .try_init()?;

    Ok(())
}
