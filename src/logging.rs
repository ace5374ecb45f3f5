//! Logging configuration using tracing
//!
//! The TUI owns stdout, so logs only ever go to a file, and only when
//! `TERMINAL_TYPER_LOG` is set:
//!
//! ```bash
//! TERMINAL_TYPER_LOG=debug terminal-typer
//! TERMINAL_TYPER_LOG=terminal_typer=trace terminal-typer
//! ```

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app_dirs::AppDirs;
use crate::error::Result;

pub const LOG_ENV: &str = "TERMINAL_TYPER_LOG";
pub const LOG_FILE: &str = "terminal-typer.log";

/// Install the file logger if `TERMINAL_TYPER_LOG` is set.
///
/// Returns whether a subscriber was installed.
pub fn init() -> Result<bool> {
    let Ok(env_filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return Ok(false);
    };

    let log_dir = AppDirs::log_dir();
    init_in(&log_dir, env_filter)?;

    tracing::info!("terminal-typer starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(true)
}

fn init_in(log_dir: &Path, env_filter: EnvFilter) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_in_creates_log_dir() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");

        // a global subscriber may already be set by another test
        let _ = init_in(&log_dir, EnvFilter::new("debug"));

        assert!(log_dir.is_dir());
    }
}
