//! Logging setup: human-readable stderr output plus an optional JSONL log file.
//!
//! The console layer is governed by `-q`/`-v`. The file layer follows
//! `RUST_LOG`, falling back to the configured `log_level`. File logging is
//! best-effort: if no location is writable the CLI runs with console output
//! only.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "CRITTER_MATCH_LOG_PATH";
const LOG_DIR_ENV: &str = "CRITTER_MATCH_LOG_DIR";
const LOG_FILE_PREFIX: &str = "critter-match";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where log files go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path. Takes priority over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log locations.
    ///
    /// Priority: `CRITTER_MATCH_LOG_PATH`, then `CRITTER_MATCH_LOG_DIR`, then
    /// the configured directory, then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                critter_match_core::config::user_data_local_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self { log_path, log_dir }
    }
}

/// Keeps the background log writer alive; drop it to flush.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Filter for the log file: `RUST_LOG` if set, else the configured level.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Console verbosity from the global flags.
pub const fn console_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    file_filter: EnvFilter,
    console_level: LevelFilter,
    console_ansi: bool,
) -> anyhow::Result<LogGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(console_ansi)
        .with_target(false)
        .without_time()
        .with_filter(console_level);

    let (writer, guard) = match open_log_writer(config) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };
    let file = writer.map(|writer| {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_filter(file_filter)
    });

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LogGuard { _file: guard })
}

fn open_log_writer(config: &ObservabilityConfig) -> Option<(NonBlocking, WorkerGuard)> {
    let appender = if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let name = path.file_name()?.to_str()?;
        build_appender(dir, Rotation::NEVER, name, None)
    } else {
        let dir = config.log_dir.as_deref()?;
        build_appender(dir, Rotation::DAILY, LOG_FILE_PREFIX, Some(LOG_FILE_SUFFIX))
    }?;
    Some(tracing_appender::non_blocking(appender))
}

fn build_appender(
    dir: &Path,
    rotation: Rotation,
    prefix: &str,
    suffix: Option<&str>,
) -> Option<RollingFileAppender> {
    std::fs::create_dir_all(dir).ok()?;
    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(prefix);
    if let Some(suffix) = suffix {
        builder = builder.filename_suffix(suffix);
    }
    builder.build(dir).ok()
}
