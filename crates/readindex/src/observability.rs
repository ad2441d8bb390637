//! Logging setup: human-readable events on stderr plus an optional JSONL
//! file written through a non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "READINDEX_LOG_PATH";
const LOG_DIR_ENV: &str = "READINDEX_LOG_DIR";
const LOG_FILE_NAME: &str = "readindex.jsonl";

/// Where, if anywhere, JSONL logs go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSONL destination.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// `READINDEX_LOG_PATH` wins, then `READINDEX_LOG_DIR`, then the
    /// configured `log_dir`. Without any of them no log file is written.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let env = |key: &str| std::env::var_os(key).filter(|v| !v.is_empty());
        Self::resolve(
            env(LOG_PATH_ENV).map(PathBuf::from),
            env(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = log_path.or_else(|| {
            log_dir
                .or(config_log_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        });
        Self { log_file }
    }
}

/// Filter from `RUST_LOG`, else from the CLI flags, else the config level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Keeps the file writer flushing until dropped.
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let (file_layer, guard) = match config.log_file.as_deref() {
        Some(path) => {
            let (dir, name) = split_log_path(path)?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(ObservabilityGuard { _file: guard })
}

fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &std::ffi::OsStr)> {
    let name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/explicit.jsonl")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/explicit.jsonl")));
    }

    #[test]
    fn directories_get_default_file_name() {
        let config = ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/logs/readindex.jsonl")));

        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/env/readindex.jsonl")));
    }

    #[test]
    fn no_file_by_default() {
        assert_eq!(ObservabilityConfig::resolve(None, None, None).log_file, None);
    }

    #[test]
    fn flags_override_config_level() {
        assert_eq!(level_directive(true, 3, "info"), "error");
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "info"), "debug");
        assert_eq!(level_directive(false, 2, "info"), "trace");
    }

    #[test]
    fn bare_file_name_logs_to_current_directory() {
        let path = Path::new("run.jsonl");
        let (dir, name) = split_log_path(path).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "run.jsonl");
    }
}
