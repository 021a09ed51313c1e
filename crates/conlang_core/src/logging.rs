//! Logging bootstrap and configuration.
//!
//! # Responsibility
//! - Start a rolling file logger once per process.
//! - Read logger settings from the environment for embedding callers.
//!
//! # Invariants
//! - Initialization is idempotent for an identical level and directory.
//! - A second initialization with a different level or directory is rejected.
//! - Initialization never panics.
//!
//! Store diagnostics go through the `log` facade whether or not this module
//! has been initialized; without a logger they are discarded.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "conlang";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 4 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "CONLANG_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const ENV_LOG_DIR: &str = "CONLANG_LOG_DIR";

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Reads `CONLANG_LOG_LEVEL` and `CONLANG_LOG_DIR`.
    ///
    /// Level defaults to `default_log_level()`. Returns `None` when no log
    /// directory is configured.
    pub fn from_env() -> Option<Self> {
        Self::from_values(
            std::env::var(ENV_LOG_LEVEL).ok(),
            std::env::var_os(ENV_LOG_DIR),
        )
    }

    fn from_values(level: Option<String>, log_dir: Option<OsString>) -> Option<Self> {
        let log_dir = log_dir.filter(|dir| !dir.is_empty())?;
        let level = level
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        Some(Self::new(level, PathBuf::from(log_dir)))
    }

    pub fn init(&self) -> Result<(), String> {
        let log_dir = self
            .log_dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: {}", self.log_dir.display()))?;
        init_logging(&self.level, log_dir)
    }
}

/// Starts file logging at `level` under `log_dir`.
///
/// # Errors
/// - Unsupported `level`.
/// - `log_dir` empty, relative, or not creatable.
/// - Logger already running with another level or directory.
/// - Backend startup failure.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir)?;

    if let Some(active) = ACTIVE_LOGGER.get() {
        return check_matches(active, level, &log_dir);
    }

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &log_dir))?;
    check_matches(active, level, &log_dir)
}

/// `(level, log_dir)` of the running logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=logging_init module=core status=ok level={} log_dir={} version={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        log_dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

fn check_matches(active: &ActiveLogger, level: &str, log_dir: &Path) -> Result<(), String> {
    if active.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            log_dir.display()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{level}`",
            active.level
        ));
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic module=core status=error location={} payload={}",
            location,
            single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous(panic_info);
    }));
}

/// Flattens `value` to one line of at most `max_chars` characters.
fn single_line(value: &str, max_chars: usize) -> String {
    let flat = value.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut truncated = flat.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::{
        default_log_level, normalize_level, normalize_log_dir, single_line, LoggingConfig,
    };
    use std::ffi::OsString;

    #[test]
    fn normalize_level_accepts_aliases() {
        assert_eq!(normalize_level(" WARNING ").unwrap(), "warn");
        assert_eq!(normalize_level("trace").unwrap(), "trace");
        assert!(normalize_level("loud").is_err());
    }

    #[test]
    fn normalize_log_dir_rejects_relative_and_blank() {
        assert!(normalize_log_dir("logs").unwrap_err().contains("absolute"));
        assert!(normalize_log_dir("  ").unwrap_err().contains("empty"));
    }

    #[test]
    fn single_line_flattens_and_truncates() {
        let flat = single_line("a\nb\rc", 10);
        assert_eq!(flat, "a b c");
        assert_eq!(single_line("abcdef", 3), "abc...");
    }

    #[test]
    fn config_new_keeps_fields() {
        let config = LoggingConfig::new("info", "/tmp/conlang-logs");
        assert_eq!(config.level, "info");
        assert_eq!(config.log_dir.to_str(), Some("/tmp/conlang-logs"));
    }

    #[test]
    fn config_from_values_needs_a_log_dir() {
        assert_eq!(LoggingConfig::from_values(Some("info".to_string()), None), None);
        assert_eq!(
            LoggingConfig::from_values(Some("info".to_string()), Some(OsString::new())),
            None
        );
    }

    #[test]
    fn config_from_values_defaults_blank_level() {
        let dir = Some(OsString::from("/tmp/conlang-logs"));
        for level in [None, Some(String::new()), Some("   ".to_string())] {
            let config = LoggingConfig::from_values(level, dir.clone()).unwrap();
            assert_eq!(config.level, default_log_level());
            assert_eq!(config.log_dir.to_str(), Some("/tmp/conlang-logs"));
        }
    }

    #[test]
    fn config_from_values_keeps_explicit_level() {
        let config = LoggingConfig::from_values(
            Some("warn".to_string()),
            Some(OsString::from("/var/log/conlang")),
        )
        .unwrap();
        assert_eq!(config, LoggingConfig::new("warn", "/var/log/conlang"));
    }
}
