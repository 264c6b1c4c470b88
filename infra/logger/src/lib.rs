//! # Logger
//!
//! Installs the global `tracing` subscriber for the workspace binaries: a
//! compact (or JSON) console layer, an optional rolling file layer written
//! through a non-blocking worker, and an [`EnvFilter`] that honours `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use mlife_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("mlife-server")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    stderr: bool,
    json: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            stderr: false,
            json: false,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Typestate builder for the global subscriber.
///
/// A name is mandatory before [`LoggerBuilder::init`] becomes available; the
/// rotation knobs only exist once a log directory has been set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger; also used as the rolling file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { config: self.config, name: WithName(name.into()), file: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Programmatic default directives (e.g. `mlife=debug,tower_http=info`).
    ///
    /// `RUST_LOG` is ignored once an explicit filter is supplied.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Sends console output to stderr, keeping stdout free for command output.
    #[must_use]
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.config.stderr = enabled;
        self
    }

    /// Switches every layer to JSON output.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Writes logs into rolling files under `path`.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the process so
    /// the file worker can flush.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, zero `max_files`,
    ///   a malformed filter or no enabled output.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    /// * [`LoggerError::Appender`] / [`LoggerError::Internal`] when the log
    ///   directory cannot be prepared.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name), .. } = self;
        validate_config(&config, &name)?;

        let env_filter = build_env_filter(&config)?;
        let mut layers = Vec::new();

        if config.console && config.stderr {
            let console = layer().with_writer(std::io::stderr).with_ansi(!config.json);
            layers.push(if config.json { console.json().boxed() } else { console.compact().boxed() });
        } else if config.console {
            let console = layer().with_ansi(!config.json);
            layers.push(if config.json { console.json().boxed() } else { console.compact().boxed() });
        }

        let guard = match &config.path {
            Some(path) => {
                fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create path: {}", path.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(config.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(config.max_files)
                    .build(path)
                    .context("Building rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if config.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new [`LoggerBuilder`].
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, file: PhantomData }
    }

    /// The file worker guard, present only when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses a level name as written in configuration files (`"info"`, `"WARN"`, `"off"`).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}': {e}").into(),
        context: None,
    })
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.path.is_some() && config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match &config.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid env filter '{filter}': {e}").into(),
            context: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_builder_defaults() {
        let builder = Logger::builder().name("test-app");
        assert!(builder.config.console);
        assert!(!builder.config.stderr);
        assert!(!builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert!(builder.config.path.is_none());
    }

    #[test]
    fn test_builder_file_configuration() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempdir()?;
        let log_dir = tmp_dir.path().join("logs");
        let builder = Logger::builder()
            .name("test-app")
            .env_filter("mlife=debug")
            .json(true)
            .path(&log_dir)
            .max_files(3)
            .level(LevelFilter::DEBUG);

        assert!(builder.config.json);
        assert_eq!(builder.config.max_files, 3);
        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.env_filter.as_deref(), Some("mlife=debug"));
        assert_eq!(builder.config.path.as_deref(), Some(log_dir.as_path()));
        Ok(())
    }

    #[test]
    fn test_parse_level_accepts_config_spellings() {
        assert_eq!(parse_level("info").ok(), Some(LevelFilter::INFO));
        assert_eq!(parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        assert_eq!(parse_level("off").ok(), Some(LevelFilter::OFF));
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    #[serial]
    fn test_blank_name_is_rejected() {
        let err = Logger::builder().name("   ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_no_layers_is_rejected() {
        let err = Logger::builder().name("silent").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_malformed_filter_is_rejected() {
        let err = Logger::builder().name("filtered").env_filter("mlife=loudest").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
