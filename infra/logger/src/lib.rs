//! # Logger
//!
//! Process-wide logging for the `PawCalc` binaries.
//! A console layer plus optional rolling file output (text or JSON lines) behind a non-blocking
//! writer, filtered by a default level, explicit directives and `RUST_LOG`.
//!
//! Library crates never call into this crate; they emit events through `tracing` and leave
//! subscriber installation to the application entry point.
//!
//! ## Example
//!
//! ```rust
//! # use paw_logger::{Logger, LogFormat};
//! let dir = std::env::temp_dir().join("pawcalc-doc-logs");
//!
//! let _logger = Logger::builder()
//!     .name("pawcalc")
//!     .level(paw_logger::parse_level("debug").unwrap())
//!     .path(dir)
//!     .format(LogFormat::Json)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_RETENTION: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Line format of the rolling log files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`), ignoring case.
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(name: &str) -> Result<LevelFilter, LoggerError> {
    name.trim().parse().map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("unknown log level '{name}'").into(),
        context: Some("level".into()),
    })
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile(FileOutput);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

#[derive(Debug)]
struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    retention: usize,
    format: LogFormat,
}

impl FileOutput {
    /// Opens the rolling appender and returns its layer with the writer guard.
    fn open<S>(self, prefix: &str) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        if self.retention == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "at least one log file must be retained".into(),
                context: Some("max_files".into()),
            });
        }

        fs::create_dir_all(&self.directory)
            .context(format!("creating {}", self.directory.display()))?;

        let appender = RollingFileAppender::builder()
            .rotation(self.rotation)
            .filename_prefix(prefix)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(self.retention)
            .build(&self.directory)
            .context(format!("opening log files in {}", self.directory.display()))?;

        let (writer, guard) = tracing_appender::non_blocking(appender);
        Ok((file_layer(writer, self.format), guard))
    }
}

/// Builder for the global tracing subscriber.
///
/// A name is mandatory before [`LoggerBuilder::init`] becomes available; file-only options
/// (rotation, retention, format) unlock after [`LoggerBuilder::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    name: N,
    file: F,
    console: bool,
    level: LevelFilter,
    directives: Option<String>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the logger name, also used as the rolling file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder {
            name: WithName(name.into()),
            file: self.file,
            console: self.console,
            level: self.level,
            directives: self.directives,
        }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Number of rotated files kept on disk.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.file.0.retention = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.file.0.rotation = rotation;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.file.0.format = format;
        self
    }

    /// Shorthand for [`LogFormat::Json`] or [`LogFormat::Text`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(self, enabled: bool) -> Self {
        self.format(if enabled { LogFormat::Json } else { LogFormat::Text })
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Minimum level emitted when no directive matches.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Explicit filter directives (e.g., `paw_kernel=debug,config=warn`) used instead of `RUST_LOG`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Enables daily rolling file output in `directory`.
    pub fn path(self, directory: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        LoggerBuilder {
            name: self.name,
            file: WithFile(FileOutput {
                directory: directory.into(),
                rotation: Rotation::DAILY,
                retention: DEFAULT_RETENTION,
                format: LogFormat::Text,
            }),
            console: self.console,
            level: self.level,
            directives: self.directives,
        }
    }
}

impl LoggerBuilder<WithName, NoFile> {
    /// Installs the global subscriber with console output only.
    ///
    /// # Errors
    /// See [`LoggerBuilder::init`] on the file-enabled builder.
    pub fn init(self) -> Result<Logger, LoggerError> {
        install(&self.name.0, self.console, self.filter()?, None)
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Installs the global subscriber. Keep the returned [`Logger`] until shutdown: it owns the
    /// background writer of the file output.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, zero retention, bad directives
    ///   or no enabled output.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let filter = self.filter()?;
        install(&self.name.0, self.console, filter, Some(self.file.0))
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directives {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => builder.parse(directives).map_err(|e| {
                LoggerError::InvalidConfiguration {
                    message: e.to_string().into(),
                    context: Some(directives.clone().into()),
                }
            }),
        }
    }
}

fn install(
    name: &str,
    console: bool,
    filter: EnvFilter,
    file: Option<FileOutput>,
) -> Result<Logger, LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name cannot be blank".into(),
            context: None,
        });
    }
    if !console && file.is_none() {
        return Err(LoggerError::InvalidConfiguration {
            message: "enable console or file output".into(),
            context: None,
        });
    }

    let mut layers = Vec::new();
    if console {
        layers.push(fmt::layer().compact().with_ansi(true).boxed());
    }
    let guard = match file {
        Some(file) => {
            let (layer, guard) = file.open(name)?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry().with(filter).with(layers).try_init()?;

    Ok(Logger { guard })
}

fn file_layer<S>(writer: NonBlocking, format: LogFormat) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Handle to the installed logging system.
///
/// Dropping it flushes and stops the background file writer.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] with console output at `INFO`.
    ///
    /// ```rust
    /// use paw_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("pawcalc")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: NoName,
            file: NoFile,
            console: true,
            level: LevelFilter::INFO,
            directives: None,
        }
    }

    /// Whether file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}
