//! Logging setup.
//!
//! All diagnostics go through `tracing` and are written to stderr, so the
//! commands printed on stdout can be copied without log lines mixed in.
//!
//! ```rust,no_run
//! use restake_authz_ledger::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::new().with_debug(true).with_format(LogFormat::Compact);
//! init_logging(&config);
//! ```

pub mod format;

use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

pub use format::{CompactFormatter, TextFormatter};

/// Keeps the non-blocking file writer alive for the life of the process
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

static INITIALIZED: OnceLock<()> = OnceLock::new();

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `YYYY-MM-DD HH:MM:SS | LEVEL | target | message`
    Text,
    /// Newline-delimited JSON
    Json,
    /// `[LEVEL] message`
    #[default]
    Compact,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Compact => write!(f, "compact"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!(
                "Invalid log format '{}'. Valid options: text, json, compact",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// DEBUG instead of WARN
    pub debug: bool,
    /// Also write to a daily rolling file in `logging_dir`
    pub record_log: bool,
    /// Directory for log files (supports ~ for home directory)
    pub logging_dir: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            record_log: false,
            logging_dir: "~/.restake-authz-ledger/logs".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.record_log = enabled;
        self
    }

    pub fn with_logging_dir(mut self, dir: impl Into<String>) -> Self {
        self.logging_dir = dir.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `RESTAKE_DEBUG`: enable debug level (any value)
    /// - `RESTAKE_LOG_FORMAT`: text, json or compact
    /// - `RESTAKE_LOG_DIR`: enable file logging into this directory
    /// - `RUST_LOG`: standard tracing filter, takes precedence when set
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if std::env::var("RESTAKE_DEBUG").is_ok() {
            config.debug = true;
        }

        if let Ok(format) = std::env::var("RESTAKE_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                config.format = f;
            }
        }

        if let Ok(dir) = std::env::var("RESTAKE_LOG_DIR") {
            config.logging_dir = dir;
            config.record_log = true;
        }

        config
    }

    fn level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Expand ~ to home directory
    fn expand_path(&self) -> PathBuf {
        let path = &self.logging_dir;
        if let Some(stripped) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(path)
    }
}

/// Initialize the global subscriber. Only the first call has any effect.
pub fn init_logging(config: &LoggingConfig) {
    INITIALIZED.get_or_init(|| init_logging_internal(config));
}

pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}

fn init_logging_internal(config: &LoggingConfig) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!(
            "{},hyper=warn,hyper_util=warn,reqwest=warn,h2=warn",
            config.level()
        ))
    };

    let mut layers: Vec<BoxedLayer> = vec![layer_for(config.format, io::stderr, true)];

    if config.record_log {
        let log_dir = config.expand_path();
        match std::fs::create_dir_all(&log_dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(&log_dir, "restake-authz-ledger.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                layers.push(layer_for(config.format, non_blocking, false));
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to create log directory {:?}: {}",
                    log_dir, e
                );
            }
        }
    }

    let _ = tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init();
}

fn layer_for<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Text => fmt::layer()
            .event_format(TextFormatter)
            .with_writer(writer)
            .with_ansi(ansi)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .event_format(CompactFormatter)
            .with_writer(writer)
            .with_ansi(ansi)
            .boxed(),
    }
}
