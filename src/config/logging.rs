use std::env;
use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Where log output goes: always the console, plus a daily-rolled file when
/// `APP_LOG_FILE` is set. `LOG_LEVEL` accepts any `EnvFilter` directive
/// string, not just a plain level.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string()),
            app_log_file: env::var("APP_LOG_FILE").ok().map(PathBuf::from),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("LOG_LEVEL is not a valid filter: {0}")]
    BadFilter(String),

    #[error("could not set up log output: {0}")]
    Setup(String),
}

/// Install the global tracing subscriber. Call once, before anything logs.
pub fn init_logging() -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::BadFilter(format!("{}: {}", config.log_level, e)))?;

    let console = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter.clone());

    let registry = tracing_subscriber::registry().with(console);

    match &config.app_log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir).map_err(|e| LoggingError::Setup(e.to_string()))?;
            let file_name = path.file_name().ok_or_else(|| {
                LoggingError::Setup(format!("APP_LOG_FILE has no file name: {}", path.display()))
            })?;

            let file = fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, file_name))
                .with_ansi(false)
                .with_filter(filter);

            registry
                .with(file)
                .try_init()
                .map_err(|e| LoggingError::Setup(e.to_string()))
        }
        None => registry
            .try_init()
            .map_err(|e| LoggingError::Setup(e.to_string())),
    }
}
