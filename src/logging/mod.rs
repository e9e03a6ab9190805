pub mod config;
pub mod middleware;

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

pub use config::{LogConfig, LogFormat};
pub use middleware::{access_log_middleware, request_id_middleware, RequestId};

/// Initialize console logging plus, when a log directory is configured, a
/// daily-rolling JSON log file.
///
/// Console output goes to stderr so CLI mode can print normalized text on
/// stdout. The returned guard flushes the file writer on drop and must be
/// held for the life of the process.
pub fn init_logging(
    config: &LogConfig,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let console_filter = EnvFilter::new(&config.console_log_level);
    let console_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
    };

    let (file_layer, guard) = match config.log_dir.as_deref() {
        Some(dir) => {
            let log_dir = ensure_log_directory(Path::new(dir))?;
            let appender = tracing_appender::rolling::daily(&log_dir, "normalizer.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new(&config.file_log_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    if let Some(dir) = config.log_dir.as_deref() {
        tracing::info!(log_dir = %dir, "File logging enabled");
    }

    Ok(guard)
}

/// Create the log directory if needed and return its path
pub fn ensure_log_directory(dir: &Path) -> Result<PathBuf, std::io::Error> {
    fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

/// Log platform-specific information on startup
pub fn log_platform_info() {
    tracing::info!(
        platform = std::env::consts::OS,
        architecture = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "Normalizer starting"
    );
}
