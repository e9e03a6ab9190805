use numeral_normalizer::cli::{self, Command};
use numeral_normalizer::config::ServiceConfig;
use numeral_normalizer::error::{self, NormalizerError};
use numeral_normalizer::logging::{self, LogConfig};
use numeral_normalizer::server::{create_router, AppState};
use numeral_normalizer::services::NormalizerService;
use std::env;
use std::io::Read;

#[tokio::main]
async fn main() -> error::Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    let log_config = LogConfig::from_env();
    let _log_guard = logging::init_logging(&log_config)
        .map_err(|e| NormalizerError::InvalidConfig(format!("logging: {}", e)))?;

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = ServiceConfig::from_env();

    match cli::parse_args(&args)? {
        Command::Help => cli::print_help(),
        Command::Version => cli::print_version(),
        Command::Server { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            run_server(config).await?;
        }
        Command::Normalize {
            text,
            units,
            fold_width,
        } => {
            config.fold_width = config.fold_width && fold_width;
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            if text.trim().is_empty() {
                return Err(NormalizerError::EmptyText);
            }

            let normalizer = NormalizerService::new(&config);
            println!("{}", normalizer.normalize(&text, units.as_deref()));
        }
    }

    Ok(())
}

fn read_stdin() -> error::Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    // Drop the newline added by `echo`
    Ok(buffer.trim_end_matches(&['\r', '\n'][..]).to_string())
}

async fn run_server(config: ServiceConfig) -> error::Result<()> {
    logging::log_platform_info();

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        address = %addr,
        request_timeout_secs = config.request_timeout.as_secs(),
        extra_units = ?config.extra_units,
        fold_width = config.fold_width,
        "Server listening"
    );

    let app = create_router(AppState::from_config(&config));
    axum::serve(listener, app).await?;

    Ok(())
}
