/// CLI argument parsing and help text
use crate::error::{NormalizerError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    /// Run the HTTP server; `port` overrides the configured one
    Server { port: Option<u16> },
    /// Normalize `text`, or stdin when no text was given
    Normalize {
        text: Option<String>,
        units: Option<String>,
        fold_width: bool,
    },
}

/// Parse arguments (without the program name).
///
/// Flags may appear anywhere; every other argument is joined with spaces
/// into the text to normalize.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut server = false;
    let mut port = None;
    let mut units = None;
    let mut fold_width = true;
    let mut words: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--server" => server = true,
            "--no-fold" => fold_width = false,
            "--port" => {
                let value = iter.next().ok_or_else(|| {
                    NormalizerError::InvalidConfig("--port requires a value".to_string())
                })?;
                let parsed = value.parse::<u16>().map_err(|_| {
                    NormalizerError::InvalidConfig(format!("invalid port: {}", value))
                })?;
                port = Some(parsed);
            }
            "--units" => {
                let value = iter.next().ok_or_else(|| {
                    NormalizerError::InvalidConfig("--units requires a value".to_string())
                })?;
                units = Some(value.clone());
            }
            word => words.push(word),
        }
    }

    if server {
        return Ok(Command::Server { port });
    }

    let text = if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    };

    Ok(Command::Normalize {
        text,
        units,
        fold_width,
    })
}

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Numeral Normalizer v{}", version);
    println!("Spells out Arabic numerals in Chinese text for speech synthesis");
    println!();
    println!("USAGE:");
    println!("    numeral_normalizer [OPTIONS] [TEXT]");
    println!();
    println!("OPTIONS:");
    println!("    --units <LIST>        Extra comma-separated units (e.g. \"公里,克\")");
    println!("    --no-fold             Do not fold full-width digits and symbols");
    println!("    --server              Start HTTP server mode");
    println!("    --port <PORT>         Server port (default: 3000)");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Normalize text given as arguments");
    println!("    numeral_normalizer \"增长率50.68%\"");
    println!();
    println!("    # Normalize stdin with an extra unit");
    println!("    echo \"跑了10公里\" | numeral_normalizer --units 公里");
    println!();
    println!("    # Start server on custom port");
    println!("    numeral_normalizer --server --port 8080");
    println!();
    println!("SERVER ENDPOINTS:");
    println!("    POST   /normalize    - Normalize {{\"text\": ..., \"units\": ...}}");
    println!("    GET    /units        - List recognized units");
    println!("    GET    /health       - Health check");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    NORMALIZER_PORT                  - Server port (default: 3000)");
    println!("    NORMALIZER_EXTRA_UNITS           - Units added to every call");
    println!("    NORMALIZER_FOLD_WIDTH            - Fold full-width characters (default: true)");
    println!("    REQUEST_TIMEOUT_SECONDS          - Request timeout in seconds (default: 30)");
    println!("    NORMALIZER_LOG_DIR               - Directory for JSON log files");
    println!("    NORMALIZER_FILE_LOG_LEVEL        - File log level (default: debug)");
    println!("    LOG_FORMAT                       - Console log format (compact/pretty/json)");
    println!("    RUST_LOG                         - Console log level (error/warn/info/debug/trace)");
    println!();
    println!("Settings can also be placed in a .env file in the working directory.");
}

pub fn print_version() {
    println!("Numeral Normalizer v{}", env!("CARGO_PKG_VERSION"));
}
