//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_probe` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping failures to exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_probe::config::{CONNECTION_FAILURE_MESSAGE, USAGE_MESSAGE};
use site_probe::initialization::{init_crypto_provider, init_logger_with};
use site_probe::{run_probe, Config, LogFormat, LogLevel, NetDialer};

/// Probe a URL for cookies, redirects and password protection.
#[derive(Debug, Parser)]
#[command(name = "site_probe", version, about)]
struct Cli {
    /// URL to probe (scheme defaults to https)
    url: Option<String>,

    /// Anything after the URL is accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _extra: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(url) = cli.url else {
        println!("{USAGE_MESSAGE}");
        process::exit(1);
    };

    let config = Config {
        log_level: cli.log_level,
        log_format: cli.log_format,
        ..Default::default()
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    init_crypto_provider();

    let dialer = NetDialer::new(&config).context("Failed to initialize TLS connector")?;

    match run_probe(&dialer, &url, &mut std::io::stdout()).await {
        Ok(_) => Ok(()),
        Err(e) if e.is_connection_error() => {
            log::debug!("{e:#}");
            println!("{CONNECTION_FAILURE_MESSAGE}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("site_probe error: {e:#}");
            process::exit(1);
        }
    }
}
