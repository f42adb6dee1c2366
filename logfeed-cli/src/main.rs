//! Logfeed CLI
//!
//! Demonstrates two ways of consuming a log endpoint: waiting for the whole
//! JSON document, or rendering a chunked text stream as it arrives.
//!
//! Rendered content goes to stdout; diagnostics go to stderr through
//! `tracing`, filtered by `RUST_LOG`.

mod commands;
mod config;
mod display;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use service::DecodeMode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "logfeed")]
#[command(about = "Fetch logs in one piece or as a live stream", long_about = None)]
struct Cli {
    /// Log server URL
    #[arg(long, env = "LOGFEED_BASE_URL", default_value = logfeed_client::DEFAULT_BASE_URL)]
    base_url: String,

    /// Path of the buffered endpoint
    #[arg(long, env = "LOGFEED_FINAL_PATH", default_value = logfeed_client::FINAL_LOGS_PATH)]
    final_path: String,

    /// Path of the streaming endpoint
    #[arg(long, env = "LOGFEED_STREAM_PATH", default_value = logfeed_client::STREAM_LOGS_PATH)]
    stream_path: String,

    /// Treat non-2xx responses as failures
    #[arg(
        long,
        env = "LOGFEED_STRICT_STATUS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    strict_status: bool,

    /// How characters split across streamed chunks are decoded
    #[arg(long, env = "LOGFEED_DECODE", value_enum, default_value_t = DecodeMode::PerChunk)]
    decode: DecodeMode,

    /// What to fetch; both endpoints when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logfeed=info,logfeed_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_url: cli.base_url,
        final_logs_path: cli.final_path,
        stream_logs_path: cli.stream_path,
        strict_status: cli.strict_status,
        decode_mode: cli.decode,
    };
    config.validate().context("Invalid configuration")?;

    tracing::debug!("Using log server at {}", config.base_url);

    let all_rendered = handle_command(cli.command.unwrap_or(Commands::All), &config).await?;
    if !all_rendered {
        std::process::exit(1);
    }

    Ok(())
}
