//! Commands module
//!
//! Defines the CLI commands and their handlers. Every command renders into
//! terminal display targets and reports how each fetch ended.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use logfeed_core::domain::display::DisplayTarget;
use logfeed_core::domain::fetch::FetchState;
use std::sync::Arc;

use crate::config::Config;
use crate::display::TerminalTarget;
use crate::service::{FinalLogsFetcher, LogsFetcher, StreamingLogsFetcher, run_both};

/// Top-level CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Fetch the complete log as one JSON document
    Final,
    /// Stream the log chunk by chunk
    Stream,
    /// Run both fetches concurrently
    All,
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Whether every fetch rendered successfully
pub async fn handle_command(command: Commands, config: &Config) -> Result<bool> {
    let client = Arc::new(config.client());
    let final_fetcher = FinalLogsFetcher::new(client.clone());
    let streaming_fetcher = StreamingLogsFetcher::new(client, config.decode_mode);

    let states = match command {
        Commands::Final => vec![run_one(&final_fetcher).await],
        Commands::Stream => vec![run_one(&streaming_fetcher).await],
        Commands::All => {
            let final_target = TerminalTarget::stdout(final_fetcher.target_id());
            let streaming_target = TerminalTarget::stdout(streaming_fetcher.target_id());
            let (final_state, streaming_state) = run_both(
                &final_fetcher,
                &final_target,
                &streaming_fetcher,
                &streaming_target,
            )
            .await;
            println!();
            vec![
                (final_target.id().to_string(), final_state),
                (streaming_target.id().to_string(), streaming_state),
            ]
        }
    };

    for (id, state) in &states {
        print_outcome(id, *state);
    }

    Ok(states.iter().all(|(_, state)| *state == FetchState::Rendered))
}

/// Runs a single fetcher against its own stdout target
async fn run_one(fetcher: &dyn LogsFetcher) -> (String, FetchState) {
    let target = TerminalTarget::stdout(fetcher.target_id());
    let state = fetcher.run(&target).await;
    println!();
    (target.id().to_string(), state)
}

/// Print how a fetch ended
fn print_outcome(id: &str, state: FetchState) {
    let state_colored = match state {
        FetchState::Rendered => state.to_string().green(),
        FetchState::ErrorDisplayed => state.to_string().red(),
        _ => state.to_string().yellow(),
    };
    eprintln!("{} {}: {}", "▸".cyan(), id.dimmed(), state_colored);
}
