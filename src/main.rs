//! Crash RGS Client — Entry Point
//!
//! Plays a single round against the configured RGS and prints the
//! resulting replay-safe round result as JSON.
//!
//! Wiring sequence:
//! 1. Load config.toml + env overrides (RGS_URL, RGS_PROTOCOL) + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Create RgsClient (HTTP + timeout + retry + session forwarding)
//! 4. Create RgsBetAdapter (implements BetPlacement port)
//! 5. Select outcome source per config (fixed placeholder or lookup table)
//! 6. Create InMemoryReplayStore
//! 7. Play one round from CLI args: <amount> [auto_cashout]
//! 8. Print the RoundResult JSON to stdout

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::outcome::{FixedMultiplierSource, LookupOutcomeSource, LookupTable};
use adapters::persistence::InMemoryReplayStore;
use adapters::rgs::{RgsBetAdapter, RgsClient, RgsClientConfig};
use config::OutcomeSourceKind;
use domain::round::{BetMode, BetRequest};
use ports::outcome_source::OutcomeSource;
use usecases::RoundService;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.client.log_level)
                }),
        )
        .json()
        .init();

    info!(
        name = %config.client.name,
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.client.environment,
        endpoint = %config.rgs.endpoint(),
        "Starting crash RGS client"
    );

    // ── 3. Parse CLI arguments: <amount> [auto_cashout] ─────
    let request = parse_request(std::env::args().skip(1))
        .context("Usage: crash-rgs-client <amount> [auto_cashout]")?;

    // ── 4. Create RGS HTTP client with timeout + retry ──────
    let rgs_config = RgsClientConfig {
        base_url: config.rgs.endpoint(),
        timeout: std::time::Duration::from_millis(config.rgs.timeout_ms),
        max_retries: config.rgs.max_retries,
        retry_base_delay: std::time::Duration::from_millis(config.rgs.retry_base_delay_ms),
    };
    let rgs_client = Arc::new(
        RgsClient::new(rgs_config).context("Failed to create RGS client")?,
    );

    // ── 5. Create bet adapter (BetPlacement port) ───────────
    let bets = RgsBetAdapter::new(Arc::clone(&rgs_client));

    // ── 6. Replay store (in-memory stub) ────────────────────
    let replay = InMemoryReplayStore::new();

    // ── 7. Wire the outcome source and play one round ───────
    let result = match config.outcome.source {
        OutcomeSourceKind::Fixed => {
            let outcome = FixedMultiplierSource::new(config.outcome.fixed_multiplier)
                .context("Invalid fixed multiplier")?;
            play_round(bets, outcome, replay, &config, &request).await?
        }
        OutcomeSourceKind::Lookup => {
            let path = config
                .outcome
                .lookup_table_path
                .as_deref()
                .context("lookup_table_path missing")?;
            let index = config.outcome.lookup_index.context("lookup_index missing")?;
            let table = LookupTable::from_json_file(path)
                .context("Failed to load lookup table")?;
            let outcome = LookupOutcomeSource::new(table, index)
                .context("Invalid lookup selection")?;
            play_round(bets, outcome, replay, &config, &request).await?
        }
    };

    // ── 8. Emit the round result ────────────────────────────
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Wire a round service for the chosen outcome source and play one round.
async fn play_round<O: OutcomeSource>(
    bets: RgsBetAdapter,
    outcome: O,
    replay: InMemoryReplayStore,
    config: &config::AppConfig,
    request: &BetRequest,
) -> Result<domain::round::RoundResult> {
    let service = RoundService::new(bets, outcome, replay, config.client.environment);
    service.play(request).await
}

/// Parse `<amount> [auto_cashout]` from the command line.
///
/// Real-money mode is the binary's default; demo play goes through the
/// library API.
fn parse_request(mut args: impl Iterator<Item = String>) -> Result<BetRequest> {
    let amount: f64 = args
        .next()
        .context("Missing bet amount")?
        .parse()
        .context("Bet amount must be a number")?;

    let auto_cashout = match args.next() {
        Some(raw) => Some(
            raw.parse::<f64>()
                .context("Auto cash-out must be a number")?,
        ),
        None => None,
    };

    let request = match auto_cashout {
        Some(threshold) => BetRequest::with_auto_cashout(amount, BetMode::Real, threshold),
        None => BetRequest::new(amount, BetMode::Real),
    };
    request.validate()?;
    Ok(request)
}
