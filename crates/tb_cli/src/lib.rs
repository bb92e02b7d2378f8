//! tb CLI library
//!
//! Reads a balance request (JSON) from a file or stdin, resolves the
//! balancer configuration and renders the response as text or JSON.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;
use tb_core::api::balance_request;
use tb_core::{BalanceRequest, BalanceResponse, BalancerConfig, Player, ROSTER_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Read a request from `input`, or from stdin when `None`.
pub fn load_request(input: Option<&Path>) -> Result<BalanceRequest> {
    let json = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read request from stdin")?;
            buf
        }
    };

    parse_request(&json)
}

pub fn parse_request(json: &str) -> Result<BalanceRequest> {
    serde_json::from_str(json).context("Failed to parse balance request JSON")
}

/// Config file (or `TB_BALANCER_CONFIG_PATH`), then the `--limit` override.
pub fn resolve_config(config_path: Option<&Path>, limit: Option<usize>) -> Result<BalancerConfig> {
    let mut config = match config_path {
        Some(path) => BalancerConfig::from_path(path)?,
        None => BalancerConfig::from_env()?,
    };

    if let Some(limit) = limit {
        config.limit = limit;
    }
    config.validate()?;

    Ok(config)
}

/// Run the balancer. A `--limit` given on the command line wins over the
/// request's own limit.
pub fn run_balance(
    mut request: BalanceRequest,
    config: &BalancerConfig,
    limit_override: Option<usize>,
) -> Result<BalanceResponse> {
    if limit_override.is_some() {
        request.limit = limit_override;
    }

    let response = balance_request(&request, config)?;
    tracing::info!(
        players = response.roster_size,
        options = response.options.len(),
        "balanced roster"
    );
    Ok(response)
}

pub fn render(response: &BalanceResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Text => Ok(render_text(response)),
    }
}

pub fn render_text(response: &BalanceResponse) -> String {
    let mut out = String::new();

    if response.considered == 0 {
        let _ = writeln!(
            out,
            "Need at least {} players to balance (got {}).",
            ROSTER_SIZE, response.roster_size
        );
        return out;
    }

    if response.roster_size > ROSTER_SIZE {
        let _ = writeln!(
            out,
            "Using the first {} of {} players.\n",
            ROSTER_SIZE, response.roster_size
        );
    }

    for (index, option) in response.options.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "Option {}", index + 1);
        render_group(&mut out, "Team A", &option.group_a, option.average_rank_a());
        render_group(&mut out, "Team B", &option.group_b, option.average_rank_b());
        let _ = writeln!(out, "  Coverage: {}/10", option.coverage);
        let _ = writeln!(out, "  Rank Difference: {}", option.rank_diff);
    }

    out
}

fn render_group(out: &mut String, label: &str, players: &[Player], average: f64) {
    let _ = writeln!(out, "  {} (avg {:.1})", label, average);
    for (slot, player) in players.iter().enumerate() {
        let _ = writeln!(
            out,
            "    {}: {} (Rank: {}) [{}]",
            slot + 1,
            player.name,
            player.rank,
            player.positions
        );
    }
}
