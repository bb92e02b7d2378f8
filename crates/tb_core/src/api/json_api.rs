//! JSON API: string in, string out.

use crate::balance::{balance, CANONICAL_SPLITS};
use crate::config::BalancerConfig;
use crate::error::{BalanceError, Result};
use crate::models::{Player, Split, ROSTER_SIZE};
use crate::SCHEMA_VERSION;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Balance request sent by a roster editor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BalanceRequest {
    pub schema_version: u8,
    /// Only the first ten players are balanced.
    pub players: Vec<Player>,
    /// Number of splits to return; falls back to the configured limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl BalanceRequest {
    pub fn new(players: Vec<Player>) -> Self {
        Self { schema_version: SCHEMA_VERSION, players, limit: None }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub schema_version: u8,
    /// Players received, including any past the tenth.
    pub roster_size: usize,
    /// Players actually balanced (10, or 0 for a short roster).
    pub considered: usize,
    /// Candidate splits scored before the cut.
    pub total_candidates: usize,
    pub options: Vec<Split>,
}

/// Balance a roster with the default configuration.
pub fn balance_json(request_json: &str) -> Result<String> {
    balance_json_with_config(request_json, &BalancerConfig::default())
}

/// Balance a roster, using `config.limit` when the request has no limit.
pub fn balance_json_with_config(request_json: &str, config: &BalancerConfig) -> Result<String> {
    let request: BalanceRequest = serde_json::from_str(request_json)?;
    let response = balance_request(&request, config)?;
    Ok(serde_json::to_string(&response)?)
}

pub fn balance_request(request: &BalanceRequest, config: &BalancerConfig) -> Result<BalanceResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(BalanceError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let limit = match request.limit {
        Some(0) => return Err(BalanceError::InvalidLimit(0)),
        Some(limit) => limit,
        None => {
            config.validate()?;
            config.limit
        }
    };

    let complete = request.players.len() >= ROSTER_SIZE;
    let options = balance(&request.players, limit);

    log::debug!(
        "Balance request: {} players, limit {}, {} options",
        request.players.len(),
        limit,
        options.len()
    );

    Ok(BalanceResponse {
        schema_version: SCHEMA_VERSION,
        roster_size: request.players.len(),
        considered: if complete { ROSTER_SIZE } else { 0 },
        total_candidates: if complete { CANONICAL_SPLITS } else { 0 },
        options,
    })
}

/// JSON Schema of [`BalanceRequest`].
pub fn request_schema_json() -> Result<String> {
    let schema = schemars::schema_for!(BalanceRequest);
    Ok(serde_json::to_string_pretty(&schema)?)
}
