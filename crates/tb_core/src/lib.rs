//! # tb_core - Deterministic 5v5 Team Balancer
//!
//! Splits a ten-player roster into two squads of five, scoring every
//! candidate split by role coverage and rank balance.
//!
//! ## Features
//! - Exhaustive search over all 126 distinct 5/5 partitions
//! - 100% deterministic ordering (same roster = same result)
//! - JSON API for easy integration with frontends and scripts
//!
//! ```rust
//! use tb_core::{balance, Player, Position};
//!
//! let roster: Vec<Player> = (0..10)
//!     .map(|i| Player::new(format!("P{i}"), 1000 + i, [Position::ALL[i as usize % 5]]))
//!     .collect();
//!
//! let splits = balance(&roster, 3);
//! assert_eq!(splits.len(), 3);
//! assert!(splits[0].coverage >= splits[1].coverage);
//! ```

pub mod api;
pub mod balance;
pub mod config;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{
    balance_json, balance_json_with_config, request_schema_json, BalanceRequest, BalanceResponse,
};
pub use balance::{all_splits, balance, canonical_masks, Balancer, DEFAULT_LIMIT};
pub use config::BalancerConfig;
pub use error::{BalanceError, Result};
pub use models::{Player, Position, PositionSet, Roster, Split, ROSTER_SIZE, SQUAD_SIZE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
