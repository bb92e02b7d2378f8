//! Exhaustive 5v5 split search.
//!
//! Every canonical subset of the ten roster slots is scored by role
//! coverage and rank difference, then the list is stably sorted and cut to
//! the requested length. Ten players give exactly 126 candidates, so the
//! search is always complete.

mod balancer;
pub mod mask;
mod score;

pub use balancer::{all_splits, balance, Balancer, DEFAULT_LIMIT};
pub use mask::{canonical_masks, CANONICAL_SPLITS};
