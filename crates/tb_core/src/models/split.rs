use super::player::Player;
use serde::{Deserialize, Serialize};

/// One candidate partition of the roster into two squads of five.
///
/// Group labels carry no meaning; group A always holds the first roster
/// entry. Members keep their roster order within each group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub group_a: Vec<Player>,
    pub group_b: Vec<Player>,
    /// Distinct roles in group A plus distinct roles in group B (0..=10).
    pub coverage: u8,
    /// |sum(rank of A) - sum(rank of B)|
    pub rank_diff: u64,
    pub rank_sum_a: i64,
    pub rank_sum_b: i64,
    /// Bit `i` set means roster index `i` is in group A.
    pub mask: u16,
}

impl Split {
    pub fn average_rank_a(&self) -> f64 {
        average(self.rank_sum_a, self.group_a.len())
    }

    pub fn average_rank_b(&self) -> f64 {
        average(self.rank_sum_b, self.group_b.len())
    }

    /// Whether the named player landed in group A.
    pub fn in_group_a(&self, name: &str) -> bool {
        self.group_a.iter().any(|p| p.name == name)
    }
}

fn average(sum: i64, len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        sum as f64 / len as f64
    }
}
