use super::mask::partition;
use crate::models::{Player, PositionSet, Split, ROSTER_SIZE, SQUAD_SIZE};

/// Score of one canonical mask, computed on indices only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub mask: u16,
    pub coverage: u8,
    pub rank_diff: u64,
    pub rank_sum_a: i64,
    pub rank_sum_b: i64,
}

impl Candidate {
    pub fn score(roster: &[Player; ROSTER_SIZE], mask: u16) -> Self {
        let (group_a, group_b) = partition(mask);

        let coverage = coverage_of(roster, &group_a) + coverage_of(roster, &group_b);
        let sum_a = rank_sum(roster, &group_a);
        let sum_b = rank_sum(roster, &group_b);

        Self {
            mask,
            coverage,
            rank_diff: u64::try_from((sum_a - sum_b).unsigned_abs()).unwrap_or(u64::MAX),
            rank_sum_a: saturate(sum_a),
            rank_sum_b: saturate(sum_b),
        }
    }

    pub fn into_split(self, roster: &[Player; ROSTER_SIZE]) -> Split {
        let (group_a, group_b) = partition(self.mask);
        Split {
            group_a: group_a.iter().map(|&i| roster[i].clone()).collect(),
            group_b: group_b.iter().map(|&i| roster[i].clone()).collect(),
            coverage: self.coverage,
            rank_diff: self.rank_diff,
            rank_sum_a: self.rank_sum_a,
            rank_sum_b: self.rank_sum_b,
            mask: self.mask,
        }
    }
}

/// Distinct roles across a group (0..=5).
pub(crate) fn coverage_of(roster: &[Player; ROSTER_SIZE], group: &[usize; SQUAD_SIZE]) -> u8 {
    group
        .iter()
        .fold(PositionSet::EMPTY, |covered, &i| covered.union(roster[i].positions))
        .len() as u8
}

fn rank_sum(roster: &[Player; ROSTER_SIZE], group: &[usize; SQUAD_SIZE]) -> i128 {
    group.iter().map(|&i| roster[i].rank as i128).sum()
}

fn saturate(sum: i128) -> i64 {
    i64::try_from(sum).unwrap_or(if sum < 0 { i64::MIN } else { i64::MAX })
}
