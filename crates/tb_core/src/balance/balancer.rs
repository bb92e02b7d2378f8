use super::mask::{canonical_masks, CANONICAL_SPLITS};
use super::score::Candidate;
use crate::config::BalancerConfig;
use crate::models::{Player, Roster, Split, ROSTER_SIZE};

/// Number of splits returned when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: usize = 5;

/// Best `limit` splits of the first ten players.
///
/// Ordering is coverage descending, then rank difference ascending. Splits
/// that tie on both keep enumeration order (ascending mask), so the output
/// is fully determined by the roster order.
///
/// Fewer than ten players yields an empty list; entries past the tenth are
/// ignored.
pub fn balance(players: &[Player], limit: usize) -> Vec<Split> {
    let Some(active) = active_players(players) else {
        log::debug!("Roster has {} players, need {}; nothing to balance", players.len(), ROSTER_SIZE);
        return Vec::new();
    };

    let mut candidates = score_all(active);
    candidates.sort_by(|a, b| b.coverage.cmp(&a.coverage).then(a.rank_diff.cmp(&b.rank_diff)));

    if let Some(best) = candidates.first() {
        log::trace!(
            "Best split mask={:#012b} coverage={} rank_diff={}",
            best.mask,
            best.coverage,
            best.rank_diff
        );
    }
    log::debug!(
        "Scored {} candidate splits, returning {}",
        candidates.len(),
        limit.min(candidates.len())
    );

    candidates.into_iter().take(limit).map(|c| c.into_split(active)).collect()
}

/// Every canonical split in enumeration order, unsorted.
pub fn all_splits(players: &[Player]) -> Vec<Split> {
    match active_players(players) {
        Some(active) => score_all(active).into_iter().map(|c| c.into_split(active)).collect(),
        None => Vec::new(),
    }
}

fn active_players(players: &[Player]) -> Option<&[Player; ROSTER_SIZE]> {
    players.get(..ROSTER_SIZE)?.try_into().ok()
}

fn score_all(active: &[Player; ROSTER_SIZE]) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(CANONICAL_SPLITS);
    candidates.extend(canonical_masks().map(|mask| Candidate::score(active, mask)));
    candidates
}

/// Balancer bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct Balancer {
    config: BalancerConfig,
}

impl Balancer {
    pub fn new(config: BalancerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    pub fn balance(&self, roster: &Roster) -> Vec<Split> {
        if !roster.ignored().is_empty() {
            log::debug!("Ignoring {} players past the first {}", roster.ignored().len(), ROSTER_SIZE);
        }
        balance(roster.players(), self.config.limit)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::balance::mask::canonicalize;
    use crate::models::{Position, PositionSet};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn arb_player(index: usize) -> impl Strategy<Value = Player> {
        (-10_000i64..10_000, proptest::collection::vec(0usize..5, 0..6)).prop_map(
            move |(rank, roles)| {
                let positions: PositionSet = roles.into_iter().map(|r| Position::ALL[r]).collect();
                Player { name: format!("P{index}"), rank, positions }
            },
        )
    }

    fn arb_roster() -> impl Strategy<Value = Vec<Player>> {
        (0..ROSTER_SIZE).map(arb_player).collect::<Vec<_>>()
    }

    fn index_of(player: &Player) -> usize {
        player.name[1..].parse().unwrap()
    }

    proptest! {
        /// Property: output length is min(limit, 126)
        #[test]
        fn prop_length_is_min_of_limit(players in arb_roster(), limit in 1usize..200) {
            let splits = balance(&players, limit);
            prop_assert_eq!(splits.len(), limit.min(CANONICAL_SPLITS));
        }

        /// Property: groups are disjoint halves of the roster, consistent with the mask
        #[test]
        fn prop_groups_partition_roster(players in arb_roster()) {
            for split in balance(&players, CANONICAL_SPLITS) {
                prop_assert_eq!(split.group_a.len(), 5);
                prop_assert_eq!(split.group_b.len(), 5);

                let a: Vec<usize> = split.group_a.iter().map(index_of).collect();
                let b: Vec<usize> = split.group_b.iter().map(index_of).collect();
                prop_assert!(a.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(b.windows(2).all(|w| w[0] < w[1]));
                prop_assert_eq!(a[0], 0);

                let all: HashSet<usize> = a.iter().chain(b.iter()).copied().collect();
                prop_assert_eq!(all.len(), ROSTER_SIZE);

                let mask = a.iter().fold(0u16, |m, &i| m | (1 << i));
                prop_assert_eq!(mask, split.mask);
            }
        }

        /// Property: adjacent splits respect (coverage desc, rank_diff asc)
        #[test]
        fn prop_output_is_sorted(players in arb_roster()) {
            let splits = balance(&players, CANONICAL_SPLITS);
            for w in splits.windows(2) {
                prop_assert!(
                    w[0].coverage > w[1].coverage
                        || (w[0].coverage == w[1].coverage && w[0].rank_diff <= w[1].rank_diff)
                );
                if w[0].coverage == w[1].coverage && w[0].rank_diff == w[1].rank_diff {
                    prop_assert!(w[0].mask < w[1].mask);
                }
            }
        }

        /// Property: scores stay in bounds and match the groups
        #[test]
        fn prop_scores_match_groups(players in arb_roster()) {
            for split in balance(&players, CANONICAL_SPLITS) {
                prop_assert!(split.coverage <= 10);

                let sum_a: i64 = split.group_a.iter().map(|p| p.rank).sum();
                let sum_b: i64 = split.group_b.iter().map(|p| p.rank).sum();
                prop_assert_eq!(split.rank_diff, sum_a.abs_diff(sum_b));

                let cov = |group: &[Player]| {
                    group.iter().fold(PositionSet::EMPTY, |s, p| s.union(p.positions)).len()
                };
                prop_assert_eq!(split.coverage as usize, cov(split.group_a.as_slice()) + cov(split.group_b.as_slice()));
            }
        }

        /// Property: balance is idempotent
        #[test]
        fn prop_idempotent(players in arb_roster(), limit in 1usize..130) {
            prop_assert_eq!(balance(&players, limit), balance(&players, limit));
        }

        /// Property: every 5/5 partition appears exactly once
        #[test]
        fn prop_enumeration_complete(players in arb_roster()) {
            let masks: HashSet<u16> =
                balance(&players, CANONICAL_SPLITS).iter().map(|s| s.mask).collect();
            prop_assert_eq!(masks.len(), CANONICAL_SPLITS);

            for mask in 0u16..1 << ROSTER_SIZE {
                if mask.count_ones() == 5 {
                    prop_assert!(masks.contains(&canonicalize(mask)));
                }
            }
        }

        /// Property: short rosters never produce splits
        #[test]
        fn prop_short_roster_empty(players in arb_roster(), keep in 0usize..ROSTER_SIZE, limit in 1usize..200) {
            prop_assert!(balance(&players[..keep], limit).is_empty());
        }
    }
}
