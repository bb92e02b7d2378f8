use super::player::Player;
use serde::{Deserialize, Serialize};

/// Players considered for one balancing run.
pub const ROSTER_SIZE: usize = 10;
/// Players per squad.
pub const SQUAD_SIZE: usize = ROSTER_SIZE / 2;

/// Ordered list of players. Only the first [`ROSTER_SIZE`] entries are
/// ever balanced; order decides which half of a mirrored split is reported
/// as group A.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.players.len() >= ROSTER_SIZE
    }

    /// First ten players, or `None` while the roster is still short.
    pub fn active(&self) -> Option<&[Player; ROSTER_SIZE]> {
        self.players.get(..ROSTER_SIZE)?.try_into().ok()
    }

    /// Entries past the tenth, which the balancer ignores.
    pub fn ignored(&self) -> &[Player] {
        self.players.get(ROSTER_SIZE..).unwrap_or(&[])
    }
}

impl From<Vec<Player>> for Roster {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(n: usize) -> Roster {
        (0..n).map(|i| Player::flex(format!("P{i}"), 1000)).collect()
    }

    #[test]
    fn test_short_roster_has_no_active_set() {
        let roster = roster_of(9);
        assert!(!roster.is_complete());
        assert!(roster.active().is_none());
        assert!(roster.ignored().is_empty());
    }

    #[test]
    fn test_long_roster_truncates_to_first_ten() {
        let roster = roster_of(12);
        let active = roster.active().unwrap();
        assert_eq!(active.len(), ROSTER_SIZE);
        assert_eq!(active[9].name, "P9");
        assert_eq!(roster.ignored().len(), 2);
        assert_eq!(roster.ignored()[0].name, "P10");
    }
}
