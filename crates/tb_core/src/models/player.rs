use super::position::{Position, PositionSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A roster entry: display name, skill rank (MMR or medal rank) and the
/// roles the player is willing to fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub name: String,
    pub rank: i64,
    pub positions: PositionSet,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        rank: i64,
        positions: impl IntoIterator<Item = Position>,
    ) -> Self {
        Self { name: name.into(), rank, positions: positions.into_iter().collect() }
    }

    /// A player listed for every role.
    pub fn flex(name: impl Into<String>, rank: i64) -> Self {
        Self { name: name.into(), rank, positions: PositionSet::FULL }
    }

    pub fn plays(&self, position: Position) -> bool {
        self.positions.contains(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_player_covers_all_roles() {
        let player = Player::flex("Puppey", 10300);
        assert_eq!(player.positions.len(), 5);
        assert!(Position::ALL.iter().all(|p| player.plays(*p)));
    }

    #[test]
    fn test_player_json_shape() {
        let player = Player::new("SumaiL", 11400, [Position::Two, Position::One]);
        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "SumaiL", "rank": 11400, "positions": ["1", "2"]})
        );
    }

    #[test]
    fn test_negative_rank_and_empty_positions_accepted() {
        let player: Player =
            serde_json::from_str(r#"{"name": "x", "rank": -50, "positions": []}"#).unwrap();
        assert_eq!(player.rank, -50);
        assert!(player.positions.is_empty());
    }
}
