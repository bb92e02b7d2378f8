//! Role labels and compact role sets.

use crate::error::BalanceError;
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed role labels (1 = carry ... 5 = hard support).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Position {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
}

impl Position {
    pub const ALL: [Position; 5] =
        [Position::One, Position::Two, Position::Three, Position::Four, Position::Five];

    /// Numeric label, 1..=5.
    pub fn number(self) -> u8 {
        match self {
            Position::One => 1,
            Position::Two => 2,
            Position::Three => 3,
            Position::Four => 4,
            Position::Five => 5,
        }
    }

    fn bit(self) -> u8 {
        1 << (self.number() - 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u8> for Position {
    type Error = BalanceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=5 => Ok(Position::ALL[(value - 1) as usize]),
            other => Err(BalanceError::InvalidPosition(other.to_string())),
        }
    }
}

impl TryFrom<char> for Position {
    type Error = BalanceError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_digit(10) {
            Some(d @ 1..=5) => Ok(Position::ALL[(d - 1) as usize]),
            _ => Err(BalanceError::InvalidPosition(value.to_string())),
        }
    }
}

impl FromStr for Position {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Position::try_from(c),
            _ => Err(BalanceError::InvalidPosition(trimmed.to_string())),
        }
    }
}

/// Set of positions stored as a 5-bit mask.
///
/// Inserting a position twice is a no-op, so `len()` always counts
/// distinct labels (0..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Position>", into = "Vec<Position>")]
pub struct PositionSet(u8);

impl PositionSet {
    pub const EMPTY: PositionSet = PositionSet(0);
    pub const FULL: PositionSet = PositionSet(0b1_1111);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, position: Position) {
        self.0 |= position.bit();
    }

    pub fn contains(self, position: Position) -> bool {
        self.0 & position.bit() != 0
    }

    pub fn union(self, other: PositionSet) -> PositionSet {
        PositionSet(self.0 | other.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Positions in ascending label order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = PositionSet::new();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl From<Vec<Position>> for PositionSet {
    fn from(positions: Vec<Position>) -> Self {
        positions.into_iter().collect()
    }
}

impl From<PositionSet> for Vec<Position> {
    fn from(set: PositionSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in self.iter() {
            write!(f, "{}", position)?;
        }
        Ok(())
    }
}

impl JsonSchema for PositionSet {
    fn schema_name() -> String {
        "PositionSet".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <Vec<Position>>::json_schema(gen)
    }
}
