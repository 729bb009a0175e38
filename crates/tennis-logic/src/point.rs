//! Point values held below forty

use serde::{Deserialize, Serialize};
use crate::player::Player;

/// A player's point value while neither side has reached forty
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Point {
    Love,
    Fifteen,
    Thirty,
}

impl Point {
    /// The point after this one, or `None` after thirty (the score moves to forty).
    pub fn next(self) -> Option<Point> {
        match self {
            Point::Love => Some(Point::Fifteen),
            Point::Fifteen => Some(Point::Thirty),
            Point::Thirty => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Point::Love => "Love",
            Point::Fifteen => "Fifteen",
            Point::Thirty => "Thirty",
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn point_to_string(point: Point) -> String {
    point.label().to_string()
}

/// Points of both players, one slot each
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointsData {
    pub player_one: Point,
    pub player_two: Point,
}

impl PointsData {
    pub fn new(player_one: Point, player_two: Point) -> Self {
        Self { player_one, player_two }
    }

    /// Points held by `player`
    pub fn get(&self, player: Player) -> Point {
        match player {
            Player::PlayerOne => self.player_one,
            Player::PlayerTwo => self.player_two,
        }
    }

    /// Copy with `player`'s slot replaced
    pub fn with(self, player: Player, point: Point) -> Self {
        match player {
            Player::PlayerOne => Self { player_one: point, ..self },
            Player::PlayerTwo => Self { player_two: point, ..self },
        }
    }
}

impl Default for PointsData {
    fn default() -> Self {
        Self::new(Point::Love, Point::Love)
    }
}

/// One player at forty, the other still below
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FortyData {
    pub player: Player,
    pub other_point: Point,
}

impl FortyData {
    pub fn new(player: Player, other_point: Point) -> Self {
        Self { player, other_point }
    }
}
