//! Score of a single game and its display

use serde::{Deserialize, Serialize};
use crate::player::Player;
use crate::point::{FortyData, PointsData};

/// Every reachable score of a game
///
/// Forty is a variant rather than a fourth [`Point`](crate::Point), so a
/// "Forty - Forty" score cannot be built; both players at forty is `Deuce`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    /// Neither player has reached forty.
    Points(PointsData),
    /// One player has forty, the other is below.
    Forty(FortyData),
    /// Both at forty or above, tied.
    Deuce,
    /// Player leads by one at forty or above.
    Advantage(Player),
    /// Player has won the game. Terminal.
    Game(Player),
}

impl Score {
    /// Love all
    pub fn initial() -> Self {
        Score::Points(PointsData::default())
    }

    pub fn is_game(&self) -> bool {
        matches!(self, Score::Game(_))
    }

    /// The game winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Score::Game(player) => Some(*player),
            _ => None,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Points(points) => write!(f, "{} - {}", points.player_one, points.player_two),
            Score::Forty(forty) => match forty.player {
                Player::PlayerOne => write!(f, "Forty - {}", forty.other_point),
                Player::PlayerTwo => write!(f, "{} - Forty", forty.other_point),
            },
            Score::Deuce => f.write_str("Deuce"),
            Score::Advantage(player) => write!(f, "Advantage {}", player),
            Score::Game(player) => write!(f, "Game {}", player),
        }
    }
}

/// Score at the start of a game.
pub fn initial_score() -> Score {
    Score::initial()
}

pub fn score_to_string(score: &Score) -> String {
    score.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn test_points_render_player_one_first() {
        let score = Score::Points(PointsData::new(Point::Love, Point::Fifteen));
        assert_eq!(score_to_string(&score), "Love - Fifteen");
        let score = Score::Points(PointsData::new(Point::Thirty, Point::Love));
        assert_eq!(score_to_string(&score), "Thirty - Love");
    }

    #[test]
    fn test_forty_column_order() {
        let p1 = Score::Forty(FortyData::new(Player::PlayerOne, Point::Fifteen));
        assert_eq!(p1.to_string(), "Forty - Fifteen");
        let p2 = Score::Forty(FortyData::new(Player::PlayerTwo, Point::Love));
        assert_eq!(p2.to_string(), "Love - Forty");
    }

    #[test]
    fn test_terminal_and_tied_renderings() {
        assert_eq!(Score::Deuce.to_string(), "Deuce");
        assert_eq!(Score::Advantage(Player::PlayerTwo).to_string(), "Advantage Player 2");
        assert_eq!(Score::Game(Player::PlayerOne).to_string(), "Game Player 1");
    }

    #[test]
    fn test_initial_score() {
        assert_eq!(initial_score(), Score::Points(PointsData::new(Point::Love, Point::Love)));
        assert_eq!(Score::default(), initial_score());
        assert_eq!(initial_score().to_string(), "Love - Love");
    }

    #[test]
    fn test_winner() {
        assert_eq!(Score::Game(Player::PlayerTwo).winner(), Some(Player::PlayerTwo));
        assert!(Score::Game(Player::PlayerTwo).is_game());
        assert_eq!(Score::Deuce.winner(), None);
        assert!(!Score::Advantage(Player::PlayerOne).is_game());
    }

    #[test]
    fn test_serde_shape() {
        let score = Score::Forty(FortyData::new(Player::PlayerOne, Point::Thirty));
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, r#"{"Forty":{"player":"PLAYER_ONE","other_point":"Thirty"}}"#);
        let back: Score = serde_json::from_str(&json).unwrap();
        assert_eq!(back, score);
        assert_eq!(serde_json::to_string(&Score::Deuce).unwrap(), r#""Deuce""#);
    }
}
