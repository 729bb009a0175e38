//! The two competitors of a game

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// One of the two players in a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Both players, player one first
    pub const ALL: [Player; 2] = [Player::PlayerOne, Player::PlayerTwo];

    /// Returns the opponent.
    pub fn other(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Human-readable name used in score displays.
    pub fn label(self) -> &'static str {
        match self {
            Player::PlayerOne => "Player 1",
            Player::PlayerTwo => "Player 2",
        }
    }

    /// Canonical identifier accepted by [`parse_player`].
    pub fn as_str(self) -> &'static str {
        match self {
            Player::PlayerOne => "PLAYER_ONE",
            Player::PlayerTwo => "PLAYER_TWO",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text does not name a player.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum ParsePlayerError {
    /// Text is not one of the canonical identifiers.
    #[display("invalid player: {:?}", _0)]
    InvalidPlayer(String),
}

impl std::error::Error for ParsePlayerError {}

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLAYER_ONE" => Ok(Player::PlayerOne),
            "PLAYER_TWO" => Ok(Player::PlayerTwo),
            other => {
                warn!(text = other, "rejected player identifier");
                Err(ParsePlayerError::InvalidPlayer(other.to_string()))
            }
        }
    }
}

/// Parse a canonical player identifier (`PLAYER_ONE` or `PLAYER_TWO`).
pub fn parse_player(text: &str) -> Result<Player, ParsePlayerError> {
    text.parse()
}

/// Returns the opponent of `player`.
pub fn other_player(player: Player) -> Player {
    player.other()
}

pub fn player_to_string(player: Player) -> String {
    player.label().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_labels() {
        assert_eq!(player_to_string(Player::PlayerOne), "Player 1");
        assert_eq!(player_to_string(Player::PlayerTwo), "Player 2");
        assert_eq!(Player::PlayerTwo.to_string(), "Player 2");
    }

    #[test]
    fn test_other_player() {
        assert_eq!(other_player(Player::PlayerOne), Player::PlayerTwo);
        assert_eq!(other_player(Player::PlayerTwo), Player::PlayerOne);
    }

    #[test]
    fn test_other_is_involution() {
        for p in Player::ALL {
            assert_eq!(p.other().other(), p);
            assert_ne!(p.other(), p);
        }
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(parse_player("PLAYER_ONE"), Ok(Player::PlayerOne));
        assert_eq!(parse_player("PLAYER_TWO"), Ok(Player::PlayerTwo));
        for p in Player::ALL {
            assert_eq!(parse_player(p.as_str()), Ok(p));
        }
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for text in ["INVALID", "", "player_one", "Player 1", " PLAYER_ONE", "PLAYER_THREE"] {
            assert_eq!(
                parse_player(text),
                Err(ParsePlayerError::InvalidPlayer(text.to_string())),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_parse_error_message() {
        let err = parse_player("INVALID").unwrap_err();
        assert_eq!(err.to_string(), "invalid player: \"INVALID\"");
    }

    #[test]
    fn test_serde_uses_canonical_identifier() {
        let json = serde_json::to_string(&Player::PlayerTwo).unwrap();
        assert_eq!(json, "\"PLAYER_TWO\"");
        let back: Player = serde_json::from_str("\"PLAYER_ONE\"").unwrap();
        assert_eq!(back, Player::PlayerOne);
        assert!(serde_json::from_str::<Player>("\"INVALID\"").is_err());
    }
}
