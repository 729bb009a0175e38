//! Tennis Logic
//!
//! Scoring of a single tennis game as a pure state machine.
//! This crate is compiled to:
//! - Native (for any match driver)
//! - WASM (for a browser scoreboard)

mod player;
mod point;
mod score;
mod game;

#[cfg(feature = "wasm")]
mod wasm;

pub use player::{other_player, parse_player, player_to_string, ParsePlayerError, Player};
pub use point::{point_to_string, FortyData, Point, PointsData};
pub use score::{initial_score, score_to_string, Score};
pub use game::{
    next_score, play_game, score_when_advantage, score_when_deuce, score_when_forty,
    score_when_game, score_when_points, GameResult, PointResult,
};
