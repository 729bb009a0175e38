//! Score transitions and game replay

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};
use crate::player::Player;
use crate::point::{FortyData, PointsData};
use crate::score::Score;

/// Result of a single point
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointResult {
    pub index: u32,
    pub winner: Player,
    pub score: Score,
    pub display: String,
}

/// Result of replaying a sequence of point winners
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub points: Vec<PointResult>,
    pub final_score: Score,
    /// Points played once the game was already won
    pub points_after_game: u32,
}

impl GameResult {
    pub fn winner(&self) -> Option<Player> {
        self.final_score.winner()
    }
}

/// Compute the score after `winner` takes the next point.
///
/// `current` is taken by value and never modified; the caller keeps its copy.
#[instrument(level = "trace")]
pub fn next_score(current: Score, winner: Player) -> Score {
    let next = match current {
        Score::Points(points) => score_when_points(points, winner),
        Score::Forty(forty) => score_when_forty(forty, winner),
        Score::Deuce => score_when_deuce(winner),
        Score::Advantage(player) => score_when_advantage(player, winner),
        Score::Game(player) => score_when_game(player),
    };
    debug!(from = %current, to = %next, ?winner, "score transition");
    next
}

/// Neither player at forty yet
pub fn score_when_points(points: PointsData, winner: Player) -> Score {
    match points.get(winner).next() {
        Some(point) => Score::Points(points.with(winner, point)),
        None => {
            trace!(?winner, "winner passes thirty");
            Score::Forty(FortyData::new(winner, points.get(winner.other())))
        }
    }
}

/// One player at forty
pub fn score_when_forty(forty: FortyData, winner: Player) -> Score {
    if winner == forty.player {
        return Score::Game(winner);
    }
    match forty.other_point.next() {
        Some(point) => Score::Forty(FortyData::new(forty.player, point)),
        // other player reaches forty too
        None => Score::Deuce,
    }
}

pub fn score_when_deuce(winner: Player) -> Score {
    Score::Advantage(winner)
}

pub fn score_when_advantage(advantaged: Player, winner: Player) -> Score {
    if winner == advantaged {
        Score::Game(winner)
    } else {
        Score::Deuce
    }
}

/// Game is over; further points change nothing.
pub fn score_when_game(player: Player) -> Score {
    Score::Game(player)
}

/// Replay a full sequence of point winners from love all
///
/// # Arguments
/// * `winners` - Winner of each point, in order
///
/// # Returns
/// Point-by-point scores and the final score
#[instrument(skip(winners), fields(points = winners.len()))]
pub fn play_game(winners: &[Player]) -> GameResult {
    let mut score = Score::initial();
    let mut points = Vec::with_capacity(winners.len());
    let mut points_after_game = 0u32;

    for (index, &winner) in winners.iter().enumerate() {
        if score.is_game() {
            points_after_game += 1;
        }
        score = next_score(score, winner);
        points.push(PointResult {
            index: index as u32,
            winner,
            score,
            display: score.to_string(),
        });
    }

    if points_after_game > 0 {
        debug!(points_after_game, "points played after game was won");
    }

    GameResult {
        points,
        final_score: score,
        points_after_game,
    }
}
