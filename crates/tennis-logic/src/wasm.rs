//! WASM bindings for a browser scoreboard

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{next_score, parse_player, play_game, Player, Score};

/// Parse a JSON array of player identifiers, e.g. `["PLAYER_ONE", "PLAYER_TWO"]`.
fn parse_winners(json: &str) -> Result<Vec<Player>, String> {
    let raw: Vec<String> = serde_json::from_str(json)
        .map_err(|e| format!("Invalid winners: {}", e))?;
    raw.iter()
        .map(|text| parse_player(text).map_err(|e| e.to_string()))
        .collect()
}

fn parse_score(json: &str) -> Result<Score, JsError> {
    serde_json::from_str(json).map_err(|e| JsError::new(&format!("Invalid score: {}", e)))
}

/// Replay a game point by point
///
/// # Arguments
/// * `winners_json` - JSON array of `PLAYER_ONE` / `PLAYER_TWO`
///
/// # Returns
/// Serialized GameResult
#[wasm_bindgen]
pub fn replay_game(winners_json: &str) -> Result<JsValue, JsError> {
    let winners = parse_winners(winners_json).map_err(|e| JsError::new(&e))?;
    let result = play_game(&winners);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Score JSON at the start of a game
#[wasm_bindgen]
pub fn initial_score_json() -> Result<String, JsError> {
    serde_json::to_string(&Score::initial())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Apply one point to a score and return the new score JSON
#[wasm_bindgen]
pub fn next_score_json(score_json: &str, winner: &str) -> Result<String, JsError> {
    let score = parse_score(score_json)?;
    let winner = parse_player(winner).map_err(|e| JsError::new(&e.to_string()))?;

    serde_json::to_string(&next_score(score, winner))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Display string for a score JSON
#[wasm_bindgen]
pub fn render_score(score_json: &str) -> Result<String, JsError> {
    Ok(parse_score(score_json)?.to_string())
}

/// Display label for a player identifier
#[wasm_bindgen]
pub fn player_label(text: &str) -> Result<String, JsError> {
    parse_player(text)
        .map(|p| p.label().to_string())
        .map_err(|e| JsError::new(&e.to_string()))
}
