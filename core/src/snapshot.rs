use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: Coord,
    pub col: Coord,
}

impl From<Coord2> for Position {
    fn from((row, col): Coord2) -> Self {
        Self { row, col }
    }
}

/// Read-only view of everything a renderer needs, serialized with camelCase keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub board: Vec<Vec<Option<Gem>>>,
    pub score: u32,
    pub moves: u32,
    pub level: u32,
    pub stars: u8,
    pub target: Target,
    pub game_state: GameState,
    pub selected_gem: Option<Position>,
    pub animating_gems: Vec<GemId>,
    pub combo: u32,
}

impl Snapshot {
    pub fn from_engine<S: GemSource>(engine: &MatchEngine<S>) -> Self {
        Self {
            board: engine.board().rows(),
            score: engine.score(),
            moves: engine.moves(),
            level: engine.level(),
            stars: engine.stars(),
            target: engine.target(),
            game_state: engine.state(),
            selected_gem: engine.selected().map(Position::from),
            animating_gems: engine.animating_gems().collect(),
            combo: engine.combo(),
        }
    }
}
