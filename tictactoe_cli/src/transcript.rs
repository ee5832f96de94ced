use serde::{Deserialize, Serialize};
use tictactoe::{Position, Symbol};

/// Everything that happened in one game.
///
/// Nothing is written to disk; the finished transcript is logged as JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transcript {
    board_size: usize,
    moves: Vec<MoveRecord>,
    /// `None` while the game is running, and after a draw.
    winner: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: String,
    pub symbol: Symbol,
    pub position: Position,
}

impl Transcript {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            moves: Vec::new(),
            winner: None,
        }
    }

    pub fn record_move(&mut self, player: &str, symbol: Symbol, position: Position) {
        self.moves.push(MoveRecord {
            player: String::from(player),
            symbol,
            position,
        });
    }

    pub fn record_winner(&mut self, player: &str) {
        self.winner = Some(String::from(player));
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
