use rand::rngs::StdRng;
use tictactoe::{Board, Position, Symbol};

use crate::computer::Computer;
use crate::console::Console;
use crate::human::Human;

/// Something that can choose where to play next.
pub trait MoveProducer {
    /// Returns a position for which `board.is_valid_move()` holds.
    ///
    /// Implementations retry on their own until they have a valid move,
    /// so this only fails on I/O errors. There must be at least one empty
    /// cell on the board.
    fn make_move(&mut self, board: &Board, console: &mut dyn Console)
        -> anyhow::Result<Position>;
}

pub struct Player {
    pub name: String,
    pub symbol: Symbol,
    producer: Box<dyn MoveProducer>,
}

impl Player {
    pub fn new(name: &str, symbol: Symbol, producer: Box<dyn MoveProducer>) -> Self {
        Self {
            name: String::from(name),
            symbol,
            producer,
        }
    }

    /// The user at the terminal.
    pub fn human(symbol: Symbol) -> Self {
        Self::new("Player", symbol, Box::new(Human))
    }

    pub fn computer(symbol: Symbol, rng: StdRng) -> Self {
        Self::new("Computer", symbol, Box::new(Computer::new(rng)))
    }

    pub fn make_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> anyhow::Result<Position> {
        self.producer.make_move(board, console)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}
