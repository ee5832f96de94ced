use rand::rngs::StdRng;
use rand::Rng;
use tictactoe::{Board, Position};
use tracing::{debug, trace};

use crate::console::Console;
use crate::player::MoveProducer;

/// Plays a random valid move.
///
/// Row and column are drawn independently and uniformly, and the pair is
/// drawn again until it hits an empty cell. On a board with `e` empty
/// cells this takes `size² / e` draws on average.
pub struct Computer {
    rng: StdRng,
}

impl Computer {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl MoveProducer for Computer {
    fn make_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> anyhow::Result<Position> {
        let size = board.size() as isize;
        let mut attempts: usize = 1;
        let pos = loop {
            let pos = Position::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
            if board.is_valid_move(pos) {
                break pos;
            }
            trace!(%pos, attempts, "Rejected sample");
            attempts += 1;
        };
        debug!(%pos, attempts, "Computer chose a move");
        console.say("Computer makes a move")?;
        Ok(pos)
    }
}
