use tictactoe::{Board, Position};
use tracing::debug;

use crate::console::{ask_integer, Console};
use crate::player::MoveProducer;

/// Reads the move from the console.
pub struct Human;

impl MoveProducer for Human {
    fn make_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> anyhow::Result<Position> {
        loop {
            let row = ask_integer(console, "Please enter a row number: ")?;
            let col = ask_integer(console, "Please enter a column number: ")?;
            let pos = Position::new(row, col);
            match board.check_move(pos) {
                Ok(()) => return Ok(pos),
                Err(err) => {
                    // The user isn't told whether the cell is taken or off the board
                    debug!(%pos, %err, "Rejected move");
                    console.say("That cell is not available, please try again")?;
                }
            }
        }
    }
}
