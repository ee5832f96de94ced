use std::fmt::Write;

use crate::{Board, Cell};

const EMPTY_CELL: char = '-';

/// Renders the board with the column indices on top and the row index in
/// front of every row:
///
/// ```text
///     0   1   2
/// 0 | x | - | - |
/// 1 | - | o | - |
/// 2 | - | - | - |
/// ```
pub fn render_board(board: &Board) -> String {
    // Indices and cells are padded to the widest index
    let width = (board.size() - 1).to_string().len();

    let mut header = " ".repeat(width + 2);
    for j in 0..board.size() {
        let _ = write!(header, " {:>width$}  ", j);
    }
    let mut result = String::from(header.trim_end());

    for (i, row) in board.rows().enumerate() {
        let _ = write!(result, "\n{:>width$} |", i);
        for cell in row {
            let c = match cell {
                Cell::Empty => EMPTY_CELL,
                Cell::Marked(symbol) => symbol.as_char(),
            };
            let _ = write!(result, " {:>width$} |", c);
        }
    }
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render_board(self))
    }
}
