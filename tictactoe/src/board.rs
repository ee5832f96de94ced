use crate::{Cell, IllegalMove, Position, Symbol};

/// A square board of `size` x `size` cells.
///
/// Cells only ever go from [`Cell::Empty`] to [`Cell::Marked`], never back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    // It's in row-major order, i.e. indexed by [row * size + col].
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// Panics if `size` is zero, or so large that the number of cells
    /// overflows.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        let num_cells = size
            .checked_mul(size)
            .expect("Number of cells overflows usize");
        Self {
            size,
            cells: vec![Cell::Empty; num_cells],
        }
    }

    /// The length of a side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// How many moves fit on the board. Once that many moves have been
    /// played without a win, the game is a draw.
    pub fn total_moves(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell at `pos`, or `None` if `pos` is out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        let idx = self.arr_idx(pos)?;
        Some(self.cells[idx])
    }

    /// Checks whether a symbol may be placed at `pos`.
    pub fn check_move(&self, pos: Position) -> Result<(), IllegalMove> {
        let idx = self
            .arr_idx(pos)
            .ok_or(IllegalMove::OutOfBounds { size: self.size })?;
        match self.cells[idx] {
            Cell::Empty => Ok(()),
            Cell::Marked(by) => Err(IllegalMove::Occupied { by }),
        }
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.check_move(pos).is_ok()
    }

    /// Puts `symbol` on the cell at `pos`.
    ///
    /// This does not validate the move, call [`Self::is_valid_move()`] first.
    /// Panics if `pos` is out of bounds.
    pub fn place_move(&mut self, pos: Position, symbol: Symbol) {
        debug_assert!(self.is_valid_move(pos), "Invalid move at {}", pos);
        let idx = self.arr_idx(pos).unwrap();
        self.cells[idx] = Cell::Marked(symbol);
    }

    /// Did placing `symbol` at `pos` complete a line?
    ///
    /// A new line can only be completed by the most recent move, so this only
    /// looks at the row, the column and (where `pos` lies on them) the two
    /// diagonals through `pos`. Each line is abandoned at the first cell that
    /// does not hold `symbol`.
    pub fn check_win(&self, pos: Position, symbol: Symbol) -> bool {
        let Some((row, col)) = self.local_coords(pos) else {
            return false;
        };
        let last = self.size - 1;

        self.line_is_complete((0..self.size).map(|j| (row, j)), symbol)
            || self.line_is_complete((0..self.size).map(|i| (i, col)), symbol)
            || (row == col && self.line_is_complete((0..self.size).map(|i| (i, i)), symbol))
            || (row + col == last
                && self.line_is_complete((0..self.size).map(|i| (i, last - i)), symbol))
    }

    /// The cells, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    fn line_is_complete(
        &self,
        mut line: impl Iterator<Item = (usize, usize)>,
        symbol: Symbol,
    ) -> bool {
        line.all(|(i, j)| self.cells[i * self.size + j] == Cell::Marked(symbol))
    }

    // Bounds check for a position. This is the only place where player
    // input is turned into indices.
    fn local_coords(&self, pos: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(pos.row).ok().filter(|&i| i < self.size)?;
        let col = usize::try_from(pos.col).ok().filter(|&j| j < self.size)?;
        Some((row, col))
    }

    fn arr_idx(&self, pos: Position) -> Option<usize> {
        let (row, col) = self.local_coords(pos)?;
        Some(row * self.size + col)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{Placements, Probe};

    fn play(board: &mut Board, moves: &[(isize, isize, Symbol)]) {
        for &(i, j, symbol) in moves {
            let pos = Position::new(i, j);
            assert!(board.is_valid_move(pos));
            board.place_move(pos, symbol);
        }
    }

    // Reference implementation: materialize every line through `pos` and
    // compare all of its cells.
    fn completes_line_through(board: &Board, pos: Position, symbol: Symbol) -> bool {
        let n = board.size() as isize;
        let mut lines: Vec<Vec<Position>> = vec![
            (0..n).map(|j| Position::new(pos.row, j)).collect(),
            (0..n).map(|i| Position::new(i, pos.col)).collect(),
        ];
        if pos.row == pos.col {
            lines.push((0..n).map(|i| Position::new(i, i)).collect());
        }
        if pos.row + pos.col == n - 1 {
            lines.push((0..n).map(|i| Position::new(i, n - 1 - i)).collect());
        }
        lines.iter().any(|line| {
            line.iter()
                .all(|&p| board.get(p) == Some(Cell::Marked(symbol)))
        })
    }

    quickcheck! {
        fn check_win_matches_full_line_scan(input: Placements) -> bool {
            let mut board = Board::new(input.size);
            for &(pos, symbol) in &input.moves {
                board.place_move(pos, symbol);
                if board.check_win(pos, symbol) != completes_line_through(&board, pos, symbol) {
                    return false;
                }
            }
            true
        }

        fn placed_cells_never_revert(input: Placements) -> bool {
            let mut board = Board::new(input.size);
            for (k, &(pos, symbol)) in input.moves.iter().enumerate() {
                if !board.is_valid_move(pos) {
                    return false;
                }
                board.place_move(pos, symbol);
                let all_still_there = input.moves[..=k]
                    .iter()
                    .all(|&(p, s)| board.get(p) == Some(Cell::Marked(s)) && !board.is_valid_move(p));
                if !all_still_there {
                    return false;
                }
            }
            true
        }

        fn valid_iff_in_bounds_and_empty(input: Placements, probe: Probe) -> bool {
            let mut board = Board::new(input.size);
            for &(pos, symbol) in &input.moves {
                board.place_move(pos, symbol);
            }
            let n = input.size as isize;
            let pos = probe.0;
            let in_bounds = (0..n).contains(&pos.row) && (0..n).contains(&pos.col);
            let expected = in_bounds && board.get(pos) == Some(Cell::Empty);
            board.is_valid_move(pos) == expected
        }
    }

    #[test]
    fn row_win() {
        let mut board = Board::new(3);
        play(
            &mut board,
            &[
                (0, 0, Symbol::X),
                (1, 1, Symbol::O),
                (0, 1, Symbol::X),
                (2, 2, Symbol::O),
            ],
        );
        assert!(!board.check_win(Position::new(0, 1), Symbol::X));
        play(&mut board, &[(0, 2, Symbol::X)]);
        assert!(board.check_win(Position::new(0, 2), Symbol::X));
        assert!(!board.check_win(Position::new(0, 2), Symbol::O));
    }

    #[test]
    fn column_win() {
        let mut board = Board::new(4);
        play(
            &mut board,
            &[
                (0, 3, Symbol::O),
                (1, 3, Symbol::O),
                (3, 3, Symbol::O),
                (2, 0, Symbol::X),
            ],
        );
        assert!(!board.check_win(Position::new(3, 3), Symbol::O));
        play(&mut board, &[(2, 3, Symbol::O)]);
        assert!(board.check_win(Position::new(2, 3), Symbol::O));
    }

    #[test]
    fn main_diagonal_win() {
        let mut board = Board::new(3);
        play(
            &mut board,
            &[
                (0, 0, Symbol::X),
                (0, 1, Symbol::O),
                (1, 1, Symbol::X),
                (1, 0, Symbol::O),
                (2, 2, Symbol::X),
            ],
        );
        assert!(board.check_win(Position::new(2, 2), Symbol::X));
    }

    #[test]
    fn anti_diagonal_win() {
        let mut board = Board::new(3);
        play(
            &mut board,
            &[
                (0, 2, Symbol::X),
                (0, 0, Symbol::O),
                (1, 1, Symbol::X),
                (2, 2, Symbol::O),
                (2, 0, Symbol::X),
            ],
        );
        assert!(board.check_win(Position::new(2, 0), Symbol::X));
    }

    #[test]
    fn diagonals_are_only_checked_through_their_cells() {
        // (0, 1) is on neither diagonal, so the complete main diagonal must
        // not count for it.
        let mut board = Board::new(3);
        play(
            &mut board,
            &[
                (0, 0, Symbol::X),
                (1, 1, Symbol::X),
                (2, 2, Symbol::X),
                (0, 1, Symbol::X),
            ],
        );
        assert!(!board.check_win(Position::new(0, 1), Symbol::X));
        assert!(board.check_win(Position::new(1, 1), Symbol::X));
    }

    #[test]
    fn single_cell_board_wins_immediately() {
        let mut board = Board::new(1);
        assert_eq!(board.total_moves(), 1);
        play(&mut board, &[(0, 0, Symbol::O)]);
        assert!(board.check_win(Position::new(0, 0), Symbol::O));
    }

    #[test]
    fn out_of_bounds_moves() {
        let board = Board::new(3);
        assert_eq!(
            board.check_move(Position::new(3, 0)),
            Err(IllegalMove::OutOfBounds { size: 3 })
        );
        assert!(!board.is_valid_move(Position::new(0, 3)));
        assert!(!board.is_valid_move(Position::new(-1, 0)));
        assert!(!board.is_valid_move(Position::new(0, -1)));
        assert!(!board.is_valid_move(Position::new(isize::MIN, isize::MAX)));
        assert!(board.is_valid_move(Position::new(2, 2)));
        assert_eq!(board.get(Position::new(3, 0)), None);
        assert!(!board.check_win(Position::new(3, 0), Symbol::X));
    }

    #[test]
    fn occupied_moves() {
        let mut board = Board::new(3);
        play(&mut board, &[(1, 2, Symbol::O)]);
        assert_eq!(
            board.check_move(Position::new(1, 2)),
            Err(IllegalMove::Occupied { by: Symbol::O })
        );
        assert_eq!(board.get(Position::new(1, 2)), Some(Cell::Marked(Symbol::O)));
    }

    #[test]
    fn rows_are_row_major() {
        let mut board = Board::new(2);
        play(&mut board, &[(1, 0, Symbol::X)]);
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Cell::Empty, Cell::Empty]);
        assert_eq!(rows[1], &[Cell::Marked(Symbol::X), Cell::Empty]);
    }

    #[test]
    #[should_panic]
    fn zero_size_board() {
        Board::new(0);
    }
}
