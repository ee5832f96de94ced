use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SymbolFromStrErr;

/// The mark a player puts on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Both symbols, in the order they are offered to the user.
    pub const ALL: [Symbol; 2] = [Symbol::X, Symbol::O];

    /// The symbol held by the other player.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'x',
            Symbol::O => 'o',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Symbol {
    type Err = SymbolFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let c = chars.next().ok_or(SymbolFromStrErr::Empty)?;
        if chars.next().is_some() {
            return Err(SymbolFromStrErr::MoreThanOneChar);
        }
        match c.to_ascii_lowercase() {
            'x' => Ok(Symbol::X),
            'o' => Ok(Symbol::O),
            other => Err(SymbolFromStrErr::UnknownSymbol(other)),
        }
    }
}

/// The state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Marked(Symbol),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }
}

/// A coordinate pair on the board, 0-indexed.
///
/// The components are signed so that whatever a player typed can be
/// represented; [`Board::check_move()`](crate::Board::check_move) rejects
/// anything outside of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
