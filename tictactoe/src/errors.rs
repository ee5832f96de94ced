use crate::Symbol;

/// The error type for [`Board::check_move()`](crate::Board::check_move).
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { size: usize },
    Occupied { by: Symbol },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { size } => write!(
                f,
                "Position is outside of the {}x{} board",
                size, size
            ),
            IllegalMove::Occupied { by } => {
                write!(f, "Position is already taken by {}", by)
            }
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Symbol`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolFromStrErr {
    Empty,
    MoreThanOneChar,
    UnknownSymbol(char),
}

impl std::error::Error for SymbolFromStrErr {}

impl std::fmt::Display for SymbolFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolFromStrErr::Empty => write!(f, "No symbol given"),
            SymbolFromStrErr::MoreThanOneChar => write!(f, "A symbol is a single character"),
            SymbolFromStrErr::UnknownSymbol(c) => {
                write!(f, "'{}' is not a symbol, expected x or o", c)
            }
        }
    }
}
