pub use board::*;
pub use errors::*;
pub use types::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod types;
mod visualization;
