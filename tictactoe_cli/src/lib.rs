mod computer;
mod console;
mod error;
mod game;
mod human;
mod player;
mod session;
mod transcript;
pub use computer::*;
pub use console::*;
pub use error::*;
pub use game::*;
pub use human::*;
pub use player::*;
pub use session::*;
pub use transcript::*;
