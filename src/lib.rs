mod board;
mod common;
mod convert;
mod coord;
mod game;
mod logging;
mod player;
mod player_auto;
mod player_cli;
mod player_random;
mod ship;

pub use board::*;
pub use common::*;
pub use convert::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use player_auto::*;
pub use player_cli::*;
pub use player_random::*;
pub use ship::*;
