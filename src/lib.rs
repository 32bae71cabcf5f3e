mod common;
mod config;
mod game;
mod grid;
mod logging;
mod player;
mod player_ai;
mod player_cli;
pub mod ui;
mod vessel;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use vessel::*;
