use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::Position;
use crate::player::Player;

/// Scripted opponent: draws a uniformly random in-bounds target.
///
/// No guess history is kept; rejected proposals are retried by the turn loop.
pub struct AiPlayer {
    board_size: usize,
    announce: bool,
}

impl AiPlayer {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            announce: true,
        }
    }

    /// A quiet variant for headless simulation.
    pub fn silent(board_size: usize) -> Self {
        Self {
            board_size,
            announce: false,
        }
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &'static str {
        "Computer"
    }

    fn choose_target(&mut self, rng: &mut SmallRng) -> Position {
        let target = Position::new(
            rng.random_range(0..self.board_size) as i32,
            rng.random_range(0..self.board_size) as i32,
        );
        if self.announce {
            println!("Computer fires at: {}", target);
        }
        target
    }
}
