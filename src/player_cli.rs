use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::Position;
use crate::player::Player;

/// Human operator: reads targets from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a target typed as two one-based integers separated by whitespace,
/// e.g. `"2 4"`, into a zero-based [`Position`].
///
/// Only syntax is checked here; range and repeat-shot validation belong to
/// the grid. `"0 0"` therefore parses to `(-1, -1)` and is rejected later as
/// out of bounds.
pub fn parse_target(input: &str) -> Option<Position> {
    let mut tokens = input.split_whitespace();
    let row: i32 = tokens.next()?.parse().ok()?;
    let col: i32 = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(Position::new(row - 1, col - 1))
}

impl Player for CliPlayer {
    fn name(&self) -> &'static str {
        "Player"
    }

    fn choose_target(&mut self, _rng: &mut SmallRng) -> Position {
        loop {
            print!("Your move (row col): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            match parse_target(line.trim()) {
                Some(target) => return target,
                None => println!("Enter exactly two numbers, e.g. 2 4"),
            }
        }
    }
}
