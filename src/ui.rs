//! Console rendering and narration. Everything here is a read-only
//! projection of game state; nothing in this module mutates a grid.

use crate::common::{Position, ShotOutcome};
use crate::grid::{CellState, Grid};

fn glyph(cell: CellState, hidden: bool) -> char {
    match cell {
        CellState::Empty => 'O',
        // A hidden grid shows unresolved vessel cells as open water.
        CellState::Occupied => {
            if hidden {
                'O'
            } else {
                '■'
            }
        }
        CellState::Miss => 'T',
        CellState::Hit => 'X',
        CellState::Destroyed => '*',
    }
}

/// Render a grid as a text table with a one-based column header, honoring the
/// grid's hidden flag.
pub fn render_grid(grid: &Grid) -> String {
    let size = grid.size();
    let mut out = String::from(" ");
    for col in 1..=size {
        out.push_str(&format!(" | {}", col));
    }
    out.push_str(" |");
    for row in 0..size {
        out.push_str(&format!("\n{} |", row + 1));
        for col in 0..size {
            let cell = grid.cell(Position::new(row as i32, col as i32));
            out.push_str(&format!(" {} |", glyph(cell, grid.hidden())));
        }
    }
    out
}

/// Print both boards: the operator's own layout and the opponent's board.
pub fn print_boards(own: &Grid, enemy: &Grid) {
    println!("{}", "-".repeat(30));
    println!("Your board:\n{}", render_grid(own));
    println!("Enemy board:\n{}", render_grid(enemy));
    println!("{}", "-".repeat(30));
}

pub fn greet() {
    println!("{:_^60}", " Welcome to Sea Battle ");
    println!("{:_^60}", " You play against the computer. ");
    println!("{:_^60}", " Enter shots as: row col ");
    println!("{:_^60}", " Coordinates are 1-based. ");
}

pub fn announce_turn(name: &str) {
    println!("{} to move!", name);
}

pub fn announce_outcome(outcome: ShotOutcome) {
    match outcome {
        ShotOutcome::Miss => println!("Miss!"),
        ShotOutcome::Hit => println!("Vessel hit!"),
        ShotOutcome::Destroyed => println!("Vessel destroyed!"),
    }
}

pub fn announce_winner(name: &str) {
    println!("{}", "-".repeat(20));
    println!("{} wins!", name);
}
