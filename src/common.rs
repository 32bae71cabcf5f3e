//! Common types for Sea Battle: grid coordinates, shot outcomes and errors.

/// Zero-based (row, column) grid coordinate.
///
/// Coordinates are signed so that adjacency rings around edge cells and raw
/// user input can be represented; whether a position is on the board is a
/// [`Grid`](crate::Grid) concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl core::fmt::Display for Position {
    /// One-based, the way coordinates are shown to the player.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot missed all vessels.
    Miss,
    /// Shot hit an undepleted vessel segment.
    Hit,
    /// Shot depleted the last segment of a vessel.
    Destroyed,
}

impl ShotOutcome {
    /// A plain hit keeps the turn with the shooter; a miss or a full
    /// destruction passes it to the opponent.
    pub fn grants_extra_turn(&self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by Grid operations. All of them are recoverable: shot
/// errors feed the turn retry loop, placement errors feed the board
/// generator's retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Target coordinate lies outside the grid.
    OutOfBounds,
    /// Target coordinate was already resolved (shot at, or excluded around a
    /// destroyed vessel).
    RepeatShot,
    /// Candidate vessel placement overlaps or touches an existing vessel.
    InvalidPlacement,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds => write!(f, "That shot is outside the board"),
            GridError::RepeatShot => write!(f, "You already fired at that cell"),
            GridError::InvalidPlacement => {
                write!(f, "Vessel placement overlaps or touches another vessel")
            }
        }
    }
}

impl std::error::Error for GridError {}
