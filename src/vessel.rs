//! Vessel definitions: a linear run of cells with a damage counter.

use crate::common::Position;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One ship: a bow coordinate, a length and an orientation, plus the count of
/// segments not yet hit.
///
/// The occupied cells are derived from (bow, length, orientation) on demand;
/// only the segment counter mutates after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    bow: Position,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Vessel {
    pub fn new(bow: Position, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length >= 1);
        Self {
            bow,
            length,
            orientation,
            remaining: length,
        }
    }

    /// The ordered cells this vessel occupies, bow first, stepping down the
    /// column for a vertical vessel and along the row for a horizontal one.
    pub fn cells(&self) -> Vec<Position> {
        (0..self.length as i32)
            .map(|i| match self.orientation {
                Orientation::Vertical => Position::new(self.bow.row + i, self.bow.col),
                Orientation::Horizontal => Position::new(self.bow.row, self.bow.col + i),
            })
            .collect()
    }

    /// Whether a shot at `target` lands on this vessel.
    pub fn is_hit_by(&self, target: Position) -> bool {
        self.cells().contains(&target)
    }

    /// Deplete one segment. The caller is responsible for calling this at most
    /// once per distinct occupied cell; the grid's resolved-set discipline
    /// guarantees that.
    pub fn apply_hit(&mut self) {
        debug_assert!(self.remaining > 0, "hit on an already destroyed vessel");
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining == 0
    }

    pub fn bow(&self) -> Position {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
