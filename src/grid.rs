//! Grid state: vessel layout, per-cell status, and the resolved-cell set that
//! rejects repeat shots and keeps hulls apart during setup.

use rand::Rng;

use crate::common::{GridError, Position, ShotOutcome};
use crate::config::PLACEMENT_ATTEMPTS;
use crate::vessel::{Orientation, Vessel};

/// Per-cell status. Placement-time adjacency buffers never change cell
/// status; they live only in the resolved set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    /// A live vessel segment that has not been hit.
    Occupied,
    /// A resolved shot that hit nothing, or the flooded ring around a
    /// destroyed vessel.
    Miss,
    /// A hit segment of a vessel that still has live segments.
    Hit,
    /// A segment of a fully destroyed vessel.
    Destroyed,
}

/// One combatant's board.
///
/// The vessel set is fixed after setup; play only mutates segment counters,
/// cell statuses and the resolved set, and all of that is funneled through
/// [`Grid::shoot`].
pub struct Grid {
    size: usize,
    hidden: bool,
    cells: Vec<CellState>,
    resolved: Vec<bool>,
    vessels: Vec<Vessel>,
    destroyed: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            hidden: false,
            cells: vec![CellState::Empty; size * size],
            resolved: vec![false; size * size],
            vessels: Vec::new(),
            destroyed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether unresolved occupied cells should be masked when rendered for
    /// the opposing player.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_out_of_bounds(&self, p: Position) -> bool {
        p.row < 0 || p.col < 0 || p.row >= self.size as i32 || p.col >= self.size as i32
    }

    fn index(&self, p: Position) -> usize {
        debug_assert!(!self.is_out_of_bounds(p));
        p.row as usize * self.size + p.col as usize
    }

    /// Status of a cell; out-of-bounds coordinates read as empty.
    pub fn cell(&self, p: Position) -> CellState {
        if self.is_out_of_bounds(p) {
            CellState::Empty
        } else {
            self.cells[self.index(p)]
        }
    }

    fn set_cell(&mut self, p: Position, state: CellState) {
        let i = self.index(p);
        self.cells[i] = state;
    }

    /// Whether a cell may no longer be targeted (shot at, or excluded).
    pub fn is_resolved(&self, p: Position) -> bool {
        !self.is_out_of_bounds(p) && self.resolved[self.index(p)]
    }

    fn mark_resolved(&mut self, p: Position) {
        let i = self.index(p);
        self.resolved[i] = true;
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    pub fn all_vessels_destroyed(&self) -> bool {
        self.destroyed == self.vessels.len()
    }

    /// Place a vessel, or fail without touching any state.
    ///
    /// Every cell must be on the board and neither occupied nor inside the
    /// one-cell exclusion ring of a previously placed vessel. On success the
    /// vessel's cells become occupied and resolved, and its 8-neighbor ring is
    /// marked resolved so later placements cannot touch it.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), GridError> {
        let cells = vessel.cells();
        for &p in &cells {
            if self.is_out_of_bounds(p) {
                return Err(GridError::OutOfBounds);
            }
            if self.is_resolved(p) {
                return Err(GridError::InvalidPlacement);
            }
        }
        for &p in &cells {
            self.set_cell(p, CellState::Occupied);
            self.mark_resolved(p);
        }
        self.vessels.push(vessel);
        self.exclude_ring(&cells, false);
        Ok(())
    }

    /// Mark the 8-neighbor ring of `cells` resolved. With `mark_misses` the
    /// newly excluded cells also read as misses, telling the opponent they
    /// need no further shots.
    fn exclude_ring(&mut self, cells: &[Position], mark_misses: bool) {
        for &cell in cells {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let p = Position::new(cell.row + dr, cell.col + dc);
                    if self.is_out_of_bounds(p) || self.is_resolved(p) {
                        continue;
                    }
                    self.mark_resolved(p);
                    if mark_misses {
                        self.set_cell(p, CellState::Miss);
                    }
                }
            }
        }
    }

    /// Clear the resolved set accumulated during placement.
    ///
    /// The exclusion buffers that kept vessels apart must not count as
    /// already-shot cells once play begins. Runs after the last placement and
    /// before the first shot; calling it again is a no-op.
    pub fn reset_for_play(&mut self) {
        self.resolved.fill(false);
    }

    /// Resolve a shot at `target`.
    pub fn shoot(&mut self, target: Position) -> Result<ShotOutcome, GridError> {
        if self.is_out_of_bounds(target) {
            return Err(GridError::OutOfBounds);
        }
        if self.is_resolved(target) {
            return Err(GridError::RepeatShot);
        }
        self.mark_resolved(target);

        if let Some(i) = self.vessels.iter().position(|v| v.is_hit_by(target)) {
            self.vessels[i].apply_hit();
            self.set_cell(target, CellState::Hit);
            if self.vessels[i].is_destroyed() {
                self.destroyed += 1;
                let cells = self.vessels[i].cells();
                for &p in &cells {
                    self.set_cell(p, CellState::Destroyed);
                }
                self.exclude_ring(&cells, true);
                return Ok(ShotOutcome::Destroyed);
            }
            return Ok(ShotOutcome::Hit);
        }

        self.set_cell(target, CellState::Miss);
        Ok(ShotOutcome::Miss)
    }

    /// Generate a board with one vessel per entry of `lengths`, retrying until
    /// a full layout succeeds.
    ///
    /// Random placement on a crowded small grid can dead-end, so each attempt
    /// has a fixed budget; on exhaustion the whole board is discarded and
    /// generation starts over. Termination is probabilistic but certain.
    pub fn random<R: Rng>(rng: &mut R, size: usize, lengths: &[usize]) -> Self {
        loop {
            if let Some(grid) = Self::try_random(rng, size, lengths) {
                return grid;
            }
            log::debug!("placement budget exhausted, regenerating board");
        }
    }

    fn try_random<R: Rng>(rng: &mut R, size: usize, lengths: &[usize]) -> Option<Self> {
        let mut grid = Grid::new(size);
        let mut attempts = 0;
        for &length in lengths {
            loop {
                attempts += 1;
                if attempts > PLACEMENT_ATTEMPTS {
                    return None;
                }
                let bow = Position::new(
                    rng.random_range(0..size) as i32,
                    rng.random_range(0..size) as i32,
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if grid.place_vessel(Vessel::new(bow, length, orientation)).is_ok() {
                    break;
                }
            }
        }
        grid.reset_for_play();
        Some(grid)
    }
}
