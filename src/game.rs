//! The match loop: alternating turns, the hit-grants-extra-turn rule, and
//! win detection.

use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;

use crate::common::ShotOutcome;
use crate::config::{BOARD_SIZE, VESSEL_LENGTHS};
use crate::grid::Grid;
use crate::player::Player;
use crate::ui;

/// The two sides of a match. The first side moves on even turn numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

pub struct MatchOptions {
    /// Artificial delay before the second side's move, as pacing for
    /// interactive play.
    pub pacing: Duration,
    /// Print boards and narration to stdout.
    pub verbose: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            pacing: Duration::ZERO,
            verbose: false,
        }
    }
}

/// Ask `player` for targets until one is accepted by the enemy grid.
///
/// Rejected shots (out of bounds, repeats) are reported to the player and the
/// same turn is retried; the loop is unbounded on purpose. The grid always
/// has an unresolved cell left while the match is still running, so a legal
/// shot is eventually found.
pub fn take_turn(
    player: &mut dyn Player,
    enemy_grid: &mut Grid,
    rng: &mut SmallRng,
    verbose: bool,
) -> ShotOutcome {
    loop {
        let target = player.choose_target(rng);
        match enemy_grid.shoot(target) {
            Ok(outcome) => {
                log::debug!("{} fired at {}: {:?}", player.name(), target, outcome);
                if verbose {
                    ui::announce_outcome(outcome);
                }
                return outcome;
            }
            Err(err) => {
                log::debug!("{} shot at {} rejected: {:?}", player.name(), target, err);
                if verbose {
                    println!("{}", err);
                }
            }
        }
    }
}

/// A full session: two players, two grids, and the turn counter.
///
/// The first side moves on even turns and owns `first_grid` as its home
/// board; each side shoots at the other's grid. A plain hit keeps the turn
/// with the shooter.
pub struct Match {
    first: Box<dyn Player>,
    second: Box<dyn Player>,
    first_grid: Grid,
    second_grid: Grid,
    rng: SmallRng,
    options: MatchOptions,
    turn: u32,
}

impl Match {
    /// Set up a match on randomly generated default-size boards, with the
    /// second side's board hidden.
    pub fn new(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        mut rng: SmallRng,
        options: MatchOptions,
    ) -> Self {
        let first_grid = Grid::random(&mut rng, BOARD_SIZE, &VESSEL_LENGTHS);
        let mut second_grid = Grid::random(&mut rng, BOARD_SIZE, &VESSEL_LENGTHS);
        second_grid.set_hidden(true);
        Self::with_grids(first, second, first_grid, second_grid, rng, options)
    }

    /// Set up a match on prepared grids. The grids must already have had
    /// their placement buffers cleared.
    pub fn with_grids(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        first_grid: Grid,
        second_grid: Grid,
        rng: SmallRng,
        options: MatchOptions,
    ) -> Self {
        Self {
            first,
            second,
            first_grid,
            second_grid,
            rng,
            options,
            turn: 0,
        }
    }

    /// Side to move next.
    pub fn active(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Completed turn count. Repeated moves after a hit do not advance it.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn first_grid(&self) -> &Grid {
        &self.first_grid
    }

    pub fn second_grid(&self) -> &Grid {
        &self.second_grid
    }

    pub fn player_name(&self, side: Side) -> &'static str {
        match side {
            Side::First => self.first.name(),
            Side::Second => self.second.name(),
        }
    }

    /// Play one turn and report the winner, if any.
    ///
    /// The second side's home grid is checked first, so in the degenerate
    /// case of both boards being cleared at once the side that just fired
    /// wins.
    pub fn step(&mut self) -> Option<Side> {
        let repeat = match self.active() {
            Side::First => take_turn(
                self.first.as_mut(),
                &mut self.second_grid,
                &mut self.rng,
                self.options.verbose,
            )
            .grants_extra_turn(),
            Side::Second => {
                if !self.options.pacing.is_zero() {
                    thread::sleep(self.options.pacing);
                }
                take_turn(
                    self.second.as_mut(),
                    &mut self.first_grid,
                    &mut self.rng,
                    self.options.verbose,
                )
                .grants_extra_turn()
            }
        };
        if !repeat {
            self.turn += 1;
        }
        if self.second_grid.all_vessels_destroyed() {
            return Some(Side::First);
        }
        if self.first_grid.all_vessels_destroyed() {
            return Some(Side::Second);
        }
        None
    }

    /// Run turns until one side has no vessels left.
    pub fn run(&mut self) -> Side {
        loop {
            if self.options.verbose {
                ui::print_boards(&self.first_grid, &self.second_grid);
                ui::announce_turn(self.player_name(self.active()));
            }
            if let Some(winner) = self.step() {
                if self.options.verbose {
                    ui::print_boards(&self.first_grid, &self.second_grid);
                    ui::announce_winner(self.player_name(winner));
                }
                log::info!(
                    "match over after {} turns, {} wins",
                    self.turn,
                    self.player_name(winner)
                );
                return winner;
            }
        }
    }
}
