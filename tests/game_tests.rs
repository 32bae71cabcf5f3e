use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    take_turn, AiPlayer, Grid, Match, MatchOptions, Orientation, Player, Position, ShotOutcome,
    Side, Vessel, BOARD_SIZE,
};

/// Test double that plays a predetermined list of targets.
struct ScriptedShots {
    shots: VecDeque<Position>,
}

impl ScriptedShots {
    fn new(shots: &[(i32, i32)]) -> Self {
        Self {
            shots: shots.iter().map(|&(r, c)| Position::new(r, c)).collect(),
        }
    }
}

impl Player for ScriptedShots {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    fn choose_target(&mut self, _rng: &mut SmallRng) -> Position {
        self.shots.pop_front().expect("ran out of scripted shots")
    }
}

fn grid_with(vessels: &[(i32, i32, usize, Orientation)]) -> Grid {
    let mut grid = Grid::new(6);
    for &(r, c, len, o) in vessels {
        grid.place_vessel(Vessel::new(Position::new(r, c), len, o))
            .unwrap();
    }
    grid.reset_for_play();
    grid
}

#[test]
fn test_take_turn_retries_illegal_targets() {
    let mut grid = grid_with(&[(0, 0, 1, Orientation::Vertical)]);
    let mut rng = SmallRng::seed_from_u64(0);

    // out of bounds, then a legal miss
    let mut player = ScriptedShots::new(&[(9, 9), (5, 5)]);
    assert_eq!(
        take_turn(&mut player, &mut grid, &mut rng, false),
        ShotOutcome::Miss
    );
    assert!(player.shots.is_empty());

    // repeat shot, then the kill
    let mut player = ScriptedShots::new(&[(5, 5), (0, 0)]);
    assert_eq!(
        take_turn(&mut player, &mut grid, &mut rng, false),
        ShotOutcome::Destroyed
    );
    assert!(player.shots.is_empty());
}

#[test]
fn test_hit_keeps_the_turn_and_miss_passes_it() {
    let first = ScriptedShots::new(&[(0, 0), (5, 5)]);
    let second = ScriptedShots::new(&[(5, 5)]);
    let first_grid = grid_with(&[(3, 3, 1, Orientation::Vertical)]);
    let second_grid = grid_with(&[(0, 0, 2, Orientation::Horizontal)]);
    let rng = SmallRng::seed_from_u64(1);
    let mut game = Match::with_grids(
        Box::new(first),
        Box::new(second),
        first_grid,
        second_grid,
        rng,
        MatchOptions::default(),
    );

    assert_eq!(game.active(), Side::First);
    // hit without destruction: same side stays on the move
    assert_eq!(game.step(), None);
    assert_eq!(game.active(), Side::First);
    assert_eq!(game.turn(), 0);

    // miss: turn passes to the second side
    assert_eq!(game.step(), None);
    assert_eq!(game.active(), Side::Second);

    // second side misses: back to the first side
    assert_eq!(game.step(), None);
    assert_eq!(game.active(), Side::First);
}

#[test]
fn test_destroying_last_vessel_wins() {
    let first = ScriptedShots::new(&[(0, 0)]);
    let second = ScriptedShots::new(&[]);
    let first_grid = grid_with(&[(3, 3, 1, Orientation::Vertical)]);
    let second_grid = grid_with(&[(0, 0, 1, Orientation::Horizontal)]);
    let mut game = Match::with_grids(
        Box::new(first),
        Box::new(second),
        first_grid,
        second_grid,
        SmallRng::seed_from_u64(2),
        MatchOptions::default(),
    );

    // destruction ends the game before the second side ever moves
    assert_eq!(game.step(), Some(Side::First));
    assert!(game.second_grid().all_vessels_destroyed());
}

#[test]
fn test_simultaneous_destruction_favors_the_shooter() {
    let mut first_grid = grid_with(&[(3, 3, 1, Orientation::Vertical)]);
    first_grid.shoot(Position::new(3, 3)).unwrap();
    assert!(first_grid.all_vessels_destroyed());

    let second_grid = grid_with(&[(0, 0, 1, Orientation::Horizontal)]);
    let mut game = Match::with_grids(
        Box::new(ScriptedShots::new(&[(0, 0)])),
        Box::new(ScriptedShots::new(&[])),
        first_grid,
        second_grid,
        SmallRng::seed_from_u64(3),
        MatchOptions::default(),
    );

    // both boards end up cleared; the side that just fired takes the win
    assert_eq!(game.step(), Some(Side::First));
}

#[test]
fn test_ai_vs_ai_match_terminates() {
    for seed in 0..10 {
        let rng = SmallRng::seed_from_u64(seed);
        let mut game = Match::new(
            Box::new(AiPlayer::silent(BOARD_SIZE)),
            Box::new(AiPlayer::silent(BOARD_SIZE)),
            rng,
            MatchOptions::default(),
        );
        let winner = game.run();
        assert!(matches!(winner, Side::First | Side::Second));
        // every completed turn resolves at least one fresh cell per board
        assert!(game.turn() <= 2 * (BOARD_SIZE * BOARD_SIZE) as u32);
        let loser_grid = match winner {
            Side::First => game.second_grid(),
            Side::Second => game.first_grid(),
        };
        assert!(loser_grid.all_vessels_destroyed());
    }
}
