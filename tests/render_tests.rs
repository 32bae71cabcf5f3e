use sea_battle::ui::render_grid;
use sea_battle::{Grid, Orientation, Position, Vessel};

fn small_grid() -> Grid {
    let mut grid = Grid::new(3);
    grid.place_vessel(Vessel::new(Position::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    grid.reset_for_play();
    grid
}

#[test]
fn test_render_header_and_rows() {
    let grid = Grid::new(3);
    let rendered = render_grid(&grid);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "  | 1 | 2 | 3 |");
    assert_eq!(lines[1], "1 | O | O | O |");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_render_reveals_vessels_on_own_board() {
    let grid = small_grid();
    let rendered = render_grid(&grid);
    assert!(rendered.contains('■'));
}

#[test]
fn test_render_masks_vessels_on_hidden_board() {
    let mut grid = small_grid();
    grid.set_hidden(true);
    let rendered = render_grid(&grid);
    assert!(!rendered.contains('■'));
    assert_eq!(
        rendered.lines().nth(1).unwrap(),
        "1 | O | O | O |"
    );
}

#[test]
fn test_render_shot_glyphs_show_through_hiding() {
    let mut grid = small_grid();
    grid.set_hidden(true);
    grid.shoot(Position::new(2, 2)).unwrap(); // miss
    grid.shoot(Position::new(0, 0)).unwrap(); // hit
    let rendered = render_grid(&grid);
    assert!(rendered.contains('T'));
    assert!(rendered.contains('X'));

    grid.shoot(Position::new(0, 1)).unwrap(); // destroys the vessel
    let rendered = render_grid(&grid);
    assert!(rendered.contains('*'));
    assert!(!rendered.contains('X'));
}
