use sea_battle::{parse_target, Position};

#[test]
fn test_parse_valid_target() {
    assert_eq!(parse_target("3 4"), Some(Position::new(2, 3)));
    assert_eq!(parse_target("1 1"), Some(Position::new(0, 0)));
    assert_eq!(parse_target("  2\t5  "), Some(Position::new(1, 4)));
}

#[test]
fn test_parse_wrong_token_count() {
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("3"), None);
    assert_eq!(parse_target("3 4 5"), None);
}

#[test]
fn test_parse_non_numeric() {
    assert_eq!(parse_target("a b"), None);
    assert_eq!(parse_target("3 four"), None);
}

#[test]
fn test_parse_defers_range_checks_to_the_grid() {
    // syntactically fine; the grid rejects these as out of bounds
    assert_eq!(parse_target("0 0"), Some(Position::new(-1, -1)));
    assert_eq!(parse_target("99 1"), Some(Position::new(98, 0)));
}
