//! Piece tests - movement, freezing and rotation through the public API

use tetris_pivot::core::{get_offsets, Grid, MoveOutcome, Piece};
use tetris_pivot::types::{Color, Direction, Position, Shape, GRID_HEIGHT, SPAWN_ANCHOR};

#[test]
fn test_spawn_positions_follow_offsets() {
    for shape in Shape::ALL {
        let piece = Piece::spawn(shape).unwrap();
        let expected = get_offsets(shape).map(|(r, c)| SPAWN_ANCHOR.offset(r, c));
        assert_eq!(piece.positions(), expected, "{:?}", shape);
        assert_eq!(piece.pivot(), SPAWN_ANCHOR);
    }
}

#[test]
fn test_move_is_all_or_nothing() {
    let mut grid = Grid::new();
    let mut piece = Piece::new(Position::new(5, 4), Shape::Straight).unwrap();
    // Only the rightmost cell (5, 6) would run into this.
    grid.set(5, 7, Color::Red);

    let before = piece.positions();
    assert!(!piece.can_move(&grid, Direction::Right));
    assert_eq!(piece.try_move(&grid, Direction::Right), MoveOutcome::Blocked);
    assert_eq!(piece.positions(), before);
}

#[test]
fn test_up_moves_are_allowed_by_the_piece() {
    let grid = Grid::new();
    let mut piece = Piece::new(Position::new(5, 4), Shape::T).unwrap();
    assert_eq!(piece.try_move(&grid, Direction::Up), MoveOutcome::Moved);
    assert_eq!(piece.pivot(), Position::new(4, 4));
}

#[test]
fn test_drop_and_rotate_are_not_single_steps() {
    let grid = Grid::new();
    let piece = Piece::new(Position::new(5, 4), Shape::T).unwrap();
    assert!(!piece.can_move(&grid, Direction::Drop));
    assert!(!piece.can_move(&grid, Direction::Rotate));
}

#[test]
fn test_falling_to_the_floor_freezes() {
    let grid = Grid::new();
    let mut piece = Piece::spawn(Shape::Square).unwrap();

    let mut steps = 0;
    while piece.try_move(&grid, Direction::Down) == MoveOutcome::Moved {
        steps += 1;
    }
    assert_eq!(steps, GRID_HEIGHT as usize - 2);
    assert!(piece.is_frozen());
    assert!(piece.cells().iter().all(|c| !c.is_mobile()));
}

#[test]
fn test_straight_rotates_to_vertical() {
    let grid = Grid::new();
    let mut piece = Piece::new(Position::new(5, 4), Shape::Straight).unwrap();
    assert!(piece.rotate(&grid));

    let mut cols: Vec<i8> = piece.positions().iter().map(|p| p.col).collect();
    cols.dedup();
    assert_eq!(cols, vec![4]);
    assert_eq!(piece.pivot(), Position::new(5, 4));
}

#[test]
fn test_square_rotation_stays_in_place() {
    let grid = Grid::new();
    let mut piece = Piece::new(Position::new(5, 4), Shape::Square).unwrap();
    let mut before = piece.positions();
    assert!(piece.rotate(&grid));

    let mut after = piece.positions();
    before.sort_by_key(|p| (p.row, p.col));
    after.sort_by_key(|p| (p.row, p.col));
    // A 2x2 block turned about its lower-left corner drops one row.
    let shifted: Vec<Position> = before.iter().map(|p| p.offset(1, 0)).collect();
    assert_eq!(after.to_vec(), shifted);
}

#[test]
fn test_rotation_blocked_by_floor() {
    let grid = Grid::new();
    let bottom = GRID_HEIGHT as i8 - 1;
    // Horizontal Straight on the floor would swing its cells below row 19.
    let piece = Piece::new(Position::new(bottom, 4), Shape::Straight).unwrap();
    assert!(!piece.can_rotate(&grid));
}
