//! Grid tests - parsing, walkability and clearing

use tui_maze::core::{Grid, ParseError};
use tui_maze::types::{Cell, Position, DEFAULT_LAYOUT, REFERENCE_LAYOUT};

#[test]
fn test_default_layout_dimensions() {
    let grid = Grid::parse(DEFAULT_LAYOUT).unwrap();
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 10);
    assert_eq!(grid.start(), Position::new(1, 1));
    assert_eq!(grid.count(Cell::Key), 1);
    assert_eq!(grid.count(Cell::Exit), 1);
    assert_eq!(grid.count(Cell::Item), 3);
}

#[test]
fn test_default_layout_only_adds_items_to_reference() {
    let reference = Grid::parse(REFERENCE_LAYOUT).unwrap();
    let default = Grid::parse(DEFAULT_LAYOUT).unwrap();
    assert_eq!(reference.width(), default.width());
    assert_eq!(reference.height(), default.height());
    assert_eq!(reference.start(), default.start());
    assert_eq!(reference.count(Cell::Item), 0);

    let items = [Position::new(4, 3), Position::new(6, 6), Position::new(8, 1)];
    for row in 0..reference.height() as i32 {
        for col in 0..reference.width() as i32 {
            let pos = Position::new(row, col);
            if items.contains(&pos) {
                assert_eq!(reference.cell_at(pos), Some(Cell::Floor));
                assert_eq!(default.cell_at(pos), Some(Cell::Item));
            } else {
                assert_eq!(reference.cell_at(pos), default.cell_at(pos), "({}, {})", row, col);
            }
        }
    }
}

#[test]
fn test_start_marker_becomes_floor() {
    let grid = Grid::parse(DEFAULT_LAYOUT).unwrap();
    assert_eq!(grid.cell_at(grid.start()), Some(Cell::Floor));
}

#[test]
fn test_short_lines_padded_with_walls() {
    let grid = Grid::parse("#####\n#C\n#####").unwrap();
    assert_eq!(grid.width(), 5);
    for col in 2..5 {
        assert_eq!(grid.cell_at(Position::new(1, col)), Some(Cell::Wall));
    }
}

#[test]
fn test_long_lines_truncated() {
    let grid = Grid::parse("###\n#C  E\n###").unwrap();
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.count(Cell::Exit), 0);
}

#[test]
fn test_lines_are_trimmed() {
    let grid = Grid::parse("\n\n   ###\r\n   #C#   \r\n   ###\n\n").unwrap();
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.start(), Position::new(1, 1));
}

#[test]
fn test_empty_layout_is_error() {
    assert_eq!(Grid::parse(""), Err(ParseError::Empty));
    assert_eq!(Grid::parse("   \n\t\n"), Err(ParseError::Empty));
}

#[test]
fn test_unknown_glyphs_are_floor() {
    let grid = Grid::parse("#D?#").unwrap();
    assert_eq!(grid.cell_at(Position::new(0, 1)), Some(Cell::Floor));
    assert_eq!(grid.cell_at(Position::new(0, 2)), Some(Cell::Floor));
}

#[test]
fn test_walls_and_out_of_bounds_never_walkable() {
    let grid = Grid::parse(DEFAULT_LAYOUT).unwrap();
    let h = grid.height() as i32;
    let w = grid.width() as i32;

    for has_key in [false, true] {
        for row in -1..=h {
            for col in -1..=w {
                let pos = Position::new(row, col);
                match grid.cell_at(pos) {
                    None | Some(Cell::Wall) => assert!(
                        !grid.is_walkable(pos, has_key),
                        "({}, {}) should be blocked",
                        row,
                        col
                    ),
                    _ => {}
                }
            }
        }
    }
}

#[test]
fn test_exit_walkable_iff_key() {
    let grid = Grid::parse(DEFAULT_LAYOUT).unwrap();
    let exit = Position::new(1, 8);
    assert!(grid.is_exit(exit));
    assert!(!grid.is_walkable(exit, false));
    assert!(grid.is_walkable(exit, true));
}

#[test]
fn test_floor_and_pickups_walkable() {
    let grid = Grid::parse("#C*k#").unwrap();
    for col in 1..=3 {
        assert!(grid.is_walkable(Position::new(0, col), false));
    }
}

#[test]
fn test_clear_cell() {
    let mut grid = Grid::parse("#*k#").unwrap();
    grid.clear_cell(Position::new(0, 1));
    grid.clear_cell(Position::new(0, 2));
    assert_eq!(grid.cell_at(Position::new(0, 1)), Some(Cell::Floor));
    assert_eq!(grid.cell_at(Position::new(0, 2)), Some(Cell::Floor));

    // Out of bounds is ignored and the shape never changes.
    grid.clear_cell(Position::new(5, 5));
    grid.clear_cell(Position::new(-1, 0));
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 1);
}

#[test]
fn test_is_exit_out_of_bounds() {
    let grid = Grid::parse("#E#").unwrap();
    assert!(!grid.is_exit(Position::new(0, 3)));
    assert!(!grid.is_exit(Position::new(-1, 1)));
}
