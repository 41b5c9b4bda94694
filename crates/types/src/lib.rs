//! Shared types and constants for the falling-block game
//!
//! This crate holds the vocabulary every other crate speaks: grid dimensions,
//! grid coordinates, piece shapes, colors, and the command set. It has no
//! dependencies, so the core logic, the terminal layer and the input mapping
//! can all use it without pulling in each other.
//!
//! # Grid Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_WIDTH` | 10 | Columns, indexed 0-9 left to right |
//! | `GRID_HEIGHT` | 20 | Rows, indexed 0-19 top to bottom |
//! | `CELL_SIZE_PX` | 20 | Side of one drawn cell in pixels |
//! | `PIECE_CELLS` | 4 | Cells per piece |
//! | `PIVOT_INDEX` | 1 | Index of the rotation pivot inside a piece |
//!
//! New pieces are anchored at [`SPAWN_ANCHOR`]: row 1, column `GRID_WIDTH / 2 - 1`.
//!
//! # Examples
//!
//! ```
//! use tetris_pivot_types::{Direction, Shape, GRID_HEIGHT, GRID_WIDTH};
//!
//! let dir = Direction::from_str("rotate").unwrap();
//! assert_eq!(dir, Direction::Rotate);
//! assert_eq!(Direction::Left.delta(), Some((0, -1)));
//! assert_eq!(Direction::Drop.delta(), None);
//!
//! assert_eq!(Shape::from_index(5), Some(Shape::Straight));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use std::fmt;

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Side length of one drawn cell, in pixels, for graphical front ends.
///
/// The terminal front end sizes cells in character columns instead and does
/// not read this.
///
/// ```
/// use tetris_pivot_types::{CELL_SIZE_PX, GRID_HEIGHT, GRID_WIDTH};
///
/// let window = (GRID_WIDTH as u32 * CELL_SIZE_PX, GRID_HEIGHT as u32 * CELL_SIZE_PX);
/// assert_eq!(window, (200, 400));
/// ```
pub const CELL_SIZE_PX: u32 = 20;

/// Number of cells in every piece
pub const PIECE_CELLS: usize = 4;

/// Index of the pivot cell inside a piece's cell array
pub const PIVOT_INDEX: usize = 1;

/// Number of distinct piece shapes
pub const SHAPE_COUNT: usize = 7;

/// Where new pieces are anchored (top-center of the grid)
pub const SPAWN_ANCHOR: Position = Position {
    row: 1,
    col: (GRID_WIDTH / 2) as i8 - 1,
};

/// A (row, col) coordinate on the grid.
///
/// Signed so that candidate destinations just outside the grid can be
/// represented and rejected by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Offset this position by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Whether the position lies on the grid.
    ///
    /// ```
    /// use tetris_pivot_types::Position;
    ///
    /// assert!(Position::new(0, 0).in_bounds());
    /// assert!(Position::new(19, 9).in_bounds());
    /// assert!(!Position::new(20, 0).in_bounds());
    /// assert!(!Position::new(0, -1).in_bounds());
    /// ```
    pub const fn in_bounds(self) -> bool {
        self.row >= 0
            && self.row < GRID_HEIGHT as i8
            && self.col >= 0
            && self.col < GRID_WIDTH as i8
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Commands accepted by the game controller.
///
/// `Up`, `Down`, `Left` and `Right` are single-step moves. `Drop` repeats
/// `Down` until the piece is blocked and `Rotate` turns the piece 90° about
/// its pivot; neither is a raw cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Drop,
    Rotate,
}

impl Direction {
    /// Row/column delta for a single-step move, `None` for `Drop` and `Rotate`.
    pub fn delta(&self) -> Option<(i8, i8)> {
        match self {
            Direction::Up => Some((-1, 0)),
            Direction::Down => Some((1, 0)),
            Direction::Left => Some((0, -1)),
            Direction::Right => Some((0, 1)),
            Direction::Drop | Direction::Rotate => None,
        }
    }

    /// Parse a direction from string (case-insensitive)
    ///
    /// ```
    /// use tetris_pivot_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("drop"), Some(Direction::Drop));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "drop" => Some(Direction::Drop),
            "rotate" => Some(Direction::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Drop => "drop",
            Direction::Rotate => "rotate",
        }
    }
}

/// Colors a piece (and the grid slots it freezes into) can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Yellow,
    Blue,
    Magenta,
    Red,
    Cyan,
    Orange,
}

/// Content of one grid slot
///
/// - `None`: empty
/// - `Some(Color)`: occupied by a frozen cell of that color
pub type Slot = Option<Color>;

/// The seven piece shapes.
///
/// Declaration order is the index order used when a shape is drawn from a
/// random source: S, Square, Reverse-L, T, Reverse-S, Straight, L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// ```text
    ///  ##
    /// ##
    /// ```
    S,
    /// ```text
    /// ##
    /// ##
    /// ```
    Square,
    /// ```text
    ///  #
    ///  #
    /// ##
    /// ```
    ReverseL,
    /// ```text
    /// ###
    ///  #
    /// ```
    T,
    /// ```text
    /// ##
    ///  ##
    /// ```
    ReverseS,
    /// ```text
    /// ####
    /// ```
    Straight,
    /// ```text
    /// #
    /// #
    /// ##
    /// ```
    L,
}

impl Shape {
    pub const ALL: [Shape; SHAPE_COUNT] = [
        Shape::S,
        Shape::Square,
        Shape::ReverseL,
        Shape::T,
        Shape::ReverseS,
        Shape::Straight,
        Shape::L,
    ];

    /// Shape for a random index in `[0, SHAPE_COUNT)`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Shape::S => 0,
            Shape::Square => 1,
            Shape::ReverseL => 2,
            Shape::T => 3,
            Shape::ReverseS => 4,
            Shape::Straight => 5,
            Shape::L => 6,
        }
    }

    /// The single color shared by every cell of this shape.
    pub fn color(&self) -> Color {
        match self {
            Shape::S => Color::Green,
            Shape::Square => Color::Yellow,
            Shape::ReverseL => Color::Blue,
            Shape::T => Color::Magenta,
            Shape::ReverseS => Color::Red,
            Shape::Straight => Color::Cyan,
            Shape::L => Color::Orange,
        }
    }

    /// Parse shape from string (case-insensitive)
    ///
    /// ```
    /// use tetris_pivot_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("reverse-l"), Some(Shape::ReverseL));
    /// assert_eq!(Shape::from_str("Square"), Some(Shape::Square));
    /// assert_eq!(Shape::from_str("pentomino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(Shape::S),
            "square" => Some(Shape::Square),
            "reverse-l" => Some(Shape::ReverseL),
            "t" => Some(Shape::T),
            "reverse-s" => Some(Shape::ReverseS),
            "straight" => Some(Shape::Straight),
            "l" => Some(Shape::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::S => "s",
            Shape::Square => "square",
            Shape::ReverseL => "reverse-l",
            Shape::T => "t",
            Shape::ReverseS => "reverse-s",
            Shape::Straight => "straight",
            Shape::L => "l",
        }
    }
}
