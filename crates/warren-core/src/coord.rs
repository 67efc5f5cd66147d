//! Lattice coordinates and the four cardinal directions.

use std::fmt;

/// A discrete 2D lattice address.
///
/// Coordinates are signed so that stepping off the grid produces a
/// representable (but out-of-bounds) address rather than wrapping;
/// bounds enforcement belongs to the graph, not the coordinate.
///
/// `Up` is +y: the bottom-left cell of a grid is `(0, 0)` and the top
/// row has `y == height - 1`.
///
/// # Examples
///
/// ```
/// use warren_core::{Direction, GridCoord};
///
/// let c = GridCoord::new(2, 3);
/// assert_eq!(c.step(Direction::Up), GridCoord::new(2, 4));
/// assert_eq!(c.step(Direction::Left), GridCoord::new(1, 3));
/// assert_eq!(c.to_string(), "(2, 3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column, increasing rightward.
    pub x: i32,
    /// Row, increasing upward.
    pub y: i32,
}

impl GridCoord {
    /// Create a coordinate from its column and row.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one cell away in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four cardinal directions on the lattice.
///
/// The discriminant is the canonical slot index used for neighbour
/// storage and scan order: up, right, down, left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +y.
    Up = 0,
    /// +x.
    Right = 1,
    /// -y.
    Down = 2,
    /// -x.
    Left = 3,
}

impl Direction {
    /// All four directions in scan order: up, right, down, left.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The unit offset `(dx, dy)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }

    /// The direction pointing the opposite way.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren_core::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// The canonical slot index (0..4) of this direction.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        write!(f, "{name}")
    }
}
