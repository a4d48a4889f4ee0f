//! Cell coordinates and the search directions used by the targeting AI.

use core::fmt;

/// A 1-based cell coordinate. `(1, 1)` is the top-left corner of the
/// board; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: the larger of the per-axis absolute
    /// differences. Distance 1 covers the eight surrounding cells.
    pub fn chebyshev(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of a directional search. Since `y` grows downwards,
/// `South` is `y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    West,
    South,
    East,
    North,
}

impl Direction {
    /// Axis-opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
        }
    }

    /// Next direction in the fixed cyclic order West, South, East, North.
    pub fn next(self) -> Self {
        match self {
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
            Direction::North => Direction::West,
        }
    }

    /// One step from `from`, or `None` when the step would leave the
    /// 1-based coordinate space. Upper board bounds are the caller's to
    /// check.
    pub fn step(self, from: Coord) -> Option<Coord> {
        match self {
            Direction::West => (from.x > 1).then(|| Coord::new(from.x - 1, from.y)),
            Direction::South => Some(Coord::new(from.x, from.y + 1)),
            Direction::East => Some(Coord::new(from.x + 1, from.y)),
            Direction::North => (from.y > 1).then(|| Coord::new(from.x, from.y - 1)),
        }
    }
}
