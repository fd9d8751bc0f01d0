//! The four walking directions, and [`PerDirection`] tables keyed by them.
use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

/// A walking direction. Screen coordinates grow rightwards and downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Right,
    Left,
    Up,
    Down,
}

/// Which coordinate a [`Direction`] moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Direction {
    /// Every direction, in button order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The lowercase name used for button labels and asset file names.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::Right | Direction::Left => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
        }
    }

    /// `true` when walking this way increases the coordinate.
    pub const fn is_forward(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    const fn slot(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction {:?}", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "right" => Ok(Direction::Right),
            "left" => Ok(Direction::Left),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(UnknownDirection(other.to_owned())),
        }
    }
}

/// A table holding exactly one value per [`Direction`].
///
/// There is no way to build one with a direction missing, so lookups never fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerDirection<T>([T; 4]);

impl<T> PerDirection<T> {
    /// Builds a table by calling `f` once for every direction.
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self([
            f(Direction::Right),
            f(Direction::Left),
            f(Direction::Up),
            f(Direction::Down),
        ])
    }

    /// Iterates `(direction, value)` pairs in button order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().map(move |d| (d, &self[d]))
    }
}

impl<T: Clone> PerDirection<T> {
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<Direction> for PerDirection<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        &self.0[direction.slot()]
    }
}

impl<T> IndexMut<Direction> for PerDirection<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        &mut self.0[direction.slot()]
    }
}
