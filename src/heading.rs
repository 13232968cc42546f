//! Compass headings and the axes they translate along.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The compass direction a rover faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// All four headings, in declaration order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::South, Heading::East, Heading::West];

    /// The heading after a quarter turn to the left.
    ///
    /// Cycle: North -> West -> South -> East -> North.
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The heading after a quarter turn to the right (inverse of [`left`](Self::left)).
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The axis a translating command moves along while facing this heading.
    pub const fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Y,
            Self::East | Self::West => Axis::X,
        }
    }

    /// `1.0` when moving forward increases the coordinate on [`axis`](Self::axis), `-1.0` otherwise.
    pub const fn sense(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

/// A grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Unit vector pointing in the positive direction of this axis.
    pub fn unit(self) -> DVec2 {
        match self {
            Self::X => DVec2::X,
            Self::Y => DVec2::Y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::Y => "Y",
        })
    }
}
