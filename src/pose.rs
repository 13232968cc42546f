//! Rover pose: position plus heading.

use crate::heading::{Axis, Heading};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Where the rover is and which way it faces.
///
/// A pose is a plain data holder. It never checks itself against a grid; the
/// interpreter decides whether a pose is legal after each translating step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Current position on the grid.
    pub position: DVec2,

    /// Current facing.
    pub heading: Heading,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: Heading::North,
        }
    }
}

impl Pose {
    /// Creates a pose at `(x, y)` facing `heading`.
    pub fn new(x: f64, y: f64, heading: Heading) -> Self {
        Self {
            position: DVec2::new(x, y),
            heading,
        }
    }

    /// Position on the X axis.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Position on the Y axis.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Faces the rover towards `heading` without moving it.
    pub fn rotate(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Moves the rover `distance` units along `axis` (negative values move backwards).
    pub fn translate(&mut self, axis: Axis, distance: f64) {
        self.position += axis.unit() * distance;
    }
}
