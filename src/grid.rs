//! The rectangular area a rover may occupy.

use crate::heading::Axis;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Legal rover coordinates: `[0, width]` x `[0, height]`, both ends inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub width: f64,
    pub height: f64,
}

impl Grid {
    /// Creates a grid spanning `[0, width]` x `[0, height]`.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when `(x, y)` lies on or inside the grid boundary.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        within(x, self.width) && within(y, self.height)
    }

    /// The first axis (X before Y) on which `point` falls outside the grid.
    pub fn violated_axis(&self, point: DVec2) -> Option<Axis> {
        if !within(point.x, self.width) {
            Some(Axis::X)
        } else if !within(point.y, self.height) {
            Some(Axis::Y)
        } else {
            None
        }
    }
}

fn within(value: f64, max: f64) -> bool {
    (0.0..=max).contains(&value)
}
