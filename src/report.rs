//! Caller-facing shapes for execution results.

use crate::error::RoverError;
use crate::heading::Heading;
use crate::pose::Pose;
use serde::{Deserialize, Serialize};

/// Final pose as reported to callers: `{ "x": .., "y": .., "direction": .. }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseReport {
    pub x: f64,
    pub y: f64,
    pub direction: Heading,
}

impl From<Pose> for PoseReport {
    fn from(pose: Pose) -> Self {
        Self {
            x: pose.x(),
            y: pose.y(),
            direction: pose.heading,
        }
    }
}

/// Human-readable message for a failed run.
///
/// Execution failures carry their diagnostic pair, e.g.
/// `Rover left the grid on the Y axis. Command: F Step: 6`.
pub fn describe_failure(error: &RoverError) -> String {
    match error {
        RoverError::InvalidInput { command_line } if command_line.is_empty() => {
            "Command line can not be empty".to_owned()
        }
        RoverError::Execution(e) => format!("{e} Command: {} Step: {}", e.command(), e.step()),
        other => other.to_string(),
    }
}
