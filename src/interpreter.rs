//! Interpreter that replays a command line against a rover [`Pose`].
//!
//! The entry point is [`RoverInterpreter`]. Build it from a [`RoverConfig`] and a
//! [`Grid`], check input with [`RoverInterpreter::is_valid`], then call
//! [`RoverInterpreter::execute`] (or [`RoverInterpreter::run`] to do both).

use crate::commands::{CommandAlphabet, Transition, transition};
use crate::error::{ExecutionError, Result, RoverError};
use crate::grid::Grid;
use crate::pose::Pose;
use tracing::{debug, trace};

/// Configuration for rover interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct RoverConfig {
    /// Characters recognised as commands.
    pub alphabet: CommandAlphabet,
    /// Pose every execution starts from.
    pub start: Pose,
    /// Distance covered by one translating command. Must be positive.
    pub step_size: f64,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            alphabet: CommandAlphabet::default(),
            start: Pose::default(),
            step_size: 1.0,
        }
    }
}

/// Executes command lines for a single rover on a fixed grid.
///
/// Holds only immutable configuration; every call works on its own [`Pose`],
/// so one interpreter can serve any number of callers.
#[derive(Clone, Debug)]
pub struct RoverInterpreter {
    config: RoverConfig,
    grid: Grid,
}

impl RoverInterpreter {
    /// Creates an interpreter for `config` on `grid`.
    ///
    /// Nothing is validated here; build through
    /// [`SpaceRoverConfig::build_interpreter`](crate::config::SpaceRoverConfig::build_interpreter)
    /// to have the configuration rules checked first.
    pub fn new(config: RoverConfig, grid: Grid) -> Self {
        Self { config, grid }
    }

    /// The configuration every execution starts from.
    pub fn config(&self) -> &RoverConfig {
        &self.config
    }

    /// The grid translations are checked against.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Checks `command_line` against the configured alphabet.
    pub fn is_valid(&self, command_line: &str) -> bool {
        self.config.alphabet.is_valid(command_line)
    }

    /// Validates and executes `command_line` from the configured starting pose.
    ///
    /// Returns [`RoverError::InvalidInput`] without moving the rover when the
    /// line contains characters outside the alphabet (or is empty).
    pub fn run(&self, command_line: &str) -> Result<Pose> {
        if !self.is_valid(command_line) {
            return Err(RoverError::InvalidInput {
                command_line: command_line.to_owned(),
            });
        }
        Ok(self.execute(command_line)?)
    }

    /// Executes `command_line` from the configured starting pose.
    pub fn execute(&self, command_line: &str) -> std::result::Result<Pose, ExecutionError> {
        self.execute_from(command_line, self.config.start)
    }

    /// Executes `command_line` starting from `start`.
    ///
    /// Characters are processed in order. Each is resolved through the
    /// alphabet and looked up in the transition table for the current
    /// heading. After every translation the new position is checked against
    /// the grid; rotations are never checked. The first failure aborts the
    /// line and reports the offending character with its 1-based step.
    pub fn execute_from(
        &self,
        command_line: &str,
        start: Pose,
    ) -> std::result::Result<Pose, ExecutionError> {
        let mut pose = start;

        for (i, symbol) in command_line.chars().enumerate() {
            let step = i + 1;

            let Some(command) = self.config.alphabet.resolve(symbol) else {
                debug!(command = %symbol, step, "unsupported command");
                return Err(ExecutionError::UnsupportedCommand {
                    command: symbol,
                    step,
                });
            };

            match transition(pose.heading, command) {
                Transition::Translate { axis, sign } => {
                    pose.translate(axis, sign * self.config.step_size);
                    if let Some(axis) = self.grid.violated_axis(pose.position) {
                        debug!(
                            command = %symbol,
                            step,
                            x = pose.x(),
                            y = pose.y(),
                            "rover left the grid"
                        );
                        return Err(ExecutionError::OutOfBounds {
                            command: symbol,
                            step,
                            axis,
                        });
                    }
                }
                Transition::Rotate(heading) => pose.rotate(heading),
            }

            trace!(step, x = pose.x(), y = pose.y(), heading = %pose.heading, "step");
        }

        Ok(pose)
    }
}
