//! Configuration loading and startup validation.

use crate::commands::CommandAlphabet;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::heading::Heading;
use crate::interpreter::{RoverConfig, RoverInterpreter};
use crate::pose::Pose;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Character used for a command key that is missing from the file.
pub const UNSET_COMMAND: char = '\0';

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct SpaceRoverConfig {
    pub grid: GridConfig,
    pub rover: RoverSettings,
}

/// Grid dimensions
#[derive(Clone, Debug, Deserialize)]
pub struct GridConfig {
    pub width: f64,
    pub height: f64,
}

/// Rover parameters
#[derive(Clone, Debug, Deserialize)]
pub struct RoverSettings {
    /// Distance covered by one forward/backward command (default: 1.0)
    #[serde(default = "default_step_size")]
    pub step_size: f64,

    /// Starting position and heading
    pub position: PositionConfig,

    #[serde(default)]
    pub commands: CommandsConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PositionConfig {
    pub x: f64,
    pub y: f64,
    pub direction: Heading,
}

/// Command characters. Keys left out of the file stay unset and fail validation.
#[derive(Clone, Debug, Deserialize)]
pub struct CommandsConfig {
    #[serde(default = "unset_command")]
    pub forward: char,
    #[serde(default = "unset_command")]
    pub backward: char,
    #[serde(default = "unset_command")]
    pub left: char,
    #[serde(default = "unset_command")]
    pub right: char,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            forward: UNSET_COMMAND,
            backward: UNSET_COMMAND,
            left: UNSET_COMMAND,
            right: UNSET_COMMAND,
        }
    }
}

fn default_step_size() -> f64 {
    1.0
}
fn unset_command() -> char {
    UNSET_COMMAND
}

impl Default for SpaceRoverConfig {
    fn default() -> Self {
        let alphabet = CommandAlphabet::default();
        Self {
            grid: GridConfig {
                width: 5.0,
                height: 5.0,
            },
            rover: RoverSettings {
                step_size: default_step_size(),
                position: PositionConfig {
                    x: 0.0,
                    y: 0.0,
                    direction: Heading::North,
                },
                commands: CommandsConfig {
                    forward: alphabet.forward,
                    backward: alphabet.backward,
                    left: alphabet.left,
                    right: alphabet.right,
                },
            },
        }
    }
}

impl SpaceRoverConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from TOML text. No rules are checked here.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Every configuration rule this file breaks, in rule order.
    ///
    /// Rules: grid size non-negative, command characters set, command
    /// characters distinct, start position non-negative, step size positive.
    /// Duplicates are only reported once every character is set.
    pub fn violations(&self) -> Vec<ConfigError> {
        let mut violations = Vec::new();

        // Negated comparisons so NaN is rejected too.
        if !(self.grid.width >= 0.0 && self.grid.height >= 0.0) {
            violations.push(ConfigError::NegativeGrid);
        }

        let c = &self.rover.commands;
        let symbols = [c.forward, c.backward, c.left, c.right];
        if symbols.contains(&UNSET_COMMAND) {
            violations.push(ConfigError::UnsetCommands);
        } else {
            let distinct = symbols
                .iter()
                .enumerate()
                .all(|(i, a)| symbols[i + 1..].iter().all(|b| a != b));
            if !distinct {
                violations.push(ConfigError::DuplicateCommands);
            }
        }

        let p = &self.rover.position;
        if !(p.x >= 0.0 && p.y >= 0.0) {
            violations.push(ConfigError::NegativePosition);
        }

        if !(self.rover.step_size > 0.0) {
            violations.push(ConfigError::NonPositiveStep);
        }

        violations
    }

    /// Checks the configuration rules.
    ///
    /// Stops at the first broken rule; use [`violations`](Self::violations)
    /// to list all of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// The grid described by the `[grid]` table.
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid.width, self.grid.height)
    }

    /// Interpreter settings from the `[rover]` table, taken as-is.
    pub fn rover_config(&self) -> RoverConfig {
        let c = &self.rover.commands;
        let p = &self.rover.position;
        RoverConfig {
            alphabet: CommandAlphabet {
                forward: c.forward,
                backward: c.backward,
                left: c.left,
                right: c.right,
            },
            start: Pose::new(p.x, p.y, p.direction),
            step_size: self.rover.step_size,
        }
    }

    /// Validates the configuration and builds the interpreter it describes.
    pub fn build_interpreter(&self) -> Result<RoverInterpreter, ConfigError> {
        self.validate()?;
        Ok(RoverInterpreter::new(self.rover_config(), self.grid()))
    }
}
