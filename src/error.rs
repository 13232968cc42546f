//! Error types for space-rover

use crate::heading::Axis;
use thiserror::Error;

/// Broad class of an execution failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The character has no transition for the current heading.
    UnsupportedCommand,
    /// A translating step left the grid. Belongs to the invalid-operation class.
    OutOfBounds,
}

/// Why a command line stopped executing.
///
/// `step` is the 1-based index of the offending character.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ExecutionError {
    #[error("Command is not supported.")]
    UnsupportedCommand { command: char, step: usize },

    #[error("Rover left the grid on the {axis} axis.")]
    OutOfBounds {
        command: char,
        step: usize,
        axis: Axis,
    },
}

impl ExecutionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::UnsupportedCommand { .. } => FailureKind::UnsupportedCommand,
            Self::OutOfBounds { .. } => FailureKind::OutOfBounds,
        }
    }

    pub fn command(&self) -> char {
        match self {
            Self::UnsupportedCommand { command, .. } | Self::OutOfBounds { command, .. } => {
                *command
            }
        }
    }

    pub fn step(&self) -> usize {
        match self {
            Self::UnsupportedCommand { step, .. } | Self::OutOfBounds { step, .. } => *step,
        }
    }
}

/// Startup configuration problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Grid height or width can not be negative")]
    NegativeGrid,

    #[error("Direction commands must be unique")]
    DuplicateCommands,

    #[error("Direction commands must be set")]
    UnsetCommands,

    #[error("Rover X and Y position can not be negative")]
    NegativePosition,

    #[error("Step size must be greater than 0")]
    NonPositiveStep,
}

/// space-rover error type
#[derive(Error, Debug)]
pub enum RoverError {
    #[error("Command contains invalid symbols")]
    InvalidInput { command_line: String },

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, RoverError>;
