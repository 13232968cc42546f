//! # space-rover
//!
//! Command interpretation and movement engine for a rover on a bounded 2D grid.
//!
//! A command line such as `"FFRFF"` is checked against a configurable
//! [`CommandAlphabet`], then replayed one character at a time by a
//! [`RoverInterpreter`]. Each character is mapped through a fixed
//! (heading, command) [`transition`] table; translations are bounds-checked
//! against the [`Grid`] after every step, and the first failure is reported
//! with the offending character and its 1-based step.

pub mod commands;
pub mod config;
pub mod error;
pub mod grid;
pub mod heading;
pub mod interpreter;
pub mod pose;
pub mod report;

pub use commands::*;
pub use config::SpaceRoverConfig;
pub use error::{ConfigError, ExecutionError, FailureKind, Result, RoverError};
pub use grid::*;
pub use heading::*;
pub use interpreter::*;
pub use pose::*;
pub use report::*;
