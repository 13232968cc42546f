//! Command alphabet, command-line validation and the movement transition table.

use crate::heading::{Axis, Heading};
use serde::{Deserialize, Serialize};

/// The four things a rover can be told to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Forward,
        Command::Backward,
        Command::Left,
        Command::Right,
    ];

    fn index(self) -> usize {
        match self {
            Self::Forward => 0,
            Self::Backward => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

/// The characters that spell each [`Command`] in a command line.
///
/// Matching is exact and case-sensitive. Distinctness of the four characters
/// is checked by [`SpaceRoverConfig::validate`](crate::config::SpaceRoverConfig::validate),
/// not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandAlphabet {
    pub forward: char,
    pub backward: char,
    pub left: char,
    pub right: char,
}

impl Default for CommandAlphabet {
    fn default() -> Self {
        Self {
            forward: 'F',
            backward: 'B',
            left: 'L',
            right: 'R',
        }
    }
}

impl CommandAlphabet {
    /// Maps a character to its command, or `None` if it is not part of the alphabet.
    pub fn resolve(&self, symbol: char) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|&command| self.symbol(command) == symbol)
    }

    /// The character assigned to `command`.
    pub fn symbol(&self, command: Command) -> char {
        match command {
            Command::Forward => self.forward,
            Command::Backward => self.backward,
            Command::Left => self.left,
            Command::Right => self.right,
        }
    }

    /// Returns `true` iff `command_line` is non-empty and made only of alphabet characters.
    ///
    /// Purely lexical: bounds and reachability are not considered.
    pub fn is_valid(&self, command_line: &str) -> bool {
        !command_line.is_empty() && command_line.chars().all(|c| self.resolve(c).is_some())
    }
}

/// What a command does to a pose for a given heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Move one step along `axis`, scaled by `sign` (`1.0` or `-1.0`).
    Translate { axis: Axis, sign: f64 },
    /// Face the given heading; position is unchanged.
    Rotate(Heading),
}

const fn forward(heading: Heading) -> Transition {
    Transition::Translate {
        axis: heading.axis(),
        sign: heading.sense(),
    }
}

const fn backward(heading: Heading) -> Transition {
    Transition::Translate {
        axis: heading.axis(),
        sign: -heading.sense(),
    }
}

const fn row(heading: Heading) -> [Transition; 4] {
    [
        forward(heading),
        backward(heading),
        Transition::Rotate(heading.left()),
        Transition::Rotate(heading.right()),
    ]
}

// Rows: North, South, East, West. Columns: Forward, Backward, Left, Right.
const TRANSITIONS: [[Transition; 4]; 4] = [
    row(Heading::North),
    row(Heading::South),
    row(Heading::East),
    row(Heading::West),
];

/// Looks up the effect of `command` while facing `heading`.
pub fn transition(heading: Heading, command: Command) -> Transition {
    let row = match heading {
        Heading::North => 0,
        Heading::South => 1,
        Heading::East => 2,
        Heading::West => 3,
    };
    TRANSITIONS[row][command.index()]
}
