//! Domain-level errors

use std::fmt;

use thiserror::Error;

/// Field of a `move` command that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandField {
    Count,
    From,
    To,
}

impl fmt::Display for CommandField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandField::Count => "count",
            CommandField::From => "from-track",
            CommandField::To => "to-track",
        };
        f.write_str(name)
    }
}

/// Reasons a `move` command is rejected.
///
/// Every variant is recoverable: the yard is left untouched and the session
/// continues. Variants are listed in the order the checks run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(
        "The only valid command formats are (where each X represents an integer):\nmove X X X\nquit"
    )]
    MalformedCommand { input: String },

    #[error("Could not convert the '{field}' value to an integer: '{value}'")]
    NotAnInteger { field: CommandField, value: String },

    #[error("The to-track or from-track number is invalid.")]
    TrackIndexOutOfRange { from: i64, to: i64, tracks: usize },

    #[error("Cannot move from track {from} because it doesn't have a locomotive.")]
    NoLocomotiveOnSource { from: usize },

    #[error("Cannot move to track {to} because it already has a locomotive.")]
    LocomotiveAlreadyAtDestination { to: usize },

    #[error("Cannot move {count} cars from track {from} because it doesn't have that many cars.")]
    InsufficientCarsOnSource {
        count: usize,
        from: usize,
        available: usize,
    },

    #[error("Cannot move {count} cars to track {to} because it doesn't have enough space.")]
    InsufficientSpaceAtDestination {
        count: usize,
        to: usize,
        capacity: usize,
    },

    /// Track storage rejected a splice that passed validation.
    #[error("yard storage error: {0}")]
    Splice(#[from] SequenceError),
}

/// Errors raised while parsing a yard layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout contains no tracks")]
    Empty,

    #[error("line {line}: track must start and end with '-': {text:?}")]
    MissingTrackEnds { line: usize, text: String },

    #[error("line {line}: free space must precede all cars: {text:?}")]
    GapBetweenCars { line: usize, text: String },

    #[error("line {line}: invalid car tag {tag:?}")]
    InvalidTag { line: usize, tag: char },

    #[error("line {line}: locomotive must be the front car of its track: {text:?}")]
    MisplacedLocomotive { line: usize, text: String },
}

/// Precondition violations on a single track sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("cannot detach {requested} cars from a sequence of {available}")]
    ChainTooShort { requested: usize, available: usize },

    #[error("sequence link points at a car that no longer exists")]
    DanglingLink,
}
