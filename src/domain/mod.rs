//! Domain layer: the railyard engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod car;
pub mod command;
pub mod departure;
pub mod error;
pub mod layout;
pub mod railyard;
pub mod sequence;
pub mod track;
pub mod validator;

pub use car::{Car, Tag, EMPTY_SLOT, LOCOMOTIVE_TAG};
pub use command::{Command, MoveCommand};
pub use departure::{Departure, DepartureDetector};
pub use error::{CommandField, LayoutError, MoveError, SequenceError};
pub use layout::{Layout, TrackLayout};
pub use railyard::{MoveOutcome, Railyard, TrackSnapshot, YardSnapshot};
pub use sequence::{CarArena, Chain, TrackSequence};
pub use track::Track;
pub use validator::{MoveValidator, ValidatedMove};
