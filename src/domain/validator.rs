//! Precondition checks for `move` commands
//!
//! Checks run in a fixed order and stop at the first failure, so a command
//! that is wrong in several ways always reports the same error.

use tracing::debug;

use crate::domain::command::MoveCommand;
use crate::domain::error::MoveError;
use crate::domain::railyard::Railyard;

/// A move that passed every check. Track positions are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

pub struct MoveValidator;

impl MoveValidator {
    pub fn validate(yard: &Railyard, command: &MoveCommand) -> Result<ValidatedMove, MoveError> {
        let MoveCommand { count, from, to } = *command;

        let (from_pos, to_pos) = match (position(yard, from), position(yard, to)) {
            (Some(f), Some(t)) => (f, t),
            _ => {
                debug!(from, to, tracks = yard.len(), "track number out of range");
                return Err(MoveError::TrackIndexOutOfRange {
                    from,
                    to,
                    tracks: yard.len(),
                });
            }
        };

        let cars = yard.cars();
        let source = &yard.tracks()[from_pos];
        let target = &yard.tracks()[to_pos];

        if !source.front_is_locomotive(cars) {
            return Err(MoveError::NoLocomotiveOnSource {
                from: source.index(),
            });
        }

        if target.front_is_locomotive(cars) {
            return Err(MoveError::LocomotiveAlreadyAtDestination { to: target.index() });
        }

        if count > source.trailing_len() {
            return Err(MoveError::InsufficientCarsOnSource {
                count,
                from: source.index(),
                available: source.trailing_len(),
            });
        }

        // The train plus the cars already there must leave one slot unused:
        // count + 1 + len <= capacity - 1.
        if count + 2 > target.free_space() {
            return Err(MoveError::InsufficientSpaceAtDestination {
                count,
                to: target.index(),
                capacity: target.capacity(),
            });
        }

        Ok(ValidatedMove {
            count,
            from: from_pos,
            to: to_pos,
        })
    }
}

fn position(yard: &Railyard, number: i64) -> Option<usize> {
    let number = usize::try_from(number).ok()?;
    (1..=yard.len()).contains(&number).then(|| number - 1)
}
