//! Operator command parsing

use std::num::IntErrorKind;

use crate::domain::error::{CommandField, MoveError};

/// Parsed `move <count> <from> <to>` request.
///
/// Track numbers are kept signed so that negative input is reported as an
/// out-of-range track rather than a parse failure. Integers too large for a
/// field saturate, which leaves them for the range and car-count checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    /// Cars behind the locomotive to take along
    pub count: usize,
    pub from: i64,
    pub to: i64,
}

impl MoveCommand {
    pub fn new(count: usize, from: i64, to: i64) -> Self {
        Self { count, from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(MoveCommand),
    Quit,
}

impl Command {
    /// Parse one line of operator input.
    ///
    /// Checks shape first, then `count`, `from` and `to` in that order; the
    /// first failure is returned.
    pub fn parse(input: &str) -> Result<Self, MoveError> {
        let fields: Vec<&str> = input.split_whitespace().collect();
        match fields.as_slice() {
            ["quit"] => Ok(Command::Quit),
            ["move", count, from, to] => {
                let count = parse_count(count)
                    .ok_or_else(|| not_an_integer(CommandField::Count, count))?;
                let from = parse_track(from)
                    .ok_or_else(|| not_an_integer(CommandField::From, from))?;
                let to = parse_track(to)
                    .ok_or_else(|| not_an_integer(CommandField::To, to))?;
                Ok(Command::Move(MoveCommand { count, from, to }))
            }
            _ => Err(MoveError::MalformedCommand {
                input: input.trim().to_string(),
            }),
        }
    }
}

fn parse_count(token: &str) -> Option<usize> {
    match token.parse::<usize>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(usize::MAX),
        Err(_) => None,
    }
}

fn parse_track(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn not_an_integer(field: CommandField, value: &str) -> MoveError {
    MoveError::NotAnInteger {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(
            Command::parse("move 2 1 3").unwrap(),
            Command::Move(MoveCommand::new(2, 1, 3))
        );
        assert_eq!(
            Command::parse("  move   0  4 -1 ").unwrap(),
            Command::Move(MoveCommand::new(0, 4, -1))
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(Command::parse(" quit ").unwrap(), Command::Quit);
    }

    #[test]
    fn test_shape_is_checked_before_fields() {
        for input in ["", "move", "move 1 2", "move 1 2 3 4", "shift 1 2 3", "quit now", "MOVE 1 1 2"] {
            assert!(
                matches!(Command::parse(input), Err(MoveError::MalformedCommand { .. })),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_first_unparsable_field_wins() {
        assert_eq!(
            Command::parse("move x y z").unwrap_err(),
            MoveError::NotAnInteger {
                field: CommandField::Count,
                value: "x".into()
            }
        );
        assert_eq!(
            Command::parse("move 1 y z").unwrap_err(),
            MoveError::NotAnInteger {
                field: CommandField::From,
                value: "y".into()
            }
        );
        assert_eq!(
            Command::parse("move 1 2 z").unwrap_err(),
            MoveError::NotAnInteger {
                field: CommandField::To,
                value: "z".into()
            }
        );
    }

    #[test]
    fn test_oversized_integers_saturate() {
        assert_eq!(
            Command::parse("move 99999999999999999999 1 2").unwrap(),
            Command::Move(MoveCommand::new(usize::MAX, 1, 2))
        );
        assert_eq!(
            Command::parse("move 1 -99999999999999999999 99999999999999999999").unwrap(),
            Command::Move(MoveCommand::new(1, i64::MIN, i64::MAX))
        );
        assert!(matches!(
            Command::parse("move 1 1 9999x"),
            Err(MoveError::NotAnInteger {
                field: CommandField::To,
                ..
            })
        ));
    }

    #[test]
    fn test_negative_count_is_not_a_count() {
        assert!(matches!(
            Command::parse("move -1 1 2"),
            Err(MoveError::NotAnInteger {
                field: CommandField::Count,
                ..
            })
        ));
    }
}
