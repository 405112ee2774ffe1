//! Shared helpers for integration tests

#![allow(dead_code)]

use railyard::domain::{Command, Layout, MoveError, MoveOutcome, Railyard, Tag};

pub fn yard(text: &str) -> Railyard {
    Railyard::from_layout(&Layout::parse(text).expect("valid layout"))
}

/// Parse and apply one operator command.
pub fn apply(yard: &mut Railyard, input: &str) -> Result<MoveOutcome, MoveError> {
    match Command::parse(input)? {
        Command::Move(command) => yard.apply(&command),
        Command::Quit => panic!("quit is not a move: {input:?}"),
    }
}

/// Track contents front to rear as a string.
pub fn symbols(yard: &Railyard, number: usize) -> String {
    yard.track(number)
        .expect("track exists")
        .contents()
        .tags(yard.cars())
        .into_iter()
        .map(Tag::symbol)
        .collect()
}
