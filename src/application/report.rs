//! Text rendering of yard state and move results
//!
//! Tracks are drawn the way layouts are written: stop on the left, throat on
//! the right, so the front car is the rightmost symbol.

use crate::domain::{
    Departure, MoveError, MoveOutcome, Railyard, TrackSnapshot, YardSnapshot, EMPTY_SLOT,
};

pub const EXHAUSTED_LINE: &str = "The last locomotive has departed!";
pub const QUIT_LINE: &str = "Quitting!";

/// `"<n> : -"` + free slots + cars rear to front + `"-"`.
pub fn render_track(track: &TrackSnapshot) -> String {
    let free = track.capacity.saturating_sub(track.cars.len());
    let mut line = format!("{} : {}", track.index, EMPTY_SLOT);
    line.extend(std::iter::repeat(EMPTY_SLOT).take(free));
    line.extend(track.cars.iter().rev().map(|tag| tag.symbol()));
    line.push(EMPTY_SLOT);
    line
}

pub fn render_snapshot(snapshot: &YardSnapshot) -> String {
    snapshot
        .tracks
        .iter()
        .map(render_track)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_yard(yard: &Railyard) -> String {
    render_snapshot(&yard.snapshot())
}

pub fn summary(yard: &Railyard) -> String {
    format!(
        "Locomotive count: {}\nDestination count: {}",
        yard.locomotive_count(),
        yard.destination_count()
    )
}

pub fn move_line(outcome: &MoveOutcome) -> String {
    format!(
        "The locomotive on track {} moved {} cars to track {}.",
        outcome.from, outcome.count, outcome.to
    )
}

pub fn departure_line(departure: &Departure) -> String {
    format!(
        "*** ALERT***  The train on track {}, which had {} cars, departs for destination {}.",
        departure.track, departure.car_count, departure.destination
    )
}

pub fn error_line(error: &MoveError) -> String {
    format!("ERROR: {}", error)
}
