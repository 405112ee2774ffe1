//! Railyard shunting simulator
//!
//! Tracks hold ordered runs of cars. A locomotive at the front of a track can
//! pull some of the cars behind it onto the front of another track; a train
//! whose cars all share one destination departs and leaves the yard.
//!
//! Layers, innermost first: [`domain`] (the engine), [`application`]
//! (layout loading, session loop, reporting), [`infrastructure`] (filesystem
//! boundary, service wiring) and [`cli`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{MoveError, MoveOutcome, Railyard};
