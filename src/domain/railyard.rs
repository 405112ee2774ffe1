//! The yard: a fixed set of tracks and the cars standing on them

use std::collections::BTreeSet;

use tracing::{debug, info, instrument};

use crate::domain::car::Tag;
use crate::domain::command::MoveCommand;
use crate::domain::departure::{Departure, DepartureDetector};
use crate::domain::error::MoveError;
use crate::domain::layout::Layout;
use crate::domain::sequence::{CarArena, TrackSequence};
use crate::domain::track::Track;
use crate::domain::validator::{MoveValidator, ValidatedMove};

/// Result of a successful `move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// 1-based source track
    pub from: usize,
    /// 1-based destination track
    pub to: usize,
    pub count: usize,
    pub departure: Option<Departure>,
    /// Set when a departure took the last locomotive out of the yard
    pub yard_exhausted: bool,
}

/// Plain copy of one track's state, cars front to rear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSnapshot {
    pub index: usize,
    pub capacity: usize,
    pub cars: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YardSnapshot {
    pub tracks: Vec<TrackSnapshot>,
}

impl YardSnapshot {
    pub fn total_cars(&self) -> usize {
        self.tracks.iter().map(|t| t.cars.len()).sum()
    }

    /// Puts a departed train back on its track: the yard as it stood between
    /// the move and the departure.
    ///
    /// A departing track holds nothing but the train, so the locomotive and
    /// its uniform cars are all there was.
    pub fn with_train(mut self, departure: &Departure) -> Self {
        if let Some(track) = self.tracks.iter_mut().find(|t| t.index == departure.track) {
            track.cars = std::iter::once(Tag::LOCOMOTIVE)
                .chain(std::iter::repeat(departure.destination).take(departure.car_count))
                .collect();
        }
        self
    }
}

/// Owns every track and, through the arena, every car.
///
/// Only [`Railyard::execute_move`] changes track contents.
#[derive(Debug)]
pub struct Railyard {
    cars: CarArena,
    tracks: Vec<Track>,
}

impl Railyard {
    pub fn from_layout(layout: &Layout) -> Self {
        let mut cars = CarArena::new();
        let tracks = layout
            .tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let contents = TrackSequence::from_front_to_rear(&mut cars, track.cars.iter().copied());
                Track::new(i + 1, track.capacity, contents)
            })
            .collect();
        Self { cars, tracks }
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// 1-based track lookup.
    pub fn track(&self, number: usize) -> Option<&Track> {
        number.checked_sub(1).and_then(|i| self.tracks.get(i))
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn cars(&self) -> &CarArena {
        &self.cars
    }

    /// Tracks whose front car is a locomotive.
    pub fn locomotive_count(&self) -> usize {
        self.tracks
            .iter()
            .filter(|t| t.front_is_locomotive(&self.cars))
            .count()
    }

    /// Distinct destination tags anywhere in the yard.
    pub fn destinations(&self) -> BTreeSet<Tag> {
        self.tracks
            .iter()
            .flat_map(|t| t.contents().iter(&self.cars))
            .filter_map(|car| car.destination())
            .collect()
    }

    pub fn destination_count(&self) -> usize {
        self.destinations().len()
    }

    pub fn total_cars(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    /// True while at least one locomotive is left to move.
    pub fn should_continue(&self) -> bool {
        self.locomotive_count() > 0
    }

    pub fn snapshot(&self) -> YardSnapshot {
        YardSnapshot {
            tracks: self
                .tracks
                .iter()
                .map(|t| TrackSnapshot {
                    index: t.index(),
                    capacity: t.capacity(),
                    cars: t.contents().tags(&self.cars),
                })
                .collect(),
        }
    }

    /// Validate and perform a move, then check the destination for departure.
    ///
    /// On error the yard is unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn execute_move(&mut self, count: usize, from: i64, to: i64) -> Result<MoveOutcome, MoveError> {
        self.apply(&MoveCommand::new(count, from, to))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn apply(&mut self, command: &MoveCommand) -> Result<MoveOutcome, MoveError> {
        let validated = MoveValidator::validate(self, command).inspect_err(|e| {
            debug!(error = ?e, "move rejected");
        })?;
        self.splice(validated)?;

        let from = validated.from + 1;
        let to = validated.to + 1;
        info!(count = validated.count, from, to, "locomotive moved");

        let departure = self.depart(validated.to);
        let yard_exhausted = departure.is_some() && !self.should_continue();
        if yard_exhausted {
            info!("last locomotive has departed");
        }

        Ok(MoveOutcome {
            from,
            to,
            count: validated.count,
            departure,
            yard_exhausted,
        })
    }

    fn splice(&mut self, mv: ValidatedMove) -> Result<(), MoveError> {
        let chain = self.tracks[mv.from]
            .contents
            .split_after(mv.count, &mut self.cars)?;
        self.tracks[mv.to]
            .contents
            .prepend_chain(chain, &mut self.cars)?;
        Ok(())
    }

    fn depart(&mut self, position: usize) -> Option<Departure> {
        let track = &mut self.tracks[position];
        let departure = DepartureDetector::inspect(track, &self.cars)?;
        let destroyed = track.contents.clear(&mut self.cars);
        info!(
            track = departure.track,
            cars = departure.car_count,
            destination = %departure.destination,
            destroyed,
            "train departed"
        );
        Some(departure)
    }
}
