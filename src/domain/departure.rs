//! Detection of trains ready to leave the yard

use itertools::Itertools;

use crate::domain::car::Tag;
use crate::domain::sequence::CarArena;
use crate::domain::track::Track;

/// A train that left the yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    /// 1-based track number the train left from
    pub track: usize,
    /// Cars behind the locomotive
    pub car_count: usize,
    pub destination: Tag,
}

pub struct DepartureDetector;

impl DepartureDetector {
    /// A track departs when a locomotive at the front pulls at least one car
    /// and every car behind it carries the same destination.
    pub fn inspect(track: &Track, cars: &CarArena) -> Option<Departure> {
        if !track.front_is_locomotive(cars) {
            return None;
        }

        let trailing: Vec<Tag> = track
            .contents()
            .iter(cars)
            .skip(1)
            .map(|car| car.tag())
            .collect();
        let destination = *trailing.first()?;
        if !trailing.iter().all_equal() {
            return None;
        }

        Some(Departure {
            track: track.index(),
            car_count: track.trailing_len(),
            destination,
        })
    }
}
