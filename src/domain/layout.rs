//! Yard layout text format
//!
//! One track per line, e.g. `---AB1T-`: the outer dashes are the track ends,
//! inner leading dashes are free space, and the cars follow. The rightmost car
//! sits at the throat and becomes the front of the sequence. Capacity is the
//! line length minus the two ends.

use crate::domain::car::{Car, Tag, EMPTY_SLOT};
use crate::domain::error::LayoutError;

/// Parsed description of a single track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLayout {
    pub capacity: usize,
    /// Cars ordered front (throat) to rear (stop)
    pub cars: Vec<Car>,
}

impl TrackLayout {
    /// Parse one layout line. `line` is the 1-based line number for errors.
    pub fn parse(line: usize, text: &str) -> Result<Self, LayoutError> {
        let text = text.trim();
        if text.len() < 2 || !text.starts_with(EMPTY_SLOT) || !text.ends_with(EMPTY_SLOT) {
            return Err(LayoutError::MissingTrackEnds {
                line,
                text: text.to_string(),
            });
        }

        let interior = &text[1..text.len() - 1];
        let capacity = interior.chars().count();
        let loaded = interior.trim_start_matches(EMPTY_SLOT);
        if loaded.contains(EMPTY_SLOT) {
            return Err(LayoutError::GapBetweenCars {
                line,
                text: text.to_string(),
            });
        }

        let cars = loaded
            .chars()
            .rev()
            .map(|symbol| {
                Tag::new(symbol)
                    .map(Car::new)
                    .ok_or(LayoutError::InvalidTag { line, tag: symbol })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cars.iter().skip(1).any(Car::is_locomotive) {
            return Err(LayoutError::MisplacedLocomotive {
                line,
                text: text.to_string(),
            });
        }

        Ok(Self { capacity, cars })
    }
}

/// Full yard description, tracks in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub tracks: Vec<TrackLayout>,
}

impl Layout {
    /// Parse layout file content. Blank lines are ignored.
    pub fn parse(content: &str) -> Result<Self, LayoutError> {
        let tracks = content
            .lines()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(i, text)| TrackLayout::parse(i + 1, text))
            .collect::<Result<Vec<_>, _>>()?;

        if tracks.is_empty() {
            return Err(LayoutError::Empty);
        }
        Ok(Self { tracks })
    }
}
