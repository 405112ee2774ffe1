use crate::domain::car::Tag;
use crate::domain::sequence::{CarArena, TrackSequence};

/// One siding of the yard. Capacity is fixed when the yard is built.
#[derive(Debug, PartialEq, Eq)]
pub struct Track {
    /// 1-based track number as shown to the operator
    pub(crate) index: usize,
    pub(crate) capacity: usize,
    pub(crate) contents: TrackSequence,
}

impl Track {
    pub fn new(index: usize, capacity: usize, contents: TrackSequence) -> Self {
        Self {
            index,
            capacity,
            contents,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contents(&self) -> &TrackSequence {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn free_space(&self) -> usize {
        self.capacity.saturating_sub(self.contents.len())
    }

    pub fn front_is_locomotive(&self, arena: &CarArena) -> bool {
        self.contents
            .front_tag(arena)
            .is_some_and(Tag::is_locomotive)
    }

    /// Cars behind the front car.
    pub fn trailing_len(&self) -> usize {
        self.contents.len().saturating_sub(1)
    }
}
