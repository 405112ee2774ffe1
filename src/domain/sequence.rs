//! Track sequences backed by a shared car arena
//!
//! Each track owns one [`TrackSequence`]: a singly linked run of cars whose
//! nodes live in the yard's [`CarArena`]. Links are never exposed. Cars change
//! owner only through [`TrackSequence::split_after`] and
//! [`TrackSequence::prepend_chain`], and the detached [`Chain`] is consumed by
//! the latter, so no two sequences can share a node.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::car::{Car, Tag};
use crate::domain::error::SequenceError;

#[derive(Debug)]
struct CarNode {
    car: Car,
    next: Option<Index>,
}

/// Arena storage for every car in the yard.
#[derive(Debug)]
pub struct CarArena {
    arena: Arena<CarNode>,
}

impl Default for CarArena {
    fn default() -> Self {
        Self::new()
    }
}

impl CarArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Number of cars still alive in the yard.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    fn insert(&mut self, car: Car, next: Option<Index>) -> Index {
        self.arena.insert(CarNode { car, next })
    }

    fn node(&self, idx: Index) -> Result<&CarNode, SequenceError> {
        self.arena.get(idx).ok_or(SequenceError::DanglingLink)
    }

    fn node_mut(&mut self, idx: Index) -> Result<&mut CarNode, SequenceError> {
        self.arena.get_mut(idx).ok_or(SequenceError::DanglingLink)
    }
}

/// Contiguous run of cars detached from a track, front first.
///
/// A chain is not `Clone`: handing it to [`TrackSequence::prepend_chain`]
/// transfers its cars to the receiving track.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct Chain {
    head: Index,
    tail: Index,
    len: usize,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Ordered cars on one track. The front abuts the track's throat.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TrackSequence {
    head: Option<Index>,
    len: usize,
}

impl TrackSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from cars given front to rear.
    pub fn from_front_to_rear<I>(arena: &mut CarArena, cars: I) -> Self
    where
        I: IntoIterator<Item = Car>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut head = None;
        let mut len = 0;
        for car in cars.into_iter().rev() {
            head = Some(arena.insert(car, head));
            len += 1;
        }
        Self { head, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self, arena: &CarArena) -> Option<Car> {
        let head = self.head?;
        arena.node(head).ok().map(|node| node.car)
    }

    pub fn front_tag(&self, arena: &CarArena) -> Option<Tag> {
        self.front(arena).map(|car| car.tag())
    }

    /// Detaches the front `k + 1` cars (a locomotive and `k` trailing cars).
    ///
    /// The remainder stays in `self` and becomes the track's new contents.
    #[instrument(level = "trace", skip(self, arena))]
    pub fn split_after(&mut self, k: usize, arena: &mut CarArena) -> Result<Chain, SequenceError> {
        let requested = k + 1;
        let head = match self.head {
            Some(head) if requested <= self.len => head,
            _ => {
                return Err(SequenceError::ChainTooShort {
                    requested,
                    available: self.len,
                })
            }
        };

        let mut tail = head;
        for _ in 0..k {
            tail = arena.node(tail)?.next.ok_or(SequenceError::DanglingLink)?;
        }
        let remainder = arena.node_mut(tail)?.next.take();

        self.head = remainder;
        self.len -= requested;
        Ok(Chain {
            head,
            tail,
            len: requested,
        })
    }

    /// Attaches `chain` at the front; its front car becomes the new front.
    #[instrument(level = "trace", skip(self, arena))]
    pub fn prepend_chain(&mut self, chain: Chain, arena: &mut CarArena) -> Result<(), SequenceError> {
        arena.node_mut(chain.tail)?.next = self.head;
        self.head = Some(chain.head);
        self.len += chain.len;
        Ok(())
    }

    /// Destroys every car in the sequence. Returns how many were removed.
    #[instrument(level = "trace", skip(self, arena))]
    pub fn clear(&mut self, arena: &mut CarArena) -> usize {
        let mut removed = 0;
        let mut cursor = self.head.take();
        while let Some(idx) = cursor {
            cursor = arena.arena.remove(idx).and_then(|node| node.next);
            removed += 1;
        }
        self.len = 0;
        removed
    }

    /// Cars from front to rear.
    pub fn iter<'a>(&self, arena: &'a CarArena) -> SequenceIter<'a> {
        SequenceIter {
            arena,
            cursor: self.head,
        }
    }

    /// Tags from front to rear.
    pub fn tags(&self, arena: &CarArena) -> Vec<Tag> {
        self.iter(arena).map(|car| car.tag()).collect()
    }
}

pub struct SequenceIter<'a> {
    arena: &'a CarArena,
    cursor: Option<Index>,
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = Car;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.node(self.cursor?).ok()?;
        self.cursor = node.next;
        Some(node.car)
    }
}
