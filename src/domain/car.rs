//! Cars and their tags

use std::fmt;

/// Reserved tag marking a locomotive.
pub const LOCOMOTIVE_TAG: char = 'T';

/// Symbol marking free track space in layouts and renderings.
pub const EMPTY_SLOT: char = '-';

/// Single-character car tag.
///
/// The alphabet is printable ASCII without whitespace and without the
/// free-space symbol `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(char);

impl Tag {
    pub const LOCOMOTIVE: Tag = Tag(LOCOMOTIVE_TAG);

    /// Returns `None` for characters outside the tag alphabet.
    pub fn new(symbol: char) -> Option<Self> {
        if symbol.is_ascii_graphic() && symbol != EMPTY_SLOT {
            Some(Self(symbol))
        } else {
            None
        }
    }

    pub fn symbol(self) -> char {
        self.0
    }

    pub fn is_locomotive(self) -> bool {
        self == Self::LOCOMOTIVE
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable unit of rolling stock. Cars are relocated, never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car {
    tag: Tag,
}

impl Car {
    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }

    pub fn locomotive() -> Self {
        Self::new(Tag::LOCOMOTIVE)
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_locomotive(&self) -> bool {
        self.tag.is_locomotive()
    }

    /// Destination tag, `None` for locomotives.
    pub fn destination(&self) -> Option<Tag> {
        if self.is_locomotive() {
            None
        } else {
            Some(self.tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_alphabet() {
        assert!(Tag::new('a').is_some());
        assert!(Tag::new('7').is_some());
        assert!(Tag::new('#').is_some());
        assert!(Tag::new('-').is_none());
        assert!(Tag::new(' ').is_none());
        assert!(Tag::new('\t').is_none());
        assert!(Tag::new('é').is_none());
    }

    #[test]
    fn test_locomotive_has_no_destination() {
        assert!(Car::locomotive().is_locomotive());
        assert_eq!(Car::locomotive().destination(), None);

        let tag = Tag::new('B').unwrap();
        assert_eq!(Car::new(tag).destination(), Some(tag));
    }
}
