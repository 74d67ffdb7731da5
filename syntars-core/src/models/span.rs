use std::fmt::{self, Display};

use crate::errors::MatchError;

/// A genome coordinate. Projection arithmetic is done in `i64` internally so
/// that deletion offsets can dip negative mid-computation.
pub type Coord = u64;

/// Which genome's coordinate space a coordinate or span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenomeSpace {
    Reference,
    Query,
}

impl GenomeSpace {
    #[inline]
    pub fn opposite(&self) -> GenomeSpace {
        match self {
            GenomeSpace::Reference => GenomeSpace::Query,
            GenomeSpace::Query => GenomeSpace::Reference,
        }
    }
}

impl Display for GenomeSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenomeSpace::Reference => write!(f, "reference"),
            GenomeSpace::Query => write!(f, "query"),
        }
    }
}

/// A half-open interval `[start, end)` in one genome's coordinate space.
///
/// Construction rejects inverted bounds; a span with `start == end` is a
/// null interval, which the resolution engine produces transiently while
/// splitting and purges at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: Coord,
    pub end: Coord,
}

impl Span {
    pub fn new(start: Coord, end: Coord) -> Result<Self, MatchError> {
        if end < start {
            return Err(MatchError::InvertedSpan { start, end });
        }
        Ok(Span { start, end })
    }

    #[inline]
    pub fn len(&self) -> Coord {
        self.end - self.start
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.start == self.end
    }

    /// Whether this span fully contains `[start, end)`, not merely overlaps it.
    #[inline]
    pub fn contains(&self, start: Coord, end: Coord) -> bool {
        self.start <= start && self.end >= end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_rejects_inverted() {
        let err = Span::new(10, 5).unwrap_err();
        assert_eq!(err, MatchError::InvertedSpan { start: 10, end: 5 });
    }

    #[test]
    fn test_null_span() {
        let s = Span::new(7, 7).unwrap();
        assert_eq!(s.is_null(), true);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_contains_is_full_containment() {
        let s = Span::new(100, 200).unwrap();
        assert_eq!(s.contains(100, 200), true);
        assert_eq!(s.contains(120, 180), true);
        assert_eq!(s.contains(90, 150), false);
        assert_eq!(s.contains(150, 250), false);
    }
}
