use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::MatchError;
use crate::models::span::{Coord, GenomeSpace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndelKind {
    /// Extra bases present only in the query space.
    Insertion,
    /// Bases present in the reference space but absent from the query.
    Deletion,
}

impl FromStr for IndelKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INS" | "I" => Ok(IndelKind::Insertion),
            "DEL" | "D" => Ok(IndelKind::Deletion),
            _ => Err(MatchError::IndelKindParseError(s.to_string())),
        }
    }
}

impl Display for IndelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndelKind::Insertion => write!(f, "INS"),
            IndelKind::Deletion => write!(f, "DEL"),
        }
    }
}

/// A gap internal to a single match's alignment, recorded in both coordinate
/// spaces. Immutable once created; bounds are validated against the owning
/// match's spans when the match is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indel {
    pub kind: IndelKind,
    pub ref_start: Coord,
    pub qry_start: Coord,
    pub len: Coord,
}

impl Indel {
    pub fn new(kind: IndelKind, ref_start: Coord, qry_start: Coord, len: Coord) -> Self {
        Indel {
            kind,
            ref_start,
            qry_start,
            len,
        }
    }

    #[inline]
    pub fn ref_end(&self) -> Coord {
        self.ref_start + self.len
    }

    #[inline]
    pub fn qry_end(&self) -> Coord {
        self.qry_start + self.len
    }

    #[inline]
    pub fn start(&self, space: GenomeSpace) -> Coord {
        match space {
            GenomeSpace::Reference => self.ref_start,
            GenomeSpace::Query => self.qry_start,
        }
    }

    #[inline]
    pub fn end(&self, space: GenomeSpace) -> Coord {
        self.start(space) + self.len
    }

    /// Offset contribution when this indel lies before a projected
    /// coordinate: insertions push the opposite space ahead, deletions pull
    /// it back, independent of projection direction.
    #[inline]
    pub fn signed_len(&self) -> i64 {
        match self.kind {
            IndelKind::Insertion => self.len as i64,
            IndelKind::Deletion => -(self.len as i64),
        }
    }
}
