use thiserror::Error;

use crate::models::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("inverted span: end {end} < start {start}")]
    InvertedSpan { start: Coord, end: Coord },

    #[error(
        "indel [{indel_start}, {indel_end}) falls outside the owning match span [{span_start}, {span_end})"
    )]
    IndelOutOfBounds {
        indel_start: Coord,
        indel_end: Coord,
        span_start: Coord,
        span_end: Coord,
    },

    #[error("coordinate {coord} cannot be projected from span [{start}, {end}]")]
    ProjectionOutOfRange {
        coord: Coord,
        start: Coord,
        end: Coord,
    },

    #[error("cannot parse strand from: {0}")]
    StrandParseError(String),

    #[error("cannot parse indel kind from: {0}")]
    IndelKindParseError(String),
}
