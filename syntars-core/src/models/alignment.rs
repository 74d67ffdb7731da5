use crate::errors::MatchError;
use crate::models::indel::Indel;
use crate::models::span::{Coord, GenomeSpace, Span};
use crate::models::strand::Strand;

/// A directional alignment between one reference span and one query span.
///
/// A match carries a strand and an ordered list of internal indels, and can
/// project any coordinate inside one of its spans into the other genome's
/// space. Matches produced by splitting carry no indels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub ref_span: Span,
    pub qry_span: Span,
    pub strand: Strand,
    pub indels: Vec<Indel>,
}

impl Match {
    /// Build a match, verifying that every indel lies within the owning
    /// spans on both sides. Malformed indels fail here rather than
    /// propagating into projection arithmetic.
    pub fn new(
        ref_span: Span,
        qry_span: Span,
        strand: Strand,
        indels: Vec<Indel>,
    ) -> Result<Self, MatchError> {
        for indel in &indels {
            if indel.ref_start < ref_span.start || indel.ref_end() > ref_span.end {
                return Err(MatchError::IndelOutOfBounds {
                    indel_start: indel.ref_start,
                    indel_end: indel.ref_end(),
                    span_start: ref_span.start,
                    span_end: ref_span.end,
                });
            }
            if indel.qry_start < qry_span.start || indel.qry_end() > qry_span.end {
                return Err(MatchError::IndelOutOfBounds {
                    indel_start: indel.qry_start,
                    indel_end: indel.qry_end(),
                    span_start: qry_span.start,
                    span_end: qry_span.end,
                });
            }
        }
        Ok(Match {
            ref_span,
            qry_span,
            strand,
            indels,
        })
    }

    /// Convenience constructor from raw coordinates; rejects inverted spans.
    pub fn from_coords(
        ref_start: Coord,
        ref_end: Coord,
        qry_start: Coord,
        qry_end: Coord,
        strand: Strand,
        indels: Vec<Indel>,
    ) -> Result<Self, MatchError> {
        Match::new(
            Span::new(ref_start, ref_end)?,
            Span::new(qry_start, qry_end)?,
            strand,
            indels,
        )
    }

    #[inline]
    pub fn span(&self, space: GenomeSpace) -> Span {
        match space {
            GenomeSpace::Reference => self.ref_span,
            GenomeSpace::Query => self.qry_span,
        }
    }

    /// A match is null when it has zero length in either space.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ref_span.is_null() || self.qry_span.is_null()
    }

    /// Project a coordinate from `source` space into the opposite space,
    /// consistent with this match's strand and internal indels.
    ///
    /// Coordinates inside an indel's source-side span collapse to the
    /// indel's opposite-side start (the gap is a single point on the far
    /// side). Indels strictly before the coordinate shift the projected
    /// distance by their length: forward for insertions, backward for
    /// deletions, in either projection direction. A coordinate outside the
    /// source span (inclusive of its end) is a caller error, as is a
    /// projection that underflows the coordinate system; neither is clamped.
    pub fn project(&self, coord: Coord, source: GenomeSpace) -> Result<Coord, MatchError> {
        let src = self.span(source);
        if coord < src.start || coord > src.end {
            return Err(MatchError::ProjectionOutOfRange {
                coord,
                start: src.start,
                end: src.end,
            });
        }
        let opp = self.span(source.opposite());

        let mut dist = (coord - src.start) as i64;
        for indel in &self.indels {
            if indel.start(source) <= coord && coord < indel.end(source) {
                return Ok(indel.start(source.opposite()));
            } else if indel.start(source) < coord {
                dist += indel.signed_len();
            }
        }

        let projected = match self.strand {
            Strand::Forward => opp.start as i64 + dist,
            Strand::Reverse => opp.end as i64 - dist,
        };
        Coord::try_from(projected).map_err(|_| MatchError::ProjectionOutOfRange {
            coord,
            start: src.start,
            end: src.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use crate::models::indel::IndelKind;

    #[fixture]
    fn plain() -> Match {
        Match::from_coords(100, 200, 500, 600, Strand::Forward, vec![]).unwrap()
    }

    #[rstest]
    fn test_projection_round_trip(plain: Match) {
        for c in 100..=200 {
            let q = plain.project(c, GenomeSpace::Reference).unwrap();
            let back = plain.project(q, GenomeSpace::Query).unwrap();
            assert_eq!(back, c);
        }
    }

    #[rstest]
    fn test_projection_reverse_strand() {
        let m = Match::from_coords(100, 200, 500, 600, Strand::Reverse, vec![]).unwrap();
        assert_eq!(m.project(100, GenomeSpace::Reference).unwrap(), 600);
        assert_eq!(m.project(200, GenomeSpace::Reference).unwrap(), 500);
        assert_eq!(m.project(150, GenomeSpace::Reference).unwrap(), 550);
        // and back the other way
        assert_eq!(m.project(600, GenomeSpace::Query).unwrap(), 100);
    }

    #[rstest]
    fn test_projection_out_of_range(plain: Match) {
        let err = plain.project(99, GenomeSpace::Reference).unwrap_err();
        assert_eq!(
            err,
            MatchError::ProjectionOutOfRange {
                coord: 99,
                start: 100,
                end: 200
            }
        );
        assert_eq!(plain.project(201, GenomeSpace::Reference).is_err(), true);
    }

    #[rstest]
    fn test_insertion_shifts_projection_forward() {
        // 10 extra query bases at ref position 120
        let ins = Indel::new(IndelKind::Insertion, 120, 520, 10);
        let m = Match::from_coords(100, 200, 500, 610, Strand::Forward, vec![ins]).unwrap();

        // before the indel: linear
        assert_eq!(m.project(110, GenomeSpace::Reference).unwrap(), 510);
        // after the indel: shifted ahead by its length
        assert_eq!(m.project(150, GenomeSpace::Reference).unwrap(), 560);
    }

    #[rstest]
    fn test_deletion_shifts_projection_backward() {
        let del = Indel::new(IndelKind::Deletion, 120, 520, 10);
        let m = Match::from_coords(100, 210, 500, 600, Strand::Forward, vec![del]).unwrap();

        assert_eq!(m.project(110, GenomeSpace::Reference).unwrap(), 510);
        assert_eq!(m.project(150, GenomeSpace::Reference).unwrap(), 540);
    }

    #[rstest]
    fn test_indel_interior_collapses_to_point() {
        let del = Indel::new(IndelKind::Deletion, 120, 520, 10);
        let m = Match::from_coords(100, 210, 500, 600, Strand::Forward, vec![del]).unwrap();

        // any coordinate inside the deleted ref range maps to the gap point
        assert_eq!(m.project(120, GenomeSpace::Reference).unwrap(), 520);
        assert_eq!(m.project(125, GenomeSpace::Reference).unwrap(), 520);
        assert_eq!(m.project(129, GenomeSpace::Reference).unwrap(), 520);
        // first coordinate past the indel resumes linearly, minus the gap
        assert_eq!(m.project(130, GenomeSpace::Reference).unwrap(), 520);
    }

    #[rstest]
    fn test_indel_outside_span_fails_fast() {
        let ins = Indel::new(IndelKind::Insertion, 90, 520, 10);
        let err = Match::from_coords(100, 200, 500, 610, Strand::Forward, vec![ins]).unwrap_err();
        assert_eq!(
            err,
            MatchError::IndelOutOfBounds {
                indel_start: 90,
                indel_end: 100,
                span_start: 100,
                span_end: 200
            }
        );
    }

    #[rstest]
    fn test_inverted_coordinates_fail_fast() {
        let err = Match::from_coords(200, 100, 500, 600, Strand::Forward, vec![]).unwrap_err();
        assert_eq!(
            err,
            MatchError::InvertedSpan {
                start: 200,
                end: 100
            }
        );
    }
}
