use std::fmt::Write as FmtWrite;

use fxhash::FxHashMap;

use syntars_core::models::{Coord, Match, Span};

/// One synteny block in a single genome: a span and a signed identifier.
/// The sign carries the block's orientation relative to the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub span: Span,
    pub id: i64,
}

/// The blocks of one genome, kept in ascending span order.
#[derive(Debug, Clone, Default)]
pub struct BlockMap {
    blocks: Vec<Block>,
}

impl BlockMap {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn push(&mut self, span: Span, id: i64) {
        let key = (span.start, span.end);
        let pos = self
            .blocks
            .partition_point(|b| (b.span.start, b.span.end) < key);
        self.blocks.insert(pos, Block { span, id });
    }

    /// Allocate fresh identifiers for every uncovered gap of at least
    /// `min_len` bases in `[0, genome_len)`, including the leading and
    /// trailing gap. Returns the next free identifier.
    pub fn fill_unmatched(&mut self, genome_len: Coord, min_len: Coord, mut next_id: i64) -> i64 {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for block in &self.blocks {
            if block.span.start > cursor && block.span.start - cursor >= min_len {
                gaps.push(Span {
                    start: cursor,
                    end: block.span.start,
                });
            }
            cursor = cursor.max(block.span.end);
        }
        if genome_len > cursor && genome_len - cursor >= min_len {
            gaps.push(Span {
                start: cursor,
                end: genome_len,
            });
        }

        for gap in gaps {
            self.push(gap, next_id);
            next_id += 1;
        }
        next_id
    }

    /// The unimog rendering of this genome: signed block identifiers in
    /// genome order, closed with `)` (plasmids are circular).
    pub fn unimog(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            let _ = write!(out, "{} ", block.id);
        }
        out.push(')');
        out
    }
}

/// Blocks for both genomes plus the next unallocated identifier.
#[derive(Debug, Clone, Default)]
pub struct BlockAssignment {
    pub reference: BlockMap,
    pub query: BlockMap,
    pub next_id: i64,
}

/// Assign one signed block per match of at least `min_len` bases in both
/// spaces. Matches sharing an identical reference span are copies of the
/// same block and share its identifier; the query side carries the strand
/// sign.
pub fn assign_blocks(matches: &[Match], min_len: Coord) -> BlockAssignment {
    let mut assignment = BlockAssignment {
        next_id: 1,
        ..Default::default()
    };
    let mut seen: FxHashMap<(Coord, Coord), i64> = FxHashMap::default();

    for m in matches {
        if m.ref_span.len() < min_len || m.qry_span.len() < min_len {
            continue;
        }
        let key = (m.ref_span.start, m.ref_span.end);
        let id = match seen.get(&key) {
            Some(id) => *id,
            None => {
                let id = assignment.next_id;
                assignment.next_id += 1;
                seen.insert(key, id);
                assignment.reference.push(m.ref_span, id);
                id
            }
        };
        assignment.query.push(m.qry_span, id * m.strand.sign());
    }
    assignment
}

/// The two-genome unimog record written for one genome pair:
/// a FASTA-style header naming the pair and the genome, then the block
/// sequence, for each genome in turn.
pub fn unimog_record(
    pair: &str,
    ref_name: &str,
    qry_name: &str,
    reference: &BlockMap,
    query: &BlockMap,
) -> String {
    format!(
        ">{pair}:{ref_name}\n{}\n>{pair}:{qry_name}\n{}\n",
        reference.unimog(),
        query.unimog()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use syntars_core::models::Strand;

    fn mk(rstart: Coord, rend: Coord, qstart: Coord, qend: Coord, strand: Strand) -> Match {
        Match::from_coords(rstart, rend, qstart, qend, strand, vec![]).unwrap()
    }

    #[fixture]
    fn resolved() -> Vec<Match> {
        vec![
            mk(100, 400, 1000, 1300, Strand::Forward),
            mk(400, 600, 2000, 2200, Strand::Reverse),
            // same reference span twice: a multi-copy region
            mk(600, 900, 1300, 1600, Strand::Forward),
            mk(600, 900, 2300, 2600, Strand::Forward),
            // too short to become a block
            mk(900, 920, 2600, 2620, Strand::Forward),
        ]
    }

    #[rstest]
    fn test_assign_blocks_shares_ids_for_duplicate_ref_spans(resolved: Vec<Match>) {
        let assignment = assign_blocks(&resolved, 50);

        let ref_ids: Vec<i64> = assignment.reference.blocks().iter().map(|b| b.id).collect();
        assert_eq!(ref_ids, vec![1, 2, 3]);

        let qry_ids: Vec<i64> = assignment.query.blocks().iter().map(|b| b.id).collect();
        // query order: 1000.., 1300.., 2000.., 2300..
        assert_eq!(qry_ids, vec![1, 3, -2, 3]);
        assert_eq!(assignment.next_id, 4);
    }

    #[rstest]
    fn test_short_matches_are_skipped(resolved: Vec<Match>) {
        let assignment = assign_blocks(&resolved, 50);
        let covered: Vec<(Coord, Coord)> = assignment
            .reference
            .blocks()
            .iter()
            .map(|b| (b.span.start, b.span.end))
            .collect();
        assert_eq!(covered, vec![(100, 400), (400, 600), (600, 900)]);
    }

    #[rstest]
    fn test_fill_unmatched_covers_gaps(resolved: Vec<Match>) {
        let mut assignment = assign_blocks(&resolved, 50);
        let next = assignment.reference.fill_unmatched(1000, 50, assignment.next_id);

        // leading gap [0, 100) and trailing gap [900, 1000)
        assert_eq!(next, 6);
        let blocks = assignment.reference.blocks();
        assert_eq!(blocks[0], Block {
            span: Span::new(0, 100).unwrap(),
            id: 4
        });
        assert_eq!(blocks[blocks.len() - 1], Block {
            span: Span::new(900, 1000).unwrap(),
            id: 5
        });
    }

    #[rstest]
    fn test_fill_unmatched_skips_short_gaps() {
        let mut map = BlockMap::default();
        map.push(Span::new(10, 500).unwrap(), 1);
        // leading gap of 10 is below the threshold, trailing gap qualifies
        let next = map.fill_unmatched(600, 50, 2);
        assert_eq!(next, 3);
        assert_eq!(map.len(), 2);
        assert_eq!(map.blocks()[1].span, Span::new(500, 600).unwrap());
    }

    #[rstest]
    fn test_unimog_rendering(resolved: Vec<Match>) {
        let assignment = assign_blocks(&resolved, 50);
        assert_eq!(assignment.reference.unimog(), "1 2 3 )");
        assert_eq!(assignment.query.unimog(), "1 3 -2 3 )");

        let record = unimog_record(
            "a~b",
            "a",
            "b",
            &assignment.reference,
            &assignment.query,
        );
        assert_eq!(record, ">a~b:a\n1 2 3 )\n>a~b:b\n1 3 -2 3 )\n");
    }
}
