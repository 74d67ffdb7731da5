use std::cmp;

use fxhash::FxHashMap;

use syntars_core::MatchError;
use syntars_core::models::{Coord, GenomeSpace, Match, Span, Strand};

use crate::errors::ResolveError;
use crate::index::{IndexEntry, IntervalIndex};

/// Stable identity handle for a match inside a [`MatchSet`].
///
/// Assigned once at insertion and never reused, so a match can be relocated
/// after a re-sort without confusing equal-valued but distinct matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchId(pub(crate) u64);

/// An ordered sequence of matches plus one interval index per genome space.
///
/// The sequence and the two indexes are one logical data structure: every
/// replace or insert updates all three before any subsequent query runs.
/// Matches that are null in either space stay in the sequence (the
/// positional scan in [`resolve_overlaps`](MatchSet::resolve_overlaps)
/// depends on them) but are never indexed; they are removed by
/// [`purge_null_intervals`](MatchSet::purge_null_intervals) once resolution
/// is complete.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    entries: Vec<(MatchId, Match)>,
    ref_index: IntervalIndex,
    qry_index: IntervalIndex,
    positions: FxHashMap<MatchId, usize>,
    next_id: u64,
}

impl MatchSet {
    /// Build a set from an initial list of matches, typically parsed from
    /// strand-normalized alignment output.
    pub fn new(matches: Vec<Match>) -> Self {
        let mut set = MatchSet::default();
        for m in matches {
            let id = set.alloc_id();
            set.add_to_indexes(id, &m);
            set.entries.push((id, m));
        }
        set.rebuild_positions();
        set
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.entries.iter().map(|(_, m)| m)
    }

    /// Consume the set, yielding the match sequence in its current order.
    pub fn into_matches(self) -> Vec<Match> {
        self.entries.into_iter().map(|(_, m)| m).collect()
    }

    fn alloc_id(&mut self) -> MatchId {
        let id = MatchId(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_for(&self, space: GenomeSpace) -> &IntervalIndex {
        match space {
            GenomeSpace::Reference => &self.ref_index,
            GenomeSpace::Query => &self.qry_index,
        }
    }

    fn add_to_indexes(&mut self, id: MatchId, m: &Match) {
        // null-in-either matches are placeholders, never indexed
        if m.is_null() {
            return;
        }
        self.ref_index.insert(IndexEntry {
            span: m.ref_span,
            opposite: m.qry_span,
            strand: m.strand,
            id,
        });
        self.qry_index.insert(IndexEntry {
            span: m.qry_span,
            opposite: m.ref_span,
            strand: m.strand,
            id,
        });
    }

    fn remove_from_indexes(&mut self, id: MatchId) {
        self.ref_index.remove(id);
        self.qry_index.remove(id);
    }

    fn rebuild_positions(&mut self) {
        self.positions.clear();
        for (pos, (id, _)) in self.entries.iter().enumerate() {
            self.positions.insert(*id, pos);
        }
    }

    fn rebuild_indexes(&mut self) {
        self.ref_index = IntervalIndex::new();
        self.qry_index = IntervalIndex::new();
        let entries: Vec<(MatchId, Match)> = self.entries.clone();
        for (id, m) in &entries {
            self.add_to_indexes(*id, m);
        }
    }

    /// Replace the match at `pos`, assigning the replacement a fresh id.
    pub fn replace(&mut self, pos: usize, m: Match) -> MatchId {
        let old_id = self.entries[pos].0;
        self.remove_from_indexes(old_id);
        self.positions.remove(&old_id);

        let id = self.alloc_id();
        self.add_to_indexes(id, &m);
        self.entries[pos] = (id, m);
        self.positions.insert(id, pos);
        id
    }

    /// Insert a match at `pos`, shifting later entries right.
    pub fn insert(&mut self, pos: usize, m: Match) -> MatchId {
        let id = self.alloc_id();
        self.add_to_indexes(id, &m);
        self.entries.insert(pos, (id, m));
        self.rebuild_positions();
        id
    }

    /// Reorder the sequence ascending by `(start, end)` in the chosen space.
    pub fn sort(&mut self, space: GenomeSpace) {
        self.entries.sort_by_key(|(_, m)| {
            let span = m.span(space);
            (span.start, span.end)
        });
        self.rebuild_positions();
    }

    /// Every match whose span in `space` fully contains `[start, end)`,
    /// as index entries carrying both spans, the strand, and the stable id.
    /// A null query span matches nothing.
    pub fn contain_interval(&self, start: Coord, end: Coord, space: GenomeSpace) -> Vec<IndexEntry> {
        self.index_for(space).containing(start, end)
    }

    /// Discard every match with zero length in either space. Terminal
    /// cleanup only: during resolution the null placeholders are
    /// load-bearing.
    pub fn purge_null_intervals(&mut self) {
        self.entries.retain(|(_, m)| !m.is_null());
        self.rebuild_indexes();
        self.rebuild_positions();
    }

    /// Project the scan-space overlap between the matches at `i` and `i+1`
    /// through each of the two matches independently, producing two
    /// (possibly different) opposite-space claims on the overlap. When one
    /// match is fully contained in the other, the overlap is clipped to the
    /// contained one first. Reverse orientation flips the projected
    /// endpoints.
    pub fn find_opposite_overlaps(
        &self,
        i: usize,
        scan_space: GenomeSpace,
    ) -> Result<(Match, Match), MatchError> {
        let a = &self.entries[i].1;
        let b = &self.entries[i + 1].1;
        let a_span = a.span(scan_space);
        let b_span = b.span(scan_space);

        let start = b_span.start;
        let end = cmp::min(a_span.end, b_span.end);

        let wrap = |m: &Match| -> Result<Match, MatchError> {
            let p_start = m.project(start, scan_space)?;
            let p_end = m.project(end, scan_space)?;
            let opposite = match m.strand {
                Strand::Forward => Span::new(p_start, p_end)?,
                Strand::Reverse => Span::new(p_end, p_start)?,
            };
            oriented(scan_space, Span::new(start, end)?, opposite, m.strand)
        };

        Ok((wrap(a)?, wrap(b)?))
    }

    /// Split the identified match, known to fully contain `piece` in
    /// `split_space`, into up to three pieces. `boundary` is the
    /// caller-supplied scan-space pair `(end_of(i), start_of(i+1))`; it is
    /// orientation-normalized and clamped into the parent's scan-space span,
    /// so the three pieces exactly partition the parent in both spaces.
    ///
    /// Pieces are written in ascending scan-space order, which is what keeps
    /// the resolution walk's positions valid: the first piece is written
    /// back even when degenerate, the middle piece is always inserted, and
    /// the last piece is dropped only when null in both spaces.
    pub fn split_match(
        &mut self,
        id: MatchId,
        piece: Span,
        boundary: (Coord, Coord),
        split_space: GenomeSpace,
    ) -> Result<(), MatchError> {
        // a missing id means the sequence and indexes desynced, which has no
        // legitimate external cause
        let pos = self.positions[&id];
        let parent = self.entries[pos].1.clone();
        let scan_space = split_space.opposite();

        let x = parent.span(split_space);
        let o = parent.span(scan_space);
        debug_assert!(
            x.contains(piece.start, piece.end),
            "split target does not contain the piece span"
        );

        let (b_lo, b_hi) = if boundary.0 <= boundary.1 {
            (boundary.0, boundary.1)
        } else {
            (boundary.1, boundary.0)
        };
        let lo = b_lo.clamp(o.start, o.end);
        let hi = b_hi.clamp(o.start, o.end);

        // scan-space ascending order; reverse strand maps the early
        // split-space remainder to the late scan-space sub-range
        let (first_x, last_x) = match parent.strand {
            Strand::Forward => (Span::new(x.start, piece.start)?, Span::new(piece.end, x.end)?),
            Strand::Reverse => (Span::new(piece.end, x.end)?, Span::new(x.start, piece.start)?),
        };
        let first = oriented(split_space, first_x, Span::new(o.start, lo)?, parent.strand)?;
        let mid = oriented(split_space, piece, Span::new(lo, hi)?, parent.strand)?;
        let last = oriented(split_space, last_x, Span::new(hi, o.end)?, parent.strand)?;

        let last_is_empty = last_x.is_null() && hi == o.end;
        if first_x.is_null() && o.start == lo {
            // fully degenerate left remainder: the middle piece takes the
            // parent's position so the positional walk stays valid
            self.replace(pos, mid);
            if !last_is_empty {
                self.insert(pos + 1, last);
            }
        } else {
            self.replace(pos, first);
            self.insert(pos + 1, mid);
            if !last_is_empty {
                self.insert(pos + 2, last);
            }
        }
        Ok(())
    }

    /// Iteratively split matches until no two of them overlap by more than
    /// `tolerance` in either genome space, modulo declared multiplicity
    /// (identical-span pairs). Runs a query-space pass and then a
    /// reference-space pass, since resolving in one space can leave or
    /// reintroduce overlaps in the other.
    ///
    /// Each pass carries a step budget of `64 + 16 ×` its starting length;
    /// exceeding it reports the unresolved pair instead of looping.
    pub fn resolve_overlaps(&mut self, tolerance: Coord) -> Result<(), ResolveError> {
        self.resolve_pass(GenomeSpace::Query, tolerance)?;
        self.resolve_pass(GenomeSpace::Reference, tolerance)?;
        Ok(())
    }

    fn resolve_pass(&mut self, space: GenomeSpace, tolerance: Coord) -> Result<(), ResolveError> {
        self.sort(space);

        let budget = 64 + 16 * self.len();
        let mut steps = 0usize;
        let mut i = 0usize;

        while i + 1 < self.len() {
            steps += 1;
            let a_span = self.entries[i].1.span(space);
            let b_span = self.entries[i + 1].1.span(space);
            if steps > budget {
                return Err(ResolveError::Unresolved {
                    space,
                    left: a_span,
                    right: b_span,
                    steps,
                });
            }

            let not_null = !a_span.is_null() && !b_span.is_null();
            // identical spans mark a multi-copy region, exempt from resolution
            let multiplicity = a_span == b_span;
            let overlap = a_span.end.saturating_sub(b_span.start);
            if !not_null || multiplicity || overlap <= tolerance {
                i += 1;
                continue;
            }

            let contained = b_span.end < a_span.end;
            let boundary = (a_span.end, b_span.start);
            let (ov_a, ov_b) = self.find_opposite_overlaps(i, space)?;

            let split_space = space.opposite();
            for ov in [ov_a, ov_b] {
                let ov_span = ov.span(split_space);
                for target in self.contain_interval(ov_span.start, ov_span.end, split_space) {
                    self.split_match(target.id, ov_span, boundary, split_space)?;
                }
            }

            if contained {
                // splitting may have invalidated positions past i; re-sort,
                // relocate whatever now occupies i, and resume there so
                // nested overlaps are not skipped
                let id = self.entries[i].0;
                self.sort(space);
                i = self.positions[&id];
            } else {
                i += 1;
            }
        }
        Ok(())
    }
}

fn oriented(
    space: GenomeSpace,
    span: Span,
    opposite: Span,
    strand: Strand,
) -> Result<Match, MatchError> {
    match space {
        GenomeSpace::Reference => Match::new(span, opposite, strand, Vec::new()),
        GenomeSpace::Query => Match::new(opposite, span, strand, Vec::new()),
    }
}
