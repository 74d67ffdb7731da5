use syntars_core::models::{Coord, Span, Strand};

use crate::match_set::MatchId;

/// One indexed match span in a single genome space, carrying a copy of the
/// opposite-space span and strand plus the stable id of the owning match.
/// Entries are copies, not aliases; the [`MatchSet`](crate::MatchSet)
/// re-derives them whenever the sequence changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub span: Span,
    pub opposite: Span,
    pub strand: Strand,
    pub id: MatchId,
}

/// An interval index over match spans in one genome space.
///
/// Keeps entries sorted by `(start, end)` together with the length of the
/// longest indexed span, so a containment query only has to scan the window
/// of entries whose start lies within that bound of the query start. Built
/// for the small, mutation-heavy collections the resolution engine works
/// on: insertion and removal are `O(n)`, queries scan a bounded window.
#[derive(Debug, Clone, Default)]
pub struct IntervalIndex {
    entries: Vec<IndexEntry>,
    max_len: Coord,
}

impl IntervalIndex {
    pub fn new() -> Self {
        IntervalIndex::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, keeping the `(start, end)` order.
    pub fn insert(&mut self, entry: IndexEntry) {
        let key = (entry.span.start, entry.span.end);
        let pos = self
            .entries
            .partition_point(|e| (e.span.start, e.span.end) < key);
        if entry.span.len() > self.max_len {
            self.max_len = entry.span.len();
        }
        self.entries.insert(pos, entry);
    }

    /// Remove the entry for the given match id, if present. `max_len` is
    /// left untouched; it only needs to stay an upper bound.
    pub fn remove(&mut self, id: MatchId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Every entry whose span fully contains `[start, end)`. A null query
    /// span matches nothing.
    pub fn containing(&self, start: Coord, end: Coord) -> Vec<IndexEntry> {
        if start >= end {
            return Vec::new();
        }
        let window_start = start.saturating_sub(self.max_len);
        let lo = self.entries.partition_point(|e| e.span.start < window_start);

        let mut hits = Vec::new();
        for entry in &self.entries[lo..] {
            if entry.span.start > start {
                break;
            }
            if entry.span.contains(start, end) {
                hits.push(entry.clone());
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn entry(start: Coord, end: Coord, id: u64) -> IndexEntry {
        IndexEntry {
            span: Span::new(start, end).unwrap(),
            opposite: Span::new(start + 1000, end + 1000).unwrap(),
            strand: Strand::Forward,
            id: MatchId(id),
        }
    }

    #[fixture]
    fn index() -> IntervalIndex {
        let mut index = IntervalIndex::new();
        index.insert(entry(100, 200, 1));
        index.insert(entry(150, 400, 2));
        index.insert(entry(300, 350, 3));
        index
    }

    #[rstest]
    fn test_containing_finds_full_containment_only(index: IntervalIndex) {
        let hits = index.containing(160, 190);
        let ids: Vec<u64> = hits.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 2]);

        // overlapping but not containing
        let hits = index.containing(190, 250);
        let ids: Vec<u64> = hits.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2]);
    }

    #[rstest]
    fn test_containing_null_query_is_empty(index: IntervalIndex) {
        assert_eq!(index.containing(160, 160).is_empty(), true);
    }

    #[rstest]
    fn test_containing_exact_bounds(index: IntervalIndex) {
        let hits = index.containing(300, 350);
        let ids: Vec<u64> = hits.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[rstest]
    fn test_remove(mut index: IntervalIndex) {
        assert_eq!(index.remove(MatchId(2)), true);
        assert_eq!(index.remove(MatchId(2)), false);
        assert_eq!(index.containing(160, 190).len(), 1);
    }
}
