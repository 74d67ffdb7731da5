//! Block-ID assignment over a resolved match list.
//!
//! Once overlap resolution has produced a disjoint set of matches, each
//! surviving match becomes one synteny block with an integer identifier.
//! Matches that share an identical reference span (multi-copy regions)
//! share one identifier; regions of either genome not covered by any block
//! get fresh identifiers of their own. The per-genome block sequences are
//! rendered in the unimog gene-order format consumed by rearrangement
//! distance tooling: signed identifiers in genome order, terminated by `)`.

pub mod blocks;

// re-exports
pub use self::blocks::{assign_blocks, Block, BlockAssignment, BlockMap, unimog_record};
