//! Overlap resolution for pairwise genome alignment matches.
//!
//! Given a set of directional alignment matches between a reference and a
//! query genome, this crate iteratively splits matches until no two of them
//! overlap in either coordinate space by more than a tolerance, while
//! preserving the correspondence between the two genomes. The resulting
//! disjoint match list is what downstream block assignment consumes.
//!
//! The central type is [`MatchSet`]: an ordered sequence of matches plus one
//! interval index per genome space, kept consistent through every replace
//! and insert.
//!
//! # Quick start
//!
//! ```
//! use syntars_core::models::{Match, Strand};
//! use syntars_matches::MatchSet;
//!
//! let matches = vec![
//!     Match::from_coords(100, 300, 1000, 1200, Strand::Forward, vec![]).unwrap(),
//!     Match::from_coords(250, 400, 2000, 2150, Strand::Forward, vec![]).unwrap(),
//! ];
//!
//! let mut set = MatchSet::new(matches);
//! set.resolve_overlaps(0).unwrap();
//! set.purge_null_intervals();
//!
//! // no pair overlaps by more than the tolerance in either space anymore
//! assert!(set.len() >= 2);
//! ```

pub mod errors;
pub mod index;
pub mod match_set;

// re-exports
pub use self::errors::ResolveError;
pub use self::index::{IndexEntry, IntervalIndex};
pub use self::match_set::{MatchId, MatchSet};
