//! Core models for syntars: pairwise genome alignment matches.
//!
//! This crate holds the data model shared by the rest of the workspace:
//! coordinate spans, strand orientation, indels, and the [`Match`] type with
//! its indel-aware coordinate projection between the reference and query
//! genome spaces. The overlap-resolution engine that operates on collections
//! of matches lives in `syntars-matches`.
//!
//! # Example
//!
//! ```
//! use syntars_core::models::{GenomeSpace, Match, Strand};
//!
//! let m = Match::from_coords(100, 200, 500, 600, Strand::Forward, vec![]).unwrap();
//!
//! // project a reference coordinate into query space
//! let q = m.project(150, GenomeSpace::Reference).unwrap();
//! assert_eq!(q, 550);
//! ```

pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use self::errors::MatchError;
pub use self::models::{Coord, GenomeSpace, Indel, IndelKind, Match, Span, Strand};
