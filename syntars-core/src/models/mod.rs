pub mod alignment;
pub mod indel;
pub mod span;
pub mod strand;

// re-export for cleaner imports
pub use self::alignment::Match;
pub use self::indel::{Indel, IndelKind};
pub use self::span::{Coord, GenomeSpace, Span};
pub use self::strand::Strand;
