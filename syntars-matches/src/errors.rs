use thiserror::Error;

use syntars_core::models::{GenomeSpace, Span};
use syntars_core::MatchError;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(
        "overlap resolution did not converge in {space} space after {steps} steps; \
         still unresolved around [{left}] / [{right}]"
    )]
    Unresolved {
        space: GenomeSpace,
        left: Span,
        right: Span,
        steps: usize,
    },

    #[error(transparent)]
    Match(#[from] MatchError),
}
