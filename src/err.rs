//! Errors surfaced while reading clauses.
//!
//! The resolution engine itself has no failure modes; these all come from
//! user input and carry the offending item so it can be reported as typed.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The whole clause string was empty.
    #[error("input is empty")]
    Empty,

    /// An item is empty, longer than two characters, or has a misplaced `-`.
    #[error("wrong clause format: {0:?}")]
    MalformedItem(String),

    /// An item has the right shape but its letter is not in `A`..`Z`.
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(String),
}
