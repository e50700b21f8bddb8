//! Propositional resolution over clauses with at most 26 variables.
//!
//! Clauses are read from strings such as `A,-B,c`, closed under
//! single-step resolution, and the clause set is reported unsatisfiable
//! as soon as the empty clause is derived.

pub mod types;
pub mod literal;
pub mod clause;
pub mod err;
pub mod parse;
pub mod util;
pub mod resolution;

pub use clause::{Clause, Resolution};
pub use err::ParseError;
pub use parse::{parse_clause, parse_clauses};
pub use resolution::{res, Saturation, Verdict};
pub use types::{Lit, Sign, Var};
