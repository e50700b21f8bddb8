//! Reading clauses from their textual form, e.g. `A, -b ,C`.

use std::str::FromStr;

use crate::clause::Clause;
use crate::err::ParseError;
use crate::literal::encode;
use crate::types::Lit;

fn parse_item(item: &str) -> Result<Lit, ParseError> {
    let malformed = match item.as_bytes() {
        [] => true,
        [_] => false,
        [b'-', _] => false,
        _ => true,
    };
    if malformed {
        return Err(ParseError::MalformedItem(item.to_string()));
    }
    match encode(item) {
        Lit::ERROR => Err(ParseError::UnknownSymbol(item.to_string())),
        lit => Ok(lit),
    }
}

/// Parses a comma separated list of literals into a clause.
///
/// Items are trimmed and inserted in input order, so `A,-A` collapses to
/// the empty clause.
pub fn parse_clause(s: &str) -> Result<Clause, ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut clause = Clause::new();
    for item in s.split(',') {
        clause.insert(parse_item(item.trim())?);
    }
    Ok(clause)
}

/// Parses one clause per item, reporting the first item that fails.
pub fn parse_clauses<I, S>(items: I) -> Result<Vec<Clause>, (String, ParseError)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| parse_clause(s.as_ref()).map_err(|e| (s.as_ref().to_string(), e)))
        .collect()
}

impl FromStr for Clause {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Clause, ParseError> {
        parse_clause(s)
    }
}
