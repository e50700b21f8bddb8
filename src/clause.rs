use std::fmt;

use crate::types::{Lit, Sign, Var, MAX_VAR};
use crate::util::unsigned_sort;

/// A disjunction of literals, stored as one bitmap per polarity.
///
/// Bit `k - 1` of `pos` (resp. `neg`) is set iff the literal `k` (resp. `-k`)
/// is a member. `insert` never leaves a bit set in both halves, so a clause
/// never holds a literal together with its negation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Clause {
    pos : u32,
    neg : u32,
}

/// Outcome of resolving two clauses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// exactly one complementary pair was cut; may be the empty clause
    Resolvent(Clause),
    /// no complementary pair, the union of both clauses
    Union(Clause),
    /// two or more complementary pairs
    Tautology,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolvent(_))
    }

    // (clause or nil, resolved) as the resolution step is usually stated.
    pub fn into_parts(self) -> (Option<Clause>, bool) {
        match self {
            Resolution::Resolvent(c) => (Some(c), true),
            Resolution::Union(c) => (Some(c), false),
            Resolution::Tautology => (None, false),
        }
    }
}

fn vars(mask: u32) -> impl Iterator<Item = Var> {
    (1..=MAX_VAR)
        .map(Var::from_u32)
        .filter(move |v| mask & v.bit() != 0)
}

impl Clause {
    pub fn new() -> Clause {
        Clause { pos: 0, neg: 0 }
    }

    fn half(&self, sign: Sign) -> u32 {
        match sign {
            Sign::Pos => self.pos,
            Sign::Neg => self.neg,
        }
    }

    fn half_mut(&mut self, sign: Sign) -> &mut u32 {
        match sign {
            Sign::Pos => &mut self.pos,
            Sign::Neg => &mut self.neg,
        }
    }

    pub fn contains(&self, lit: Lit) -> bool {
        lit.is_valid() && self.half(lit.sign()) & lit.var().bit() != 0
    }

    pub fn len(&self) -> usize {
        (self.pos.count_ones() + self.neg.count_ones()) as usize
    }

    /// The empty clause, i.e. the contradiction.
    pub fn is_empty(&self) -> bool {
        self.pos == 0 && self.neg == 0
    }

    /// Adds `lit` to the clause.
    ///
    /// Returns `true` only if `lit` was added. If the negation of `lit` is a
    /// member it is removed instead and `false` is returned; a literal that is
    /// already present, or an invalid one, leaves the clause untouched.
    pub fn insert(&mut self, lit: Lit) -> bool {
        if !lit.is_valid() {
            return false;
        }
        let bit = lit.var().bit();
        let opposite = self.half_mut(lit.neg().sign());
        if *opposite & bit != 0 {
            *opposite &= !bit;
            return false;
        }
        let own = self.half_mut(lit.sign());
        if *own & bit != 0 {
            return false;
        }
        *own |= bit;
        true
    }

    // positive literals first, then negative, each by variable.
    pub fn lits(&self) -> Vec<Lit> {
        vars(self.pos)
            .map(|v| Lit::new(v, Sign::Pos))
            .chain(vars(self.neg).map(|v| Lit::new(v, Sign::Neg)))
            .collect()
    }

    /// Resolves `self` against `other`.
    ///
    /// Equivalent to inserting every literal of `self` into a copy of `other`
    /// and counting the complementary collapses, but the collapses are read
    /// off the bitmaps at once, so the outcome does not depend on any
    /// iteration order.
    pub fn resolve(&self, other: &Clause) -> Resolution {
        let cut = (self.pos & other.neg) | (self.neg & other.pos);
        let pos = (self.pos | other.pos) & !cut;
        let neg = (self.neg | other.neg) & !cut;
        match cut.count_ones() {
            0 => Resolution::Union(Clause { pos, neg }),
            1 => Resolution::Resolvent(Clause { pos, neg }),
            _ => Resolution::Tautology,
        }
    }
}

impl FromIterator<Lit> for Clause {
    fn from_iter<I: IntoIterator<Item = Lit>>(iter: I) -> Clause {
        let mut clause = Clause::new();
        for lit in iter {
            clause.insert(lit);
        }
        clause
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lits = self.lits();
        unsigned_sort(&mut lits);
        write!(f, "{{")?;
        for (i, lit) in lits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, "}}")
    }
}
