//! Saturation of a clause set under single-step resolution.
//!
//! The driver repeatedly resolves pairs of clauses and appends every new
//! resolvent, until either the empty clause shows up (the set is
//! unsatisfiable) or a pass adds nothing (the set is saturated, hence
//! satisfiable). After the first pass only pairs involving at least one
//! clause from the previous pass are tried; the index of the first such
//! clause is the frontier.

use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use crate::clause::{Clause, Resolution};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State { Scanning, Extended, Saturated, Refuted, }

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Saturated | State::Refuted)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict { Unsatisfiable, Satisfiable, }

impl Verdict {
    pub fn is_unsat(self) -> bool {
        self == Verdict::Unsatisfiable
    }
}

// `[ ]` is the empty clause, i.e. a refutation was found.
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Unsatisfiable => write!(f, "[ ]"),
            Verdict::Satisfiable => write!(f, "[x]"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub passes      : usize,
    pub pairs       : usize,
    pub resolvents  : usize,
    pub duplicates  : usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "passes: {}, pairs: {}, resolvents: {}, duplicates: {}",
            self.passes, self.pairs, self.resolvents, self.duplicates)
    }
}

#[derive(Debug)]
pub struct Saturation {
    clauses     : Vec<Clause>,
    seen        : HashSet<Clause>,  // every clause in `clauses`
    frontier    : usize,
    state       : State,
    stats       : Stats,
}

impl Saturation {
    pub fn new(clauses: Vec<Clause>) -> Saturation {
        Saturation::with_frontier(clauses, 0)
    }

    /// Starts with pairs `(i, k)` restricted to `k >= frontier`, as if the
    /// clauses below `frontier` had already been closed under resolution.
    pub fn with_frontier(clauses: Vec<Clause>, frontier: usize) -> Saturation {
        let seen = clauses.iter().copied().collect();
        Saturation {
            clauses,
            seen,
            frontier,
            state: State::Scanning,
            stats: Stats::default(),
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn frontier(&self) -> usize {
        self.frontier
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    // appends `clause` unless an equal one is already present.
    fn add(&mut self, clause: Clause) -> bool {
        if !self.seen.insert(clause) {
            self.stats.duplicates += 1;
            return false;
        }
        self.clauses.push(clause);
        self.stats.resolvents += 1;
        true
    }

    /// Runs a single pass over the pairs not yet tried and returns the new
    /// state. Does nothing once a terminal state has been reached.
    pub fn step(&mut self) -> State {
        if self.state.is_terminal() {
            return self.state;
        }
        self.state = State::Scanning;

        if self.clauses.iter().any(Clause::is_empty) {
            self.state = State::Refuted;
            return self.state;
        }

        self.stats.passes += 1;
        let size = self.clauses.len();

        // resolvents appended during the pass are paired within the same pass
        for i in (0..size).rev() {
            for k in (self.frontier..self.clauses.len()).rev() {
                if i == k {
                    continue;
                }
                self.stats.pairs += 1;
                let (left, right) = (self.clauses[i], self.clauses[k]);
                trace!("trying {left} and {right}");
                if let Resolution::Resolvent(resolvent) = left.resolve(&right) {
                    if self.add(resolvent) {
                        debug!("resolving: {left} + {right} = {resolvent}");
                        if resolvent.is_empty() {
                            self.state = State::Refuted;
                            return self.state;
                        }
                    }
                }
            }
        }

        if self.clauses.len() == size {
            debug!("pass {} added nothing, saturated with {} clauses", self.stats.passes, size);
            self.state = State::Saturated;
        } else {
            debug!("pass {} added {} clauses", self.stats.passes, self.clauses.len() - size);
            self.frontier = size;
            self.state = State::Extended;
        }
        self.state
    }

    /// Saturates the clause set, stopping early on the empty clause.
    pub fn run(&mut self) -> Verdict {
        loop {
            match self.step() {
                State::Refuted => return Verdict::Unsatisfiable,
                State::Saturated => return Verdict::Satisfiable,
                State::Scanning | State::Extended => {}
            }
        }
    }
}

/// Whether `set` is unsatisfiable, considering only pairs with at least one
/// clause at or above `frontier`.
pub fn res(set: &[Clause], frontier: usize) -> bool {
    Saturation::with_frontier(set.to_vec(), frontier).run().is_unsat()
}
