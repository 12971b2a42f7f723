//! # Canonical cycle form
//!
//! Every permutation has many cycle forms: `(abc)(de)`, `(ed)(bca)` and
//! `(cab)(de)` all describe the same mapping. The canonical form picks one of
//! them:
//!
//! 1. singletons are written explicitly (the input already does this, the
//!    domain being whatever symbols appear),
//! 2. every cycle is rotated so that its smallest symbol comes first,
//! 3. cycles are ordered by decreasing first symbol.
//!
//! The last rule makes the separator-free form unambiguous: a new cycle starts
//! exactly where a symbol is smaller than every symbol before it.

use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::{
    error::PermutationError,
    notation::{self, CLOSE, OPEN},
};

/// A permutation in canonical cycle form.
///
/// # Examples
///
/// ```
/// # use cyclenote::canonical::canonicalize;
/// let canonical = canonicalize("(316)(54)(2)").unwrap();
/// assert_eq!(canonical.to_string(), "(45)(2)(163)");
/// assert_eq!(canonical.without_parens(), "452163");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalForm {
    cycles: Vec<Vec<char>>,
}

impl CanonicalForm {
    /// The cycles in canonical order, each starting with its smallest symbol.
    pub fn cycles(&self) -> &[Vec<char>] {
        &self.cycles
    }

    /// Concatenation of all cycles, without parentheses.
    pub fn without_parens(&self) -> String {
        self.cycles.iter().flatten().collect()
    }

    /// Number of symbols the permutation acts on.
    pub fn len(&self) -> usize {
        self.cycles.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Whether every cycle is a fixed point.
    pub fn is_identity(&self) -> bool {
        self.cycles.iter().all(|cycle| cycle.len() == 1)
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cycle in &self.cycles {
            write!(f, "{OPEN}{}{CLOSE}", cycle.iter().collect::<String>())?;
        }
        Ok(())
    }
}

impl FromStr for CanonicalForm {
    type Err = PermutationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonicalize(s)
    }
}

/// Rewrites a cycle form into its canonical form.
///
/// Cycles sharing the same first symbol after rotation keep their input
/// order.
///
/// # Errors
///
/// Validation errors from [`notation::validate`], and
/// [`PermutationError::Normalization`] if splitting the text yields an empty
/// cycle, e.g. `"(ab)()"`.
pub fn canonicalize(text: &str) -> Result<CanonicalForm, PermutationError> {
    let text = notation::validate(text)?;

    let mut cycles = notation::split_cycles(text)
        .into_iter()
        .map(|run| -> Result<Vec<char>, PermutationError> {
            let mut cycle = run.chars().collect_vec();
            // min_by_key keeps the first of equal minima
            let (smallest, _) = cycle
                .iter()
                .enumerate()
                .min_by_key(|&(_, symbol)| symbol)
                .ok_or(PermutationError::Normalization)?;
            cycle.rotate_left(smallest);
            Ok(cycle)
        })
        .collect::<Result<Vec<_>, PermutationError>>()?;

    // stable, so equal leading symbols keep their relative order
    cycles.sort_by(|a, b| b[0].cmp(&a[0]));

    Ok(CanonicalForm { cycles })
}
