//! # Permutations in cycle form
//!
//! This module provides the [`Permutation`] entity, a permutation written in
//! cycle notation together with its canonical form.
//!
//! ## Key Features:
//!
//! - **Construction**: `Permutation::new("(abc)(de)")`, or `"(abc)(de)".parse()`.
//!   The text is validated; the canonical form is derived once and stored.
//! - **Multiplication**: `a.multiply(&b)` (or `&a * &b`) applies `a` first,
//!   then `b`, and returns a new permutation; `Permutation::product` folds a
//!   whole sequence.
//! - **Inverse**: `p.inverse()` reverses the cycles of the disjoint form.
//! - **Comparison**: two permutations are equal when they move the same
//!   symbols the same way, whatever cycle form they were written in. The
//!   cycle form is multiplied out into disjoint cycles first, so `(ab)(bc)`
//!   equals `(acb)`.

use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Mul,
    str::FromStr,
};

use itertools::Itertools;

use crate::{
    canonical::{self, CanonicalForm},
    error::PermutationError,
    multiply,
    notation::{self, CLOSE, OPEN},
};

/// A permutation of a set of symbols, in cycle notation.
///
/// The permutation is immutable: the cycle form it was built from is kept
/// as written (minus surrounding whitespace), and the canonical form is
/// derived from it once. The canonical form is absent when the text, although
/// well bracketed on the outside, cannot be normalized (`"(ab)()"`).
///
/// The canonical form rewrites the text cycle by cycle and so depends on how
/// the permutation was written when the cycles overlap. The disjoint form
/// multiplies the cycles out first and depends only on the mapping.
///
/// # Examples
///
/// ```
/// use cyclenote::permutation::Permutation;
///
/// let p = Permutation::new("(316)(54)(2)").unwrap();
/// assert_eq!(p.cycle_form(), "(316)(54)(2)");
/// assert_eq!(p.canonical_form().unwrap().to_string(), "(45)(2)(163)");
/// assert_eq!(p.canonical_form_no_paren().unwrap(), "452163");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Permutation {
    cycle_form: String,
    canonical: Option<CanonicalForm>,
    disjoint: Result<CanonicalForm, PermutationError>,
}

impl Permutation {
    /// Reads a permutation from cycle notation.
    ///
    /// # Errors
    ///
    /// [`PermutationError::EmptyInput`] for blank text and
    /// [`PermutationError::MissingParenthesis`] when the text does not start
    /// with `(` and end with `)`.
    pub fn new(cycle_form: &str) -> Result<Self, PermutationError> {
        let cycle_form = notation::validate(cycle_form)?;
        Ok(Self::from_validated(cycle_form.to_owned()))
    }

    fn from_validated(cycle_form: String) -> Self {
        let canonical = match canonical::canonicalize(&cycle_form) {
            Ok(canonical) => Some(canonical),
            Err(_err) => {
                debug_log!(cycle_form = %cycle_form, error = %_err, "no canonical form");
                None
            }
        };
        let disjoint = multiply::multiply_text(&cycle_form)
            .and_then(|product| canonical::canonicalize(&product));
        if let Err(_err) = &disjoint {
            debug_log!(cycle_form = %cycle_form, error = %_err, "no disjoint form");
        }
        Permutation {
            cycle_form,
            canonical,
            disjoint,
        }
    }

    /// The cycle form as it was given.
    pub fn cycle_form(&self) -> &str {
        &self.cycle_form
    }

    /// The canonical form, if the cycle form could be normalized.
    pub fn canonical_form(&self) -> Option<&CanonicalForm> {
        self.canonical.as_ref()
    }

    /// The canonical form with all parentheses removed.
    pub fn canonical_form_no_paren(&self) -> Option<String> {
        self.canonical.as_ref().map(CanonicalForm::without_parens)
    }

    /// The canonical form of the cycle form multiplied out into disjoint
    /// cycles.
    ///
    /// # Errors
    ///
    /// The syntax error [`multiply::multiply_text`] reports for the cycle
    /// form, positions counted from its first character.
    ///
    /// ```
    /// # use cyclenote::permutation::Permutation;
    /// let p = Permutation::new("(ab)(bc)").unwrap();
    /// assert_eq!(p.canonical_form().unwrap().to_string(), "(bc)(ab)");
    /// assert_eq!(p.disjoint_form().unwrap().to_string(), "(acb)");
    /// ```
    pub fn disjoint_form(&self) -> Result<&CanonicalForm, PermutationError> {
        self.disjoint.as_ref().map_err(Clone::clone)
    }

    /// Multiplies `self` by `rhs`: `self` is applied first, then `rhs`.
    /// Neither operand changes.
    ///
    /// The product's cycle form is the output of
    /// [`multiply::multiply_text`], i.e. disjoint cycles in discovery order.
    ///
    /// # Errors
    ///
    /// Syntax errors from [`multiply::multiply_text`] when either cycle form
    /// is malformed on the inside. Positions count from the start of the
    /// operand at fault, `self` checked first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cyclenote::permutation::Permutation;
    /// let a = Permutation::new("(acf)(bd)").unwrap();
    /// let b = Permutation::new("(abd)(ef)").unwrap();
    /// assert_eq!(a.multiply(&b).unwrap().cycle_form(), "(acefb)(d)");
    /// ```
    pub fn multiply(&self, rhs: &Permutation) -> Result<Permutation, PermutationError> {
        self.disjoint_form()?;
        rhs.disjoint_form()?;
        let formula = format!("{}{}", self.cycle_form, rhs.cycle_form);
        Permutation::new(&multiply::multiply_text(&formula)?)
    }

    /// Multiplies a sequence of permutations left to right.
    ///
    /// # Errors
    ///
    /// [`PermutationError::EmptyInput`] for an empty sequence, otherwise as
    /// [`Permutation::multiply`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cyclenote::permutation::Permutation;
    /// let cycles = ["(acf)", "(bd)", "(abd)", "(ef)"]
    ///     .map(|c| Permutation::new(c).unwrap());
    /// let product = Permutation::product(&cycles).unwrap();
    /// assert_eq!(product, Permutation::new("(acefb)(d)").unwrap());
    /// ```
    pub fn product<'a, I>(permutations: I) -> Result<Permutation, PermutationError>
    where
        I: IntoIterator<Item = &'a Permutation>,
    {
        let mut permutations = permutations.into_iter();
        let first = permutations.next().ok_or(PermutationError::EmptyInput)?;
        permutations.try_fold(first.clone(), |acc, next| acc.multiply(next))
    }

    /// The inverse permutation: the disjoint cycles, each read backwards.
    ///
    /// # Errors
    ///
    /// As [`Permutation::disjoint_form`], when the cycle form is malformed on
    /// the inside.
    ///
    /// ```
    /// # use cyclenote::permutation::Permutation;
    /// let p = Permutation::new("(abc)(cd)").unwrap();
    /// let inverse = p.inverse().unwrap();
    /// assert_eq!(inverse.cycle_form(), "(cdba)");
    /// assert_eq!(inverse.canonical_form().unwrap().to_string(), "(acdb)");
    /// assert!(p.multiply(&inverse).unwrap().is_identity());
    /// ```
    pub fn inverse(&self) -> Result<Permutation, PermutationError> {
        let cycle_form = self
            .disjoint_form()?
            .cycles()
            .iter()
            .map(|cycle| format!("{OPEN}{}{CLOSE}", cycle.iter().rev().collect::<String>()))
            .join("");
        Ok(Self::from_validated(cycle_form))
    }

    /// Whether every symbol is a fixed point. `false` when the cycle form
    /// cannot be multiplied out.
    pub fn is_identity(&self) -> bool {
        self.disjoint
            .as_ref()
            .is_ok_and(CanonicalForm::is_identity)
    }

    fn comparison_key(&self) -> Result<&CanonicalForm, &str> {
        self.disjoint.as_ref().map_err(|_| self.cycle_form.as_str())
    }
}

/// Permutations compare by disjoint form, so `(abc)` equals `(bca)` and
/// `(ab)(bc)` equals `(acb)`. Without a disjoint form only the exact cycle form
/// is equal.
impl PartialEq for Permutation {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for Permutation {}

impl Hash for Permutation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cycle_form)
    }
}

impl FromStr for Permutation {
    type Err = PermutationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permutation::new(s)
    }
}

impl TryFrom<String> for Permutation {
    type Error = PermutationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Permutation::new(&value)
    }
}

impl From<Permutation> for String {
    fn from(value: Permutation) -> Self {
        value.cycle_form
    }
}

/// Same as [`Permutation::multiply`].
impl Mul<&Permutation> for &Permutation {
    type Output = Result<Permutation, PermutationError>;

    fn mul(self, rhs: &Permutation) -> Self::Output {
        self.multiply(rhs)
    }
}
