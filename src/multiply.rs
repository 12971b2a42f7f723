//! # Cycle multiplication
//!
//! Multiplies a product of cycles such as `(acf)(bd)(abd)(ef)` into disjoint
//! cycles, applying the cycles from left to right. This is Knuth's
//! Algorithm A (TAOCP 1.3.3): the formula is scanned repeatedly and every
//! position that has been accounted for is tagged, so that each position
//! contributes exactly once and the scan terminates.
//!
//! The result is *not* canonical; cycles come out in the order their first
//! symbol is met in the formula.

use ahash::AHashSet;
use bitvec::vec::BitVec;

use crate::{
    error::PermutationError,
    notation::{CLOSE, OPEN},
};

/// The formula being multiplied, with its tags.
///
/// After [`Formula::parse`] every `(` is tagged and every `)` has been
/// replaced by a tagged copy of the first symbol of its cycle, so the end of a
/// cycle leads back to its start by value.
#[derive(Debug, Clone)]
struct Formula {
    symbols: Vec<char>,
    tagged: BitVec,
}

impl Formula {
    fn parse(text: &str) -> Result<Self, PermutationError> {
        let mut symbols: Vec<char> = text.chars().collect();
        let mut tagged = BitVec::repeat(false, symbols.len());

        let mut open: Option<usize> = None;
        let mut in_cycle = AHashSet::new();

        for position in 0..symbols.len() {
            match symbols[position] {
                OPEN => {
                    if open.is_some() {
                        return Err(PermutationError::NestedOpen { position });
                    }
                    open = Some(position);
                    in_cycle.clear();
                    tagged.set(position, true);
                }
                CLOSE => {
                    let Some(start) = open.take() else {
                        return Err(PermutationError::UnmatchedClose { position });
                    };
                    if position == start + 1 {
                        return Err(PermutationError::EmptyCycle { position: start });
                    }
                    symbols[position] = symbols[start + 1];
                    tagged.set(position, true);
                }
                symbol => {
                    if open.is_none() {
                        return Err(PermutationError::SymbolOutsideCycle { symbol, position });
                    }
                    if !in_cycle.insert(symbol) {
                        return Err(PermutationError::RepeatedSymbol { symbol, position });
                    }
                }
            }
        }

        if let Some(position) = open {
            return Err(PermutationError::UnclosedCycle { position });
        }

        Ok(Formula { symbols, tagged })
    }

    /// Scans right from `from` to the end of the formula. Every element equal
    /// to `current` is tagged and `current` moves on to the element after it.
    /// Returns where `current` ends up.
    fn chase(&mut self, from: usize, mut current: char) -> char {
        let mut position = from;
        while position < self.symbols.len() {
            if self.symbols[position] != current {
                position += 1;
                continue;
            }
            self.tagged.set(position, true);
            match self.symbols.get(position + 1) {
                Some(&next) => current = next,
                None => break,
            }
            position += 2;
        }
        current
    }
}

/// Multiplies a formula of cycles, left to right, into disjoint cycles.
///
/// Every symbol of the formula appears in exactly one output cycle; fixed
/// points come out as one-symbol cycles.
///
/// # Errors
///
/// [`PermutationError::EmptyInput`] for blank text, and a syntax error
/// (see [`PermutationError::is_syntax`]) for malformed bracketing, such as a
/// `)` without a preceding `(`.
///
/// # Examples
///
/// ```
/// # use cyclenote::multiply::multiply_cycles;
/// let cycles = multiply_cycles("(acf)(bd)(abd)(ef)").unwrap();
/// assert_eq!(cycles, vec![vec!['a', 'c', 'e', 'f', 'b'], vec!['d']]);
/// ```
pub fn multiply_cycles(text: &str) -> Result<Vec<Vec<char>>, PermutationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PermutationError::EmptyInput);
    }
    trace_log!(formula = text, "multiplying cycles");

    let mut formula = Formula::parse(text)?;
    let mut cycles = Vec::new();

    while let Some(first) = formula.tagged.first_zero() {
        let start = formula.symbols[first];
        formula.tagged.set(first, true);

        let mut cycle = vec![start];
        // an untagged symbol is always followed by a symbol or its cycle's closer
        let mut current = formula.symbols[first + 1];
        let mut from = first + 2;

        loop {
            current = formula.chase(from, current);
            if current == start {
                break;
            }
            cycle.push(current);
            from = 0;
        }

        cycles.push(cycle);
    }

    debug_log!(cycles = cycles.len(), "multiplied cycles");
    Ok(cycles)
}

/// Same as [`multiply_cycles`], written back in cycle notation.
///
/// # Examples
///
/// ```
/// # use cyclenote::multiply::multiply_text;
/// assert_eq!(
///     multiply_text("(acfg)(bcd)(aed)(fade)(bgfae)").unwrap(),
///     "(adg)(ceb)(f)"
/// );
/// ```
pub fn multiply_text(text: &str) -> Result<String, PermutationError> {
    let mut product = String::new();
    for cycle in multiply_cycles(text)? {
        product.push(OPEN);
        product.extend(cycle);
        product.push(CLOSE);
    }
    Ok(product)
}
