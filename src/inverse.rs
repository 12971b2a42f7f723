//! # Inverting permutations in place
//!
//! A permutation of `1..=n` is stored as a slice `x` of length `n` where
//! `x[k - 1]` is the image of `k`. Both functions here overwrite the slice
//! with the inverse permutation and hand the same slice back, using no extra
//! memory beyond a few integers:
//!
//! - [`invert_i`] is Knuth's Algorithm I (TAOCP 1.3.3), which walks each
//!   cycle once and marks visited entries by storing them negated.
//! - [`invert_j`] is Knuth's Algorithm J, which negates everything up front
//!   and then chases forward to each cycle's unresolved representative.
//!
//! The two are independent and produce identical results, so each can be used
//! to check the other.
//!
//! Neither function checks that its input is a permutation; see
//! [`is_bijection`] for that. Out of range values panic on indexing, other
//! non-bijective inputs give meaningless output.

use std::ops::{Index, IndexMut};

use bitvec::vec::BitVec;

use crate::error::PermutationError;

/// A slice indexed from 1, the way the algorithms are stated.
struct OneBased<'a>(&'a mut [isize]);

impl OneBased<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Index<usize> for OneBased<'_> {
    type Output = isize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index - 1]
    }
}

impl IndexMut<usize> for OneBased<'_> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index - 1]
    }
}

/// Converts a value known to be positive into a 1-based index.
fn position(value: isize) -> usize {
    debug_assert!(value > 0, "{value} is not a 1-based position");
    value.unsigned_abs()
}

/// Converts a 1-based index into a value of the permutation.
fn value(position: usize) -> isize {
    // a slice never holds more than isize::MAX elements
    position as isize
}

/// Replaces `array` with its inverse permutation using Algorithm I, and
/// returns it.
///
/// Visited entries are recognised by being negative, so no separate visited
/// set is needed.
///
/// # Errors
///
/// [`PermutationError::EmptyArray`] if `array` is empty.
///
/// # Panics
///
/// Panics if a value lies outside `1..=array.len()`.
///
/// # Examples
///
/// ```
/// # use cyclenote::inverse::invert_i;
/// let mut x = [6, 2, 1, 5, 4, 3];
/// invert_i(&mut x).unwrap();
/// assert_eq!(x, [3, 2, 6, 5, 4, 1]);
/// ```
pub fn invert_i(array: &mut [isize]) -> Result<&mut [isize], PermutationError> {
    if array.is_empty() {
        return Err(PermutationError::EmptyArray);
    }
    trace_log!(len = array.len(), "inverting with algorithm I");

    let mut x = OneBased(array);
    let mut j: isize = -1;

    for mut m in (1..=x.len()).rev() {
        let mut i = x[m];
        if i > 0 {
            // walk the cycle through m, leaving negated back-links behind
            loop {
                x[m] = j;
                j = -value(m);
                m = position(i);
                i = x[m];
                if i <= 0 {
                    i = j;
                    break;
                }
            }
        }
        // the chase ends back where it started, at the original m
        x[m] = -i;
    }

    Ok(x.0)
}

/// Replaces `array` with its inverse permutation using Algorithm J, and
/// returns it.
///
/// # Errors
///
/// [`PermutationError::EmptyArray`] if `array` is empty.
///
/// # Panics
///
/// Panics if a value lies outside `1..=array.len()`.
///
/// # Examples
///
/// ```
/// # use cyclenote::inverse::invert_j;
/// let mut x = [6, 2, 1, 5, 4, 3];
/// let inverse = invert_j(&mut x).unwrap();
/// assert_eq!(inverse, [3, 2, 6, 5, 4, 1]);
/// ```
pub fn invert_j(array: &mut [isize]) -> Result<&mut [isize], PermutationError> {
    if array.is_empty() {
        return Err(PermutationError::EmptyArray);
    }
    trace_log!(len = array.len(), "inverting with algorithm J");

    array.iter_mut().for_each(|v| *v = -*v);
    let mut x = OneBased(array);

    for m in (1..=x.len()).rev() {
        let mut j = m;
        let mut i = x[j];
        while i > 0 {
            j = position(i);
            i = x[j];
        }
        let k = position(-i);
        x[j] = x[k];
        x[k] = value(m);
    }

    Ok(x.0)
}

/// Whether `array` holds every value of `1..=array.len()` exactly once, which
/// is what [`invert_i`] and [`invert_j`] require.
///
/// ```
/// # use cyclenote::inverse::is_bijection;
/// assert!(is_bijection(&[2, 3, 1]));
/// assert!(!is_bijection(&[2, 2, 1]));
/// assert!(!is_bijection(&[0, 1, 2]));
/// ```
pub fn is_bijection(array: &[isize]) -> bool {
    let mut seen: BitVec = BitVec::repeat(false, array.len());
    array.iter().all(|&v| {
        let Ok(k) = usize::try_from(v) else {
            return false;
        };
        if k == 0 || k > array.len() || seen[k - 1] {
            return false;
        }
        seen.set(k - 1, true);
        true
    })
}
