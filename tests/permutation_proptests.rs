//! Property-based tests for cycle multiplication, canonical forms and the two
//! in-place inverters.

use std::collections::HashSet;

use cyclenote::{
    canonical::canonicalize,
    inverse::{invert_i, invert_j},
    multiply::{multiply_cycles, multiply_text},
    permutation::Permutation,
};
use proptest::prelude::*;

// ============================================================================
//  Strategies
// ============================================================================

const ALPHABET: &str = "abcdefghij";

/// A single cycle: distinct symbols in random order.
fn cycle() -> impl Strategy<Value = Vec<char>> {
    prop::sample::subsequence(ALPHABET.chars().collect::<Vec<_>>(), 1..=ALPHABET.len())
        .prop_shuffle()
}

/// Disjoint cycles covering the first `n` symbols of the alphabet.
fn disjoint_cycles() -> impl Strategy<Value = Vec<Vec<char>>> {
    (1..=ALPHABET.len())
        .prop_flat_map(|n| {
            let symbols = ALPHABET.chars().take(n).collect::<Vec<_>>();
            (Just(symbols).prop_shuffle(), prop::collection::vec(any::<bool>(), n))
        })
        .prop_map(|(symbols, cuts)| {
            let mut cycles = Vec::new();
            let mut current = Vec::new();
            for (symbol, cut) in symbols.into_iter().zip(cuts) {
                current.push(symbol);
                if cut {
                    cycles.push(std::mem::take(&mut current));
                }
            }
            if !current.is_empty() {
                cycles.push(current);
            }
            cycles
        })
}

/// A permutation of `1..=n` as an integer array.
fn one_line(max_len: usize) -> impl Strategy<Value = Vec<isize>> {
    (1..=max_len).prop_flat_map(|n| Just((1..=n as isize).collect::<Vec<_>>()).prop_shuffle())
}

fn notation(cycles: &[Vec<char>]) -> String {
    cycles
        .iter()
        .map(|cycle| format!("({})", cycle.iter().collect::<String>()))
        .collect()
}

/// Applies the cycles left to right to `symbol`, the slow and obvious way.
fn apply(cycles: &[Vec<char>], mut symbol: char) -> char {
    for cycle in cycles {
        if let Some(at) = cycle.iter().position(|&s| s == symbol) {
            symbol = cycle[(at + 1) % cycle.len()];
        }
    }
    symbol
}

// ============================================================================
//  Canonical form
// ============================================================================

proptest! {
    /// Canonicalizing a canonical form gives it back.
    #[test]
    fn canonical_form_is_idempotent(cycles in disjoint_cycles()) {
        let once = canonicalize(&notation(&cycles)).unwrap();
        let twice = canonicalize(&once.to_string()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Rotating cycles and reordering them does not change the canonical form.
    #[test]
    fn canonical_form_ignores_representation(cycles in disjoint_cycles(), seed in any::<usize>()) {
        let mut rewritten = cycles.clone();
        rewritten.reverse();
        for cycle in &mut rewritten {
            let len = cycle.len();
            cycle.rotate_left(seed % len);
        }
        prop_assert_eq!(
            canonicalize(&notation(&cycles)).unwrap(),
            canonicalize(&notation(&rewritten)).unwrap()
        );
    }

    /// Every canonical cycle starts with its smallest symbol and the leading
    /// symbols strictly decrease.
    #[test]
    fn canonical_form_shape(cycles in disjoint_cycles()) {
        let canonical = canonicalize(&notation(&cycles)).unwrap();
        for cycle in canonical.cycles() {
            prop_assert_eq!(Some(&cycle[0]), cycle.iter().min());
        }
        for pair in canonical.cycles().windows(2) {
            prop_assert!(pair[0][0] > pair[1][0]);
        }
    }
}

// ============================================================================
//  Multiplication
// ============================================================================

proptest! {
    /// The product agrees with composing the cycles one symbol at a time.
    #[test]
    fn product_matches_direct_composition(factors in prop::collection::vec(cycle(), 1..6)) {
        let product = multiply_cycles(&notation(&factors)).unwrap();

        let mut seen = HashSet::new();
        for cycle in &product {
            for (at, &symbol) in cycle.iter().enumerate() {
                prop_assert!(seen.insert(symbol), "{} output twice", symbol);
                prop_assert_eq!(cycle[(at + 1) % cycle.len()], apply(&factors, symbol));
            }
        }

        let mut domain: Vec<char> = factors.iter().flatten().copied().collect();
        domain.sort_unstable();
        domain.dedup();
        prop_assert_eq!(seen.len(), domain.len());
    }

    /// Multiplying a single permutation that is already disjoint gives the
    /// same permutation back.
    #[test]
    fn product_of_disjoint_cycles_is_itself(cycles in disjoint_cycles()) {
        let text = notation(&cycles);
        prop_assert_eq!(
            canonicalize(&multiply_text(&text).unwrap()).unwrap(),
            canonicalize(&text).unwrap()
        );
    }

    /// Overlapping cycles compare equal to their product written disjointly,
    /// and so do their inverses.
    #[test]
    fn overlapping_cycles_equal_their_product(factors in prop::collection::vec(cycle(), 1..6)) {
        let text = notation(&factors);
        let p = Permutation::new(&text).unwrap();
        let q = Permutation::new(&multiply_text(&text).unwrap()).unwrap();
        prop_assert_eq!(&p, &q);

        let inverse = p.inverse().unwrap();
        prop_assert_eq!(&inverse, &q.inverse().unwrap());
        prop_assert!(p.multiply(&inverse).unwrap().is_identity());
    }

    /// The product of two permutations is a valid permutation.
    #[test]
    fn multiplication_is_well_formed(left in disjoint_cycles(), right in disjoint_cycles()) {
        let left = Permutation::new(&notation(&left)).unwrap();
        let right = Permutation::new(&notation(&right)).unwrap();
        let product = left.multiply(&right).unwrap();
        prop_assert!(!product.cycle_form().trim().is_empty());
        prop_assert!(product.canonical_form().is_some());
    }

    /// A permutation times its inverse fixes every symbol.
    #[test]
    fn product_with_inverse_is_identity(cycles in disjoint_cycles()) {
        let p = Permutation::new(&notation(&cycles)).unwrap();
        prop_assert!(p.multiply(&p.inverse().unwrap()).unwrap().is_identity());
        prop_assert!(p.inverse().unwrap().multiply(&p).unwrap().is_identity());
    }
}

// ============================================================================
//  In-place inversion
// ============================================================================

proptest! {
    /// Inverting twice with either method gives the original array back.
    #[test]
    fn inversion_is_an_involution(original in one_line(40)) {
        let mut x = original.clone();
        invert_i(&mut x).unwrap();
        invert_i(&mut x).unwrap();
        prop_assert_eq!(&x, &original);

        invert_j(&mut x).unwrap();
        invert_j(&mut x).unwrap();
        prop_assert_eq!(&x, &original);
    }

    /// Both methods compute the same inverse, and it really is the inverse.
    #[test]
    fn methods_agree(original in one_line(40)) {
        let mut by_i = original.clone();
        let mut by_j = original.clone();
        invert_i(&mut by_i).unwrap();
        invert_j(&mut by_j).unwrap();
        prop_assert_eq!(&by_i, &by_j);

        for (k, &image) in original.iter().enumerate() {
            prop_assert_eq!(by_i[image as usize - 1], k as isize + 1);
        }
    }
}
