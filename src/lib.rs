//! # Cyclenote
//!
//! Cyclenote is a Rust library for permutation algebra over a finite set of
//! symbols written in disjoint-cycle notation such as `(acf)(bd)`.
//!
//! It can multiply a sequence of cycles into a single permutation, rewrite a
//! permutation into its unique canonical cycle form, and invert a permutation
//! given as an integer array in place, by two independent algorithms.
//!
//! ```
//! use cyclenote::permutation::Permutation;
//!
//! let left: Permutation = "(acf)(bd)".parse().unwrap();
//! let right: Permutation = "(abd)(ef)".parse().unwrap();
//! let product = left.multiply(&right).unwrap();
//!
//! assert_eq!(product.cycle_form(), "(acefb)(d)");
//! assert_eq!(product.canonical_form().unwrap().to_string(), "(d)(acefb)");
//! ```

#[macro_use]
mod tracing_helpers;

pub mod canonical;
pub mod error;
pub mod inverse;
pub mod multiply;
pub mod notation;
pub mod permutation;

pub use error::PermutationError;
