//! # Number types
//!
//! Different data structures and different algorithms are defined over different spaces. This
//! module defines those spaces and provides implementations.
//!
//! A benefit of this approach is that the algorithms can be tested well for correctness using
//! fractional numbers, while the same code is used without adaptation with floating point numbers.
//! Branch and bound profits in particular: with exact rationals, a value is either an integer or it
//! isn't.
pub mod traits;
