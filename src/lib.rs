//! # An integer linear program solver
//!
//! Integer programs of the form `max c · x s.t. A x <= b` with `x` nonnegative and integral (or
//! binary) are solved by branch and bound. Every relaxation is a linear program, which is solved
//! using the Simplex Method as described in the book Combinatorial Optimization by Christos H.
//! Papadimitriou and Kenneth Steiglitz.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;
pub mod settings;

#[cfg(test)]
mod tests;
