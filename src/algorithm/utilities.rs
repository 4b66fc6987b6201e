//! # Utilities
//!
//! Helper functions for algorithms.
use crate::data::linear_program::problem::Problem;
use crate::data::number_types::traits::{Integral, OrderedField};

/// Index of the first value that isn't integral.
///
/// Branching always happens on the lowest such index.
pub(crate) fn first_fractional_index<F: Integral>(vector: &[F], tolerance: f64) -> Option<usize> {
    vector.iter().position(|value| !value.is_integral(tolerance))
}

/// Replace values that are integral up to a tolerance by the integer they are close to.
pub(crate) fn snap_to_integers<F: Integral>(vector: Vec<F>) -> Vec<F> {
    vector.into_iter().map(|value| value.round()).collect()
}

/// The vector with the largest objective value.
///
/// Of several vectors with the same value, the first one is returned.
///
/// # Return value
///
/// `None` if there are no vectors, otherwise the best vector and its objective value.
pub(crate) fn select_best<F: OrderedField>(
    problem: &Problem<F>,
    vectors: impl IntoIterator<Item = Vec<F>>,
) -> Option<(Vec<F>, F)> {
    let mut best: Option<(Vec<F>, F)> = None;
    for vector in vectors {
        let value = problem.objective_value(&vector);
        let improves = match &best {
            None => true,
            Some((_, best_value)) => value > *best_value,
        };
        if improves {
            best = Some((vector, value));
        }
    }

    best
}
