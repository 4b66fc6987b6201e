//! # Integer programs
//!
//! The part of a problem that stays the same for every node of the search tree.
use num_traits::{One, Zero};

use crate::data::linear_program::elements::{Bound, VariableDomain};
use crate::error::IlpError;

/// Maximize `objective · x` over the integer points of a domain.
///
/// The constraints are kept separately in a `ConstraintSystem`, because they are the part that
/// changes while branching.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Problem<F> {
    objective: Vec<F>,
    domain: VariableDomain,
}

impl<F> Problem<F> {
    /// Create a new problem.
    ///
    /// # Errors
    ///
    /// If there are no variables.
    pub fn new(objective: Vec<F>, domain: VariableDomain) -> Result<Self, IlpError> {
        if objective.is_empty() {
            return Err(IlpError::InvalidProblem("objective has no coefficients".to_string()));
        }

        Ok(Self { objective, domain })
    }

    /// Coefficients to maximize.
    pub fn objective(&self) -> &[F] {
        &self.objective
    }

    /// Values the variables may take.
    pub fn domain(&self) -> VariableDomain {
        self.domain
    }

    /// Number of variables, fixed for the entire search.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }
}

impl<F> Problem<F>
where
    F: Zero + One + Clone + std::ops::Neg<Output = F>,
{
    /// Objective in the form the relaxation oracle expects, which minimizes.
    pub fn minimization_objective(&self) -> Vec<F> {
        self.objective.iter().cloned().map(|c| -c).collect()
    }

    /// Bounds of the continuous relaxation.
    pub fn relaxation_bounds(&self) -> Vec<Bound<F>> {
        self.domain.bounds(self.nr_variables())
    }

    /// Value of the objective function at `x`.
    pub fn objective_value(&self, x: &[F]) -> F {
        dot(&self.objective, x)
    }
}

/// Inner product of two vectors of equal length.
pub fn dot<F>(left: &[F], right: &[F]) -> F
where
    F: Zero + Clone + std::ops::Mul<Output = F>,
{
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right)
        .fold(F::zero(), |total, (l, r)| total + l.clone() * r.clone())
}
