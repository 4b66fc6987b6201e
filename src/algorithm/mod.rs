//! # Algorithms
use crate::data::linear_program::constraints::ConstraintSystem;
use crate::data::linear_program::elements::Bound;

pub mod branch_and_bound;
pub mod simplex;
pub mod utilities;

/// Something that can solve the continuous relaxation of a problem.
///
/// Branch and bound doesn't care how this happens, it only needs an optimal vertex of the polytope
/// when there is one. Any linear programming backend can be used by implementing this trait.
pub trait SolveRelaxation<F> {
    /// Solve the relaxed version of a problem.
    ///
    /// In the case of integer programming, that means that integer constraints are ignored.
    ///
    /// # Arguments
    ///
    /// * `objective`: Cost coefficients to *minimize*.
    /// * `constraints`: Rows of the form `a · x <= b`.
    /// * `bounds`: One bound per variable.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, an optimal vertex if the problem is bounded.
    fn solve_relaxation(
        &self,
        objective: &[F],
        constraints: &ConstraintSystem<F>,
        bounds: &[Bound<F>],
    ) -> OptimizationResult<F>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Vec<F>),
    Unbounded,
}
