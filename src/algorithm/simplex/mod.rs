//! # The Simplex algorithm
//!
//! A two phase primal simplex method on a dense tableau. It is the relaxation oracle that branch
//! and bound uses by default. The algorithm is implemented as described in chapters 2 and 4 of
//! Combinatorial Optimization, a book by Christos H. Papadimitriou and Kenneth Steiglitz.
use std::marker::PhantomData;

use tracing::trace;

use crate::algorithm::{OptimizationResult, SolveRelaxation};
use crate::algorithm::simplex::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::constraints::ConstraintSystem;
use crate::data::linear_program::elements::Bound;
use crate::data::number_types::traits::OrderedField;

pub mod pivot_rule;
pub mod tableau;

/// Solves relaxations with the simplex method, pivoting according to `PR`.
#[derive(Debug, Clone, Copy)]
pub struct Simplex<PR = FirstProfitable> {
    pivot_rule: PhantomData<fn() -> PR>,
}

impl<PR> Simplex<PR> {
    /// Create a new instance.
    pub fn new() -> Self {
        Self { pivot_rule: PhantomData }
    }
}

impl<PR> Default for Simplex<PR> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, PR> SolveRelaxation<F> for Simplex<PR>
where
    F: OrderedField,
    PR: PivotRule,
{
    fn solve_relaxation(
        &self,
        objective: &[F],
        constraints: &ConstraintSystem<F>,
        bounds: &[Bound<F>],
    ) -> OptimizationResult<F> {
        debug_assert_eq!(objective.len(), constraints.nr_variables());
        debug_assert_eq!(bounds.len(), constraints.nr_variables());

        let mut tableau = Tableau::new(constraints, bounds);

        if tableau.has_artificial_variables() {
            // The artificial objective is bounded from below by zero
            let phase_one = primal::<_, PR>(&mut tableau);
            debug_assert_eq!(phase_one, PhaseResult::Optimal);

            if tableau.objective_value().is_significantly_positive() {
                trace!(rows = tableau.nr_rows(), "relaxation is infeasible");
                return OptimizationResult::Infeasible;
            }
            tableau.remove_artificial_from_basis();
        }

        tableau.start_phase_two(objective);
        match primal::<_, PR>(&mut tableau) {
            PhaseResult::Optimal => OptimizationResult::FiniteOptimum(tableau.current_bfs(bounds)),
            PhaseResult::Unbounded => OptimizationResult::Unbounded,
        }
    }
}

/// Outcome of running the primal simplex method to completion on a tableau.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum PhaseResult {
    Optimal,
    Unbounded,
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// # Arguments
///
/// * `tableau`: Tableau with a valid basis, for either of the two phases.
fn primal<F, PR>(tableau: &mut Tableau<F>) -> PhaseResult
where
    F: OrderedField,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut nr_pivots = 0_u64;

    loop {
        let Some(column) = rule.select_primal_pivot_column(tableau) else {
            trace!(nr_pivots, "optimal basis found");
            return PhaseResult::Optimal;
        };
        let Some(row) = tableau.select_primal_pivot_row(column) else {
            trace!(nr_pivots, column, "unbounded direction found");
            return PhaseResult::Unbounded;
        };

        tableau.bring_into_basis(row, column);
        nr_pivots += 1;
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use num_rational::{BigRational, Rational64};

    use crate::algorithm::{OptimizationResult, SolveRelaxation};
    use crate::algorithm::simplex::pivot_rule::{FirstProfitable, MostNegative};
    use crate::algorithm::simplex::Simplex;
    use crate::data::linear_program::constraints::ConstraintSystem;
    use crate::data::linear_program::elements::Bound;

    type T = Rational64;

    fn r(numer: i64, denom: i64) -> T {
        T::new(numer, denom)
    }

    fn nonnegative(n: usize) -> Vec<Bound<T>> {
        vec![Bound::new(r(0, 1), None); n]
    }

    /// min -x - y s.t. x + 2y <= 4, 3x + y <= 6.
    #[test]
    fn finite_optimum() {
        let constraints = ConstraintSystem::new(
            2,
            vec![vec![r(1, 1), r(2, 1)], vec![r(3, 1), r(1, 1)]],
            vec![r(4, 1), r(6, 1)],
        ).unwrap();
        let objective = vec![r(-1, 1), r(-1, 1)];

        let result = Simplex::<FirstProfitable>::new()
            .solve_relaxation(&objective, &constraints, &nonnegative(2));
        assert_eq!(result, OptimizationResult::FiniteOptimum(vec![r(8, 5), r(6, 5)]));

        let result = Simplex::<MostNegative>::new()
            .solve_relaxation(&objective, &constraints, &nonnegative(2));
        assert_eq!(result, OptimizationResult::FiniteOptimum(vec![r(8, 5), r(6, 5)]));
    }

    #[test]
    fn needs_phase_one() {
        // min x + 2y s.t. x + y >= 2, x <= 1
        let constraints = ConstraintSystem::new(
            2,
            vec![vec![r(-1, 1), r(-1, 1)], vec![r(1, 1), r(0, 1)]],
            vec![r(-2, 1), r(1, 1)],
        ).unwrap();
        let objective = vec![r(1, 1), r(2, 1)];

        let result = Simplex::<MostNegative>::new()
            .solve_relaxation(&objective, &constraints, &nonnegative(2));
        assert_eq!(result, OptimizationResult::FiniteOptimum(vec![r(1, 1), r(1, 1)]));
    }

    #[test]
    fn infeasible() {
        // x <= -1 with x >= 0
        let constraints = ConstraintSystem::new(1, vec![vec![r(1, 1)]], vec![r(-1, 1)]).unwrap();

        let result = Simplex::<MostNegative>::new()
            .solve_relaxation(&[r(-1, 1)], &constraints, &nonnegative(1));
        assert_eq!(result, OptimizationResult::Infeasible);
    }

    #[test]
    fn infeasible_through_upper_bound() {
        // x >= 2 with x in [0, 1]
        let constraints = ConstraintSystem::new(1, vec![vec![r(-1, 1)]], vec![r(-2, 1)]).unwrap();
        let bounds = vec![Bound::new(r(0, 1), Some(r(1, 1)))];

        let result = Simplex::<MostNegative>::new()
            .solve_relaxation(&[r(-1, 1)], &constraints, &bounds);
        assert_eq!(result, OptimizationResult::Infeasible);
    }

    #[test]
    fn unbounded() {
        let constraints = ConstraintSystem::new(
            2,
            vec![vec![r(1, 1), r(-1, 1)]],
            vec![r(1, 1)],
        ).unwrap();

        let result = Simplex::<MostNegative>::new()
            .solve_relaxation(&[r(-1, 1), r(0, 1)], &constraints, &nonnegative(2));
        assert_eq!(result, OptimizationResult::Unbounded);
    }

    #[test]
    fn redundant_equality() {
        // x + y = 2 written twice, once negated
        let constraints = ConstraintSystem::new(
            2,
            vec![
                vec![r(1, 1), r(1, 1)],
                vec![r(-1, 1), r(-1, 1)],
                vec![r(2, 1), r(2, 1)],
                vec![r(-2, 1), r(-2, 1)],
            ],
            vec![r(2, 1), r(-2, 1), r(4, 1), r(-4, 1)],
        ).unwrap();

        let result = Simplex::<FirstProfitable>::new()
            .solve_relaxation(&[r(1, 1), r(3, 1)], &constraints, &nonnegative(2));
        assert_eq!(result, OptimizationResult::FiniteOptimum(vec![r(2, 1), r(0, 1)]));
    }

    #[test]
    fn knapsack_relaxation_float() {
        let constraints = ConstraintSystem::new(
            6,
            vec![vec![600000_f64, 250000_f64, 750000_f64, 200000_f64, 250000_f64, 100000_f64]],
            vec![1250000_f64],
        ).unwrap();
        let objective = [-170000_f64, -125000_f64, -200000_f64, -150000_f64, -90000_f64, -70000_f64];
        let bounds = vec![Bound::new(0_f64, None); 6];

        match Simplex::<MostNegative>::new().solve_relaxation(&objective, &constraints, &bounds) {
            OptimizationResult::FiniteOptimum(x) => {
                assert_abs_diff_eq!(x[3], 6.25, epsilon = 1e-9);
                for (_, value) in x.iter().enumerate().filter(|&(index, _)| index != 3) {
                    assert_abs_diff_eq!(*value, 0_f64, epsilon = 1e-9);
                }
            },
            other => panic!("expected a finite optimum, got {:?}", other),
        }
    }

    #[test]
    fn big_rational() {
        let constraints = ConstraintSystem::new(
            1,
            vec![vec![BigRational::from_integer(3.into())]],
            vec![BigRational::from_integer(7.into())],
        ).unwrap();
        let bounds = vec![Bound::new(BigRational::from_integer(0.into()), None)];

        let result = Simplex::<MostNegative>::new()
            .solve_relaxation(&[BigRational::from_integer((-1).into())], &constraints, &bounds);
        assert_eq!(
            result,
            OptimizationResult::FiniteOptimum(vec![BigRational::new(7.into(), 3.into())]),
        );
    }
}
