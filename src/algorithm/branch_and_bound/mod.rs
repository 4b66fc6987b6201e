//! # Branch and bound
//!
//! Integer programs are solved by repeatedly solving continuous relaxations. Whenever the optimal
//! vertex of a relaxation has a fractional coordinate `v` at index `k`, the region is split in two:
//! one part with `x_k <= floor(v)` and one with `x_k >= ceil(v)`. No integer point is lost by
//! doing so. A branch ends when its relaxation is infeasible or has an integral optimum.
//!
//! The functions in this module are the simplest way to use the search: they take a dense problem
//! description, and use the simplex method with the default settings. `BranchAndBound` allows
//! choosing the relaxation oracle and the settings.
use crate::algorithm::simplex::pivot_rule::FirstProfitable;
use crate::algorithm::simplex::Simplex;
use crate::data::linear_program::constraints::ConstraintSystem;
use crate::data::linear_program::elements::VariableDomain;
use crate::data::linear_program::problem::Problem;
use crate::data::number_types::traits::Integral;
use crate::error::IlpResult;
use crate::settings::SearchSettings;

pub use search::{BranchAndBound, Enumeration};

pub mod node;
pub mod search;
pub mod statistics;

/// Whether a value is an integer.
///
/// # Arguments
///
/// * `value`: Value to check.
/// * `tolerance`: Largest distance to the nearest integer that is still accepted, for floating
/// point values. Use `0.0` to only accept exact integers.
pub fn is_integer<F: Integral>(value: &F, tolerance: f64) -> bool {
    value.is_integral(tolerance)
}

/// All integral leaves of the search tree of `max objective · x s.t. weights x <= limits`.
///
/// # Arguments
///
/// * `objective`: Coefficients to maximize.
/// * `weights`: Constraint matrix, one row per constraint, each row as long as the objective.
/// * `limits`: Right-hand side, one value per row.
/// * `binary`: Whether each variable is restricted to `{0, 1}` rather than the nonnegative
/// integers.
///
/// # Return value
///
/// The vertices in the order in which a depth first search visiting floor branches before ceil
/// branches finds them. Empty if the problem has no integer points.
///
/// # Errors
///
/// If the dimensions don't match, or the relaxation of the problem is unbounded.
pub fn discretize_solutions<F: Integral>(
    objective: &[F],
    weights: &[Vec<F>],
    limits: &[F],
    binary: bool,
) -> IlpResult<Vec<Vec<F>>> {
    let (problem, constraints) = dense_problem(objective, weights, limits, binary)?;

    default_search()
        .enumerate(&problem, constraints)
        .map(|enumeration| enumeration.solutions)
}

/// The best integral point of `max objective · x s.t. weights x <= limits`.
///
/// See `discretize_solutions` for the arguments.
///
/// # Return value
///
/// The optimal vertex and the objective value it attains. When several vertices are optimal, the
/// one `discretize_solutions` lists first is returned.
///
/// # Errors
///
/// `IlpError::InfeasibleProblem` when there is no integer point satisfying the constraints, and
/// the errors of `discretize_solutions`.
pub fn ilp_solver<F: Integral>(
    objective: &[F],
    weights: &[Vec<F>],
    limits: &[F],
    binary: bool,
) -> IlpResult<(Vec<F>, F)> {
    let (problem, constraints) = dense_problem(objective, weights, limits, binary)?;

    default_search()
        .solve(&problem, constraints)
        .map(|solution| solution.into_pair())
}

fn default_search() -> BranchAndBound<Simplex<FirstProfitable>> {
    BranchAndBound::new(Simplex::new(), SearchSettings::default())
}

fn dense_problem<F: Integral>(
    objective: &[F],
    weights: &[Vec<F>],
    limits: &[F],
    binary: bool,
) -> IlpResult<(Problem<F>, ConstraintSystem<F>)> {
    let problem = Problem::new(objective.to_vec(), VariableDomain::from_binary_flag(binary))?;
    let constraints = ConstraintSystem::new(objective.len(), weights.to_vec(), limits.to_vec())?;

    Ok((problem, constraints))
}
