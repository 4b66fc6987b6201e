//! # Scenario tests that require a look inside the crate.
//!
//! Each problem module holds one small problem together with its known optimum. Results of the
//! search are compared against a brute force enumeration of all integer points.
use num_rational::Rational64;

use crate::data::linear_program::constraints::ConstraintSystem;
use crate::data::linear_program::problem::Problem;


/// Best objective value over all integer points `x` with `0 <= x <= upper`.
///
/// # Return value
///
/// `None` if none of these points is feasible.
fn brute_force(
    problem: &Problem<Rational64>,
    constraints: &ConstraintSystem<Rational64>,
    upper: &[i64],
) -> Option<Rational64> {
    let mut point = vec![0_i64; upper.len()];
    let mut best: Option<Rational64> = None;

    loop {
        let x = point.iter().map(|&value| Rational64::from_integer(value)).collect::<Vec<_>>();
        if constraints.is_satisfied_by(&x) {
            let value = problem.objective_value(&x);
            if best.as_ref().map_or(true, |best| value > *best) {
                best = Some(value);
            }
        }

        // Next point in lexicographic order
        let Some(index) = (0..point.len()).rev().find(|&index| point[index] < upper[index]) else {
            return best;
        };
        point[index] += 1;
        for value in &mut point[index + 1..] {
            *value = 0;
        }
    }
}
