use num_rational::Rational64;

use relp_ilp::algorithm::branch_and_bound::{discretize_solutions, ilp_solver};
use relp_ilp::data::linear_program::constraints::ConstraintSystem;
use relp_ilp::data::linear_program::elements::VariableDomain;
use relp_ilp::data::linear_program::problem::Problem;

use super::{generate, Instance};

/// Best value over all integer points with `0 <= x_j <= upper_j`.
fn brute_force(instance: &Instance, binary: bool) -> Option<Rational64> {
    let nr_variables = instance.objective.len();
    let problem = Problem::new(
        instance.objective.clone(),
        VariableDomain::from_binary_flag(binary),
    ).unwrap();
    let constraints = ConstraintSystem::new(
        nr_variables,
        instance.weights.clone(),
        instance.limits.clone(),
    ).unwrap();

    let upper = (0..nr_variables)
        .map(|j| if binary {
            1
        } else {
            instance.weights.iter().zip(&instance.limits)
                .map(|(row, limit)| (limit / row[j]).floor().to_integer())
                .min()
                .unwrap_or(0)
        })
        .collect::<Vec<i64>>();

    let mut point = vec![0_i64; nr_variables];
    let mut best: Option<Rational64> = None;
    loop {
        let x = point.iter().map(|&value| Rational64::from_integer(value)).collect::<Vec<_>>();
        if constraints.is_satisfied_by(&x) {
            let value = problem.objective_value(&x);
            if best.map_or(true, |best| value > best) {
                best = Some(value);
            }
        }

        let Some(index) = (0..nr_variables).rev().find(|&index| point[index] < upper[index]) else {
            return best;
        };
        point[index] += 1;
        for value in &mut point[index + 1..] {
            *value = 0;
        }
    }
}

#[test]
fn binary() {
    for seed in 0..10 {
        let instance = generate(seed, 12, 3);

        let (vertex, value) = ilp_solver(
            &instance.objective,
            &instance.weights,
            &instance.limits,
            true,
        ).unwrap();

        let (zero, one) = (Rational64::from_integer(0), Rational64::from_integer(1));
        assert!(vertex.iter().all(|&value| value == zero || value == one));
        assert_eq!(Some(value), brute_force(&instance, true), "seed {}", seed);
    }
}

#[test]
fn nonnegative_integer() {
    for seed in 0..5 {
        let instance = generate(seed, 4, 2);

        let (_, value) = ilp_solver(
            &instance.objective,
            &instance.weights,
            &instance.limits,
            false,
        ).unwrap();

        assert_eq!(Some(value), brute_force(&instance, false), "seed {}", seed);
    }
}

#[test]
fn enumeration_contains_optimum() {
    let instance = generate(42, 10, 2);

    let solutions = discretize_solutions(
        &instance.objective,
        &instance.weights,
        &instance.limits,
        true,
    ).unwrap();
    let (vertex, _) = ilp_solver(&instance.objective, &instance.weights, &instance.limits, true)
        .unwrap();

    assert!(solutions.contains(&vertex));
}
