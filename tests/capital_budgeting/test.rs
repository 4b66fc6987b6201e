use approx::assert_relative_eq;
use num_rational::BigRational;

use relp_ilp::algorithm::branch_and_bound::BranchAndBound;
use relp_ilp::algorithm::simplex::pivot_rule::FirstProfitable;
use relp_ilp::algorithm::simplex::Simplex;
use relp_ilp::data::linear_program::solution::Solution;
use relp_ilp::data::number_types::traits::Integral;
use relp_ilp::error::IlpError;
use relp_ilp::io::import;
use relp_ilp::io::json::ProblemFile;
use relp_ilp::settings::{Execution, Pruning, SearchSettings};

use super::get_test_file_path;

fn problem_file(name: &str) -> ProblemFile {
    import(&get_test_file_path(name)).unwrap()
}

fn solve<F: Integral>(
    file: ProblemFile,
    convert: impl Fn(f64) -> Option<F>,
    settings: SearchSettings,
) -> Result<Solution<F>, IlpError> {
    let (problem, constraints) = file.into_problem(convert).unwrap();

    BranchAndBound::new(Simplex::<FirstProfitable>::new(), settings).solve(&problem, constraints)
}

#[test]
fn file_matches_builtin() {
    assert_eq!(problem_file("capital_budgeting"), ProblemFile::capital_budgeting(false));
    assert_eq!(problem_file("capital_budgeting_binary"), ProblemFile::capital_budgeting(true));
}

#[test]
fn integer_float() {
    let solution = solve(problem_file("capital_budgeting"), Some, SearchSettings::default())
        .unwrap();

    assert_eq!(solution.vertex, vec![0_f64, 0_f64, 0_f64, 6_f64, 0_f64, 0_f64]);
    assert_relative_eq!(solution.objective_value, 900000_f64);
    assert_eq!(solution.statistics.nodes, 2 * solution.statistics.branched + 1);
}

#[test]
fn binary_exact() {
    let solution = solve(
        problem_file("capital_budgeting_binary"),
        |value| BigRational::from_float(value),
        SearchSettings::exact(),
    ).unwrap();

    let expected = [1, 1, 0, 1, 0, 1].iter()
        .map(|&value| BigRational::from_integer(value.into()))
        .collect::<Vec<_>>();
    assert_eq!(solution.vertex, expected);
    assert_eq!(solution.objective_value, BigRational::from_integer(515000.into()));
}

#[test]
fn all_settings_find_the_optimum() {
    for pruning in [Pruning::Exhaustive, Pruning::Incumbent] {
        for execution in [Execution::Sequential, Execution::Parallel] {
            let settings = SearchSettings::default()
                .with_pruning(pruning)
                .with_execution(execution);

            let solution = solve(problem_file("capital_budgeting_binary"), Some, settings).unwrap();
            assert_relative_eq!(solution.objective_value, 515000_f64);
        }
    }
}

#[test]
fn overdrawn() {
    let result = solve(problem_file("overdrawn"), Some, SearchSettings::default());
    assert_eq!(result, Err(IlpError::InfeasibleProblem));
}

#[test]
fn node_limit() {
    let settings = SearchSettings::default().with_max_nodes(3);

    let result = solve(problem_file("capital_budgeting"), Some, settings);
    assert_eq!(result, Err(IlpError::NodeLimit(3)));
}
