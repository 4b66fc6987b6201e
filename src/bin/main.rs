use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use num_rational::BigRational;
use tracing_subscriber::{fmt, EnvFilter};

use relp_ilp::algorithm::branch_and_bound::BranchAndBound;
use relp_ilp::algorithm::simplex::pivot_rule::{FirstProfitable, MostNegative, PivotRule};
use relp_ilp::algorithm::simplex::Simplex;
use relp_ilp::data::linear_program::solution::Solution;
use relp_ilp::data::number_types::traits::Integral;
use relp_ilp::error::IlpError;
use relp_ilp::io::import;
use relp_ilp::io::json::ProblemFile;
use relp_ilp::settings::{Execution, Pruning, SearchSettings};

/// An integer linear program solver written in rust.
///
/// Without a problem file, the capital budgeting problem is solved.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the problem description, in JSON format
    problem_file: Option<PathBuf>,
    /// Restrict every variable to {0, 1}
    #[arg(long)]
    binary: bool,
    /// Solve with arbitrary precision rational numbers instead of floats
    #[arg(long)]
    exact: bool,
    /// Skip subtrees that can't improve on the best solution found so far
    #[arg(long)]
    prune: bool,
    /// Explore the subtrees below a node in parallel
    #[arg(long)]
    parallel: bool,
    /// Largest distance to an integer at which a float is still considered integral
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
    /// Give up after solving this many relaxations
    #[arg(long)]
    max_nodes: Option<u64>,
    /// Column selection rule of the simplex method
    #[arg(long, value_enum, default_value_t = Rule::FirstProfitable)]
    pivot_rule: Rule,
    /// Log every node of the search tree
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Rule {
    FirstProfitable,
    MostNegative,
}

fn main() -> anyhow::Result<()> {
    let opts: Opts = Opts::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if opts.verbose { "debug" } else { "warn" }));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut file = match &opts.problem_file {
        Some(path) => {
            println!("Reading problem file: \"{}\"...", path.to_string_lossy());
            import(path).with_context(|| format!("Couldn't read {:?}", path))?
        },
        None => ProblemFile::capital_budgeting(opts.binary),
    };
    file.binary |= opts.binary;

    let settings = settings(&opts)?;
    if opts.exact {
        solve(file, |value| BigRational::from_float(value), settings, opts.pivot_rule)
    } else {
        solve(file, Some, settings, opts.pivot_rule)
    }
}

fn settings(opts: &Opts) -> anyhow::Result<SearchSettings> {
    anyhow::ensure!(
        opts.tolerance.is_finite() && opts.tolerance >= 0_f64 && opts.tolerance < 0.5,
        "tolerance should be in [0, 0.5), got {}", opts.tolerance,
    );

    let mut settings = SearchSettings::default()
        .with_integrality_tolerance(opts.tolerance);
    if opts.prune {
        settings = settings.with_pruning(Pruning::Incumbent);
    }
    if opts.parallel {
        settings = settings.with_execution(Execution::Parallel);
    }
    if let Some(nodes) = opts.max_nodes {
        settings = settings.with_max_nodes(nodes);
    }

    Ok(settings)
}

fn solve<F: Integral>(
    file: ProblemFile,
    convert: impl Fn(f64) -> Option<F>,
    settings: SearchSettings,
    rule: Rule,
) -> anyhow::Result<()> {
    let (problem, constraints) = file.into_problem(convert)
        .context("Problem is inconsistent")?;

    println!("Solving...");
    let result = match rule {
        Rule::FirstProfitable => branch_and_bound::<FirstProfitable>(settings)
            .solve(&problem, constraints),
        Rule::MostNegative => branch_and_bound::<MostNegative>(settings)
            .solve(&problem, constraints),
    };

    match result {
        Ok(solution) => print_solution(&solution),
        Err(IlpError::InfeasibleProblem) => println!("Problem is not feasible."),
        Err(IlpError::UnboundedRelaxation) => println!("Problem is unbounded."),
        Err(error) => return Err(error).context("Search was aborted"),
    }

    Ok(())
}

fn branch_and_bound<PR: PivotRule>(settings: SearchSettings) -> BranchAndBound<Simplex<PR>> {
    BranchAndBound::new(Simplex::new(), settings)
}

fn print_solution<F: Integral>(solution: &Solution<F>) {
    println!("{}", solution);
    println!("Search statistics: {}", solution.statistics);
}
