//! # Branch and bound tree search
//!
//! Every node solves its relaxation once. An infeasible relaxation ends the branch, an integral
//! vertex is collected, and a fractional vertex is split on its first fractional coordinate.
//!
//! Collected vertices are always ordered as a depth first traversal that visits the floor child
//! before the ceil child would order them, regardless of how the tree is processed.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::algorithm::{OptimizationResult, SolveRelaxation};
use crate::algorithm::branch_and_bound::node::SearchNode;
use crate::algorithm::branch_and_bound::statistics::SearchStatistics;
use crate::algorithm::utilities::{first_fractional_index, select_best, snap_to_integers};
use crate::data::linear_program::constraints::ConstraintSystem;
use crate::data::linear_program::elements::Bound;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Integral;
use crate::error::{IlpError, IlpResult};
use crate::settings::{Execution, Pruning, SearchSettings};

/// All integral leaves of a search tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration<F> {
    /// Integral relaxation vertices, floor subtrees before ceil subtrees.
    pub solutions: Vec<Vec<F>>,
    /// Counters of the search.
    pub statistics: SearchStatistics,
}

impl<F> Enumeration<F> {
    fn empty() -> Self {
        Self { solutions: Vec::new(), statistics: SearchStatistics::default() }
    }

    /// Append the results of a subtree that comes after all subtrees seen so far.
    fn append(&mut self, mut other: Self) {
        self.solutions.append(&mut other.solutions);
        self.statistics.merge(&other.statistics);
    }
}

/// Branch and bound search, using a relaxation oracle `O`.
#[derive(Debug, Clone)]
pub struct BranchAndBound<O> {
    oracle: O,
    settings: SearchSettings,
}

/// What the relaxation of a single node says about it.
enum Evaluation<F> {
    Infeasible,
    Unbounded,
    Integral {
        vertex: Vec<F>,
        value: F,
    },
    Fractional {
        variable: usize,
        coordinate: F,
        value: F,
    },
}

/// Data shared by all nodes of a single search.
struct Context<F> {
    /// Objective for the oracle, which minimizes.
    objective: Vec<F>,
    /// Bounds of the relaxation, the same for each node.
    bounds: Vec<Bound<F>>,
}

/// Shared state of a parallel search.
struct SharedState<F> {
    nodes: AtomicU64,
    incumbent: Mutex<Option<F>>,
}

impl<O> BranchAndBound<O> {
    /// Create a new search.
    pub fn new(oracle: O, settings: SearchSettings) -> Self {
        Self { oracle, settings }
    }

    /// Settings used by this search.
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Find the integral leaves of the search tree of a problem.
    ///
    /// # Arguments
    ///
    /// * `problem`: Objective and domain.
    /// * `constraints`: Constraints of the root node.
    ///
    /// # Errors
    ///
    /// If the dimensions of problem and constraints don't match, the relaxation is unbounded or
    /// the node limit is reached.
    pub fn enumerate<F>(
        &self,
        problem: &Problem<F>,
        constraints: ConstraintSystem<F>,
    ) -> IlpResult<Enumeration<F>>
    where
        F: Integral,
        O: SolveRelaxation<F> + Sync,
    {
        if constraints.nr_variables() != problem.nr_variables() {
            return Err(IlpError::InvalidProblem(format!(
                "objective has {} coefficients, constraints have {}",
                problem.nr_variables(),
                constraints.nr_variables(),
            )));
        }

        let context = Context {
            objective: problem.minimization_objective(),
            bounds: problem.relaxation_bounds(),
        };
        let root = SearchNode::root(constraints);

        let enumeration = match self.settings.execution {
            Execution::Sequential => self.enumerate_sequential(problem, &context, root),
            Execution::Parallel => {
                let state = SharedState { nodes: AtomicU64::new(0), incumbent: Mutex::new(None) };
                self.enumerate_parallel(problem, &context, &state, root)
            },
        }?;

        info!(
            solutions = enumeration.solutions.len(),
            statistics = %enumeration.statistics,
            "search tree exhausted",
        );

        Ok(enumeration)
    }

    /// Find the best integral point of a problem.
    ///
    /// # Errors
    ///
    /// `IlpError::InfeasibleProblem` if there is no integral point, as well as any of the errors of
    /// `enumerate`.
    pub fn solve<F>(
        &self,
        problem: &Problem<F>,
        constraints: ConstraintSystem<F>,
    ) -> IlpResult<Solution<F>>
    where
        F: Integral,
        O: SolveRelaxation<F> + Sync,
    {
        let Enumeration { solutions, statistics } = self.enumerate(problem, constraints)?;

        select_best(problem, solutions)
            .map(|(vertex, value)| Solution::new(vertex, value, statistics))
            .ok_or(IlpError::InfeasibleProblem)
    }

    /// Process the tree one node at a time.
    ///
    /// The stack holds the nodes that still need to be processed. Pushing the ceil child before the
    /// floor child makes the processing order that of the recursive formulation.
    fn enumerate_sequential<F>(
        &self,
        problem: &Problem<F>,
        context: &Context<F>,
        root: SearchNode<F>,
    ) -> IlpResult<Enumeration<F>>
    where
        F: Integral,
        O: SolveRelaxation<F>,
    {
        let mut enumeration = Enumeration::empty();
        let mut incumbent: Option<F> = None;
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            self.check_node_limit(enumeration.statistics.nodes)?;
            enumeration.statistics.visit(node.depth);

            match self.evaluate(problem, context, &node) {
                Evaluation::Infeasible => enumeration.statistics.infeasible += 1,
                Evaluation::Unbounded => return Err(IlpError::UnboundedRelaxation),
                Evaluation::Integral { vertex, value } => {
                    if self.is_dominated(&value, incumbent.as_ref()) {
                        enumeration.statistics.pruned += 1;
                        continue;
                    }
                    enumeration.statistics.integral += 1;
                    if self.settings.pruning == Pruning::Incumbent {
                        incumbent = Some(value);
                    }
                    enumeration.solutions.push(vertex);
                },
                Evaluation::Fractional { variable, coordinate, value } => {
                    if self.is_dominated(&value, incumbent.as_ref()) {
                        enumeration.statistics.pruned += 1;
                        continue;
                    }
                    enumeration.statistics.branched += 1;
                    let (floor, ceil) = node.branch(variable, &coordinate);
                    stack.push(ceil);
                    stack.push(floor);
                },
            }
        }

        Ok(enumeration)
    }

    /// Process the floor and ceil subtree of each node as independent tasks.
    fn enumerate_parallel<F>(
        &self,
        problem: &Problem<F>,
        context: &Context<F>,
        state: &SharedState<F>,
        node: SearchNode<F>,
    ) -> IlpResult<Enumeration<F>>
    where
        F: Integral,
        O: SolveRelaxation<F> + Sync,
    {
        self.check_node_limit(state.nodes.fetch_add(1, Ordering::Relaxed))?;

        let mut enumeration = Enumeration::empty();
        enumeration.statistics.visit(node.depth);

        match self.evaluate(problem, context, &node) {
            Evaluation::Infeasible => enumeration.statistics.infeasible += 1,
            Evaluation::Unbounded => return Err(IlpError::UnboundedRelaxation),
            Evaluation::Integral { vertex, value } => {
                if self.settings.pruning == Pruning::Incumbent {
                    let mut incumbent = state.incumbent.lock()
                        .unwrap_or_else(PoisonError::into_inner);
                    if self.is_dominated(&value, incumbent.as_ref()) {
                        enumeration.statistics.pruned += 1;
                        return Ok(enumeration);
                    }
                    *incumbent = Some(value);
                }
                enumeration.statistics.integral += 1;
                enumeration.solutions.push(vertex);
            },
            Evaluation::Fractional { variable, coordinate, value } => {
                let dominated = {
                    let incumbent = state.incumbent.lock()
                        .unwrap_or_else(PoisonError::into_inner);
                    self.is_dominated(&value, incumbent.as_ref())
                };
                if dominated {
                    enumeration.statistics.pruned += 1;
                    return Ok(enumeration);
                }
                enumeration.statistics.branched += 1;

                let (floor, ceil) = node.branch(variable, &coordinate);
                drop(node);
                let (floor, ceil) = rayon::join(
                    || self.enumerate_parallel(problem, context, state, floor),
                    || self.enumerate_parallel(problem, context, state, ceil),
                );
                enumeration.append(floor?);
                enumeration.append(ceil?);
            },
        }

        Ok(enumeration)
    }

    /// Solve the relaxation of a node and classify the result.
    fn evaluate<F>(
        &self,
        problem: &Problem<F>,
        context: &Context<F>,
        node: &SearchNode<F>,
    ) -> Evaluation<F>
    where
        F: Integral,
        O: SolveRelaxation<F>,
    {
        let result = self.oracle.solve_relaxation(
            &context.objective,
            &node.constraints,
            &context.bounds,
        );

        match result {
            OptimizationResult::Infeasible => {
                debug!(depth = node.depth, "relaxation infeasible, branch dropped");
                Evaluation::Infeasible
            },
            OptimizationResult::Unbounded => {
                debug!(depth = node.depth, "relaxation unbounded");
                Evaluation::Unbounded
            },
            OptimizationResult::FiniteOptimum(x) => {
                let tolerance = self.settings.integrality_tolerance;
                match first_fractional_index(&x, tolerance) {
                    None => {
                        let vertex = snap_to_integers(x);
                        let value = problem.objective_value(&vertex);
                        debug!(depth = node.depth, %value, "integral vertex");
                        Evaluation::Integral { vertex, value }
                    },
                    Some(variable) => {
                        let value = problem.objective_value(&x);
                        let coordinate = x[variable].clone();
                        debug!(depth = node.depth, variable, %coordinate, "branching");
                        Evaluation::Fractional { variable, coordinate, value }
                    },
                }
            },
        }
    }

    /// Whether a node with this relaxation value can be skipped.
    ///
    /// Only the case when pruning is enabled and the value doesn't exceed the incumbent.
    fn is_dominated<F: Integral>(&self, value: &F, incumbent: Option<&F>) -> bool {
        match (self.settings.pruning, incumbent) {
            (Pruning::Incumbent, Some(incumbent)) => value <= incumbent,
            _ => false,
        }
    }

    /// Error if the node limit doesn't allow another relaxation to be solved.
    fn check_node_limit(&self, nodes_so_far: u64) -> IlpResult<()> {
        match self.settings.max_nodes {
            Some(limit) if nodes_so_far >= limit => {
                warn!(limit, "node limit reached, search aborted");
                Err(IlpError::NodeLimit(limit))
            },
            _ => Ok(()),
        }
    }
}
