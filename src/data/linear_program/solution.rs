//! # Representation of optimal solutions
//!
//! Once the search is exhausted, the best integer vertex that was found is reported together with
//! its objective value and some numbers describing the search.
use std::fmt;

use itertools::Itertools;

use crate::algorithm::branch_and_bound::statistics::SearchStatistics;

/// The best integer feasible point of a problem.
///
/// This struct would probably be used to print the optimal solution for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<F> {
    /// Value of each of the variables.
    pub vertex: Vec<F>,
    /// Value of the objective function at `vertex`.
    pub objective_value: F,
    /// How much work it took to find this solution.
    pub statistics: SearchStatistics,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    pub fn new(vertex: Vec<F>, objective_value: F, statistics: SearchStatistics) -> Self {
        Self { vertex, objective_value, statistics }
    }

    /// Split into the vertex and the objective value.
    pub fn into_pair(self) -> (Vec<F>, F) {
        (self.vertex, self.objective_value)
    }
}

impl<F: fmt::Display> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The best solution was found in: [{}]", self.vertex.iter().join(", "))?;
        write!(f, "And the optimal value is: {}", self.objective_value)
    }
}
