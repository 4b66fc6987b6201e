//! # Configuration of the search
//!
//! The defaults reproduce a plain exhaustive enumeration: every leaf is visited, one after the
//! other.

/// Whether nodes may be skipped when they can't improve on the best solution found so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Explore every node of the tree. The solution set contains all integral leaves.
    #[default]
    Exhaustive,
    /// Skip nodes whose relaxation value doesn't exceed that of the incumbent.
    ///
    /// The optimal value is the same as with `Exhaustive`, but the solution set only contains the
    /// leaves that improved on the incumbent when they were found.
    Incumbent,
}

/// How the two subtrees below a node are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One node at a time, using an explicit stack.
    #[default]
    Sequential,
    /// Floor and ceil subtrees are processed as independent tasks on the rayon thread pool.
    Parallel,
}

/// Branch and bound settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    /// A floating point value is considered integral if it is at most this far from the nearest
    /// integer. Exact number types ignore this value.
    pub integrality_tolerance: f64,

    /// Node skipping policy.
    pub pruning: Pruning,

    /// Sequential or fork-join processing.
    pub execution: Execution,

    /// Maximum number of relaxations to solve (None = unlimited).
    pub max_nodes: Option<u64>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            integrality_tolerance: 1e-9,
            pruning: Pruning::default(),
            execution: Execution::default(),
            max_nodes: None,
        }
    }
}

impl SearchSettings {
    /// Settings that treat a float as integral only if it is exactly an integer.
    pub fn exact() -> Self {
        Self::default().with_integrality_tolerance(0_f64)
    }

    /// Set the integrality tolerance.
    pub fn with_integrality_tolerance(mut self, tolerance: f64) -> Self {
        debug_assert!(tolerance >= 0_f64);

        self.integrality_tolerance = tolerance;
        self
    }

    /// Set the pruning policy.
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Set the execution strategy.
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Set maximum nodes.
    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = Some(nodes);
        self
    }
}
