//! # Search statistics
use std::fmt;

/// Counters describing a single branch and bound run.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SearchStatistics {
    /// Number of relaxations solved.
    pub nodes: u64,
    /// Nodes whose relaxation had no feasible point.
    pub infeasible: u64,
    /// Nodes whose relaxation vertex was integral.
    pub integral: u64,
    /// Nodes that were split into a floor and a ceil child.
    pub branched: u64,
    /// Nodes that were dropped because they couldn't improve on the incumbent.
    pub pruned: u64,
    /// Depth of the deepest node that was visited; the root has depth zero.
    pub max_depth: usize,
}

impl SearchStatistics {
    /// Count a node at the given depth.
    pub fn visit(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Combine with the counters of a disjoint part of the tree.
    pub fn merge(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.infeasible += other.infeasible;
        self.integral += other.integral;
        self.branched += other.branched;
        self.pruned += other.pruned;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes ({} branched, {} integral, {} infeasible, {} pruned), max depth {}",
            self.nodes, self.branched, self.integral, self.infeasible, self.pruned, self.max_depth,
        )
    }
}
