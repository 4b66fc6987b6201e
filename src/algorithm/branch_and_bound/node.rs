//! # Search nodes
//!
//! A node is a sub-polytope of the original feasible region: the original constraints plus the
//! bounds added by the branching decisions on the path from the root.
use crate::data::linear_program::constraints::{ConstraintSystem, Row};
use crate::data::linear_program::elements::BoundDirection;
use crate::data::number_types::traits::Integral;

/// A node in the branch and bound search tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<F> {
    /// Constraints defining the region of this node.
    pub constraints: ConstraintSystem<F>,
    /// Depth in the tree (0 for root).
    pub depth: usize,
}

impl<F> SearchNode<F> {
    /// Create the root node.
    pub fn root(constraints: ConstraintSystem<F>) -> Self {
        Self { constraints, depth: 0 }
    }
}

impl<F: Integral> SearchNode<F> {
    /// Split this node on a variable with a fractional value.
    ///
    /// No integer lies strictly between `floor(value)` and `ceil(value)`, so every integer point of
    /// this node is in exactly one of the children.
    ///
    /// # Arguments
    ///
    /// * `variable`: Index of the variable to branch on.
    /// * `value`: Its fractional value in the relaxation optimum of this node.
    ///
    /// # Return value
    ///
    /// The child with `x_k <= floor(value)` and the child with `x_k >= ceil(value)`, in that order.
    pub fn branch(&self, variable: usize, value: &F) -> (Self, Self) {
        let nr_variables = self.constraints.nr_variables();

        let child = |direction, bound| Self {
            constraints: self.constraints.extended_with(
                Row::variable_bound(variable, nr_variables, direction, bound),
            ),
            depth: self.depth + 1,
        };

        (
            child(BoundDirection::Upper, value.floor()),
            child(BoundDirection::Lower, value.ceil()),
        )
    }
}
