//! # Systems of `<=` constraints
//!
//! Branch and bound only ever adds rows to a system. Each child of a node gets its own copy, such
//! that sibling branches never observe each other's rows.
use num_traits::{One, Zero};

use crate::data::linear_program::elements::BoundDirection;
use crate::error::IlpError;

/// A single inequality `coefficients · x <= limit`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row<F> {
    /// Dense coefficients, one for each variable.
    pub coefficients: Vec<F>,
    /// Right-hand side.
    pub limit: F,
}

impl<F> Row<F> {
    /// Create a new row.
    pub fn new(coefficients: Vec<F>, limit: F) -> Self {
        Self { coefficients, limit }
    }
}

impl<F: Zero + One + Clone + std::ops::Neg<Output = F>> Row<F> {
    /// Row bounding a single variable.
    ///
    /// # Arguments
    ///
    /// * `variable`: Index of the variable to bound.
    /// * `nr_variables`: Length of the coefficient vector.
    /// * `direction`: Upper bound gives `x_k <= value`, lower bound `-x_k <= -value`.
    /// * `value`: Bound value.
    pub fn variable_bound(
        variable: usize,
        nr_variables: usize,
        direction: BoundDirection,
        value: F,
    ) -> Self {
        debug_assert!(variable < nr_variables);

        let sign: F = direction.into();
        let mut coefficients = vec![F::zero(); nr_variables];
        coefficients[variable] = sign.clone();

        Self::new(coefficients, sign * value)
    }
}

/// An ordered collection of rows over a fixed number of variables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ConstraintSystem<F> {
    nr_variables: usize,
    rows: Vec<Row<F>>,
}

impl<F> ConstraintSystem<F> {
    /// Create a system without any rows.
    pub fn empty(nr_variables: usize) -> Self {
        Self { nr_variables, rows: Vec::new() }
    }

    /// Create a system from a dense matrix and right-hand side.
    ///
    /// # Errors
    ///
    /// If the number of limits doesn't match the number of rows in the matrix, or if a row doesn't
    /// have exactly `nr_variables` coefficients.
    pub fn new(
        nr_variables: usize,
        weights: Vec<Vec<F>>,
        limits: Vec<F>,
    ) -> Result<Self, IlpError> {
        if weights.len() != limits.len() {
            return Err(IlpError::InvalidProblem(format!(
                "{} constraint rows but {} limits",
                weights.len(),
                limits.len(),
            )));
        }
        if let Some(index) = weights.iter().position(|row| row.len() != nr_variables) {
            return Err(IlpError::InvalidProblem(format!(
                "constraint row {} has {} coefficients, expected {}",
                index,
                weights[index].len(),
                nr_variables,
            )));
        }

        let rows = weights.into_iter()
            .zip(limits)
            .map(|(coefficients, limit)| Row::new(coefficients, limit))
            .collect();

        Ok(Self { nr_variables, rows })
    }

    /// Number of variables each row has a coefficient for.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// All rows, in insertion order.
    pub fn rows(&self) -> &[Row<F>] {
        &self.rows
    }

    /// Copy of this system with one more row appended.
    ///
    /// The receiver is left as it is.
    #[must_use]
    pub fn extended_with(&self, row: Row<F>) -> Self
    where
        F: Clone,
    {
        debug_assert_eq!(row.coefficients.len(), self.nr_variables);

        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.extend(self.rows.iter().cloned());
        rows.push(row);

        Self { nr_variables: self.nr_variables, rows }
    }

    /// Whether `x` satisfies every row.
    pub fn is_satisfied_by(&self, x: &[F]) -> bool
    where
        F: Zero + Clone + PartialOrd + std::ops::Mul<Output = F>,
    {
        debug_assert_eq!(x.len(), self.nr_variables);

        self.rows.iter().all(|row| {
            let lhs = row.coefficients.iter().zip(x)
                .fold(F::zero(), |total, (a, v)| total + a.clone() * v.clone());
            lhs <= row.limit
        })
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::constraints::{ConstraintSystem, Row};
    use crate::data::linear_program::elements::BoundDirection;
    use crate::error::IlpError;

    #[test]
    fn mismatched_dimensions() {
        let result = ConstraintSystem::new(2, vec![vec![1_f64, 2_f64]], vec![]);
        assert!(matches!(result, Err(IlpError::InvalidProblem(_))));

        let result = ConstraintSystem::new(2, vec![vec![1_f64]], vec![3_f64]);
        assert!(matches!(result, Err(IlpError::InvalidProblem(_))));
    }

    #[test]
    fn extension_leaves_parent_untouched() {
        let parent = ConstraintSystem::new(2, vec![vec![1_f64, 1_f64]], vec![4_f64]).unwrap();

        let floor = parent.extended_with(Row::variable_bound(0, 2, BoundDirection::Upper, 1_f64));
        let ceil = parent.extended_with(Row::variable_bound(0, 2, BoundDirection::Lower, 2_f64));

        assert_eq!(parent.nr_rows(), 1);
        assert_eq!(floor.nr_rows(), 2);
        assert_eq!(ceil.nr_rows(), 2);
        assert_eq!(floor.rows()[1], Row::new(vec![1_f64, 0_f64], 1_f64));
        assert_eq!(ceil.rows()[1], Row::new(vec![-1_f64, 0_f64], -2_f64));
    }

    #[test]
    fn satisfaction() {
        let system = ConstraintSystem::new(
            2,
            vec![vec![1_f64, 1_f64], vec![-1_f64, 0_f64]],
            vec![4_f64, -1_f64],
        ).unwrap();

        assert!(system.is_satisfied_by(&[1_f64, 3_f64]));
        assert!(!system.is_satisfied_by(&[0_f64, 3_f64]));
        assert!(!system.is_satisfied_by(&[2_f64, 3_f64]));
        assert!(ConstraintSystem::<f64>::empty(2).is_satisfied_by(&[5_f64, 5_f64]));
    }
}
