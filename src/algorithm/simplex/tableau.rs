//! # Dense simplex tableaus
//!
//! The relaxations that branch and bound solves are small and dense: a handful of variables, the
//! original rows, and one extra row per branching decision. The tableau is therefore stored
//! explicitly.
//!
//! Column layout: the structural variables first, then one slack per row, then the artificial
//! variables. Rows with a negative right-hand side are negated, and get an artificial variable in
//! the initial basis; all other rows start with their slack in the basis.
use std::collections::HashSet;

use crate::data::linear_program::constraints::ConstraintSystem;
use crate::data::linear_program::elements::Bound;
use crate::data::number_types::traits::OrderedField;

/// Which objective the relative costs currently belong to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Minimizing the sum of the artificial variables.
    One,
    /// Minimizing the actual objective; artificial variables may no longer enter the basis.
    Two,
}

/// Holds all information necessary to execute the Simplex algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau<F> {
    /// Constraint coefficients, `nr_rows` rows of `nr_columns` values, already multiplied with the
    /// basis inverse.
    rows: Vec<Vec<F>>,
    /// Values of the basic variables.
    rhs: Vec<F>,
    /// Relative cost of each column.
    relative_cost: Vec<F>,
    /// Objective value of the current basic feasible solution.
    objective_value: F,

    /// For each row, the column that is basic in it.
    basis_indices: Vec<usize>,
    /// The same columns, for fast lookup.
    basis_columns: HashSet<usize>,

    nr_structural: usize,
    nr_artificial: usize,
    phase: Phase,
}

impl<F: OrderedField> Tableau<F> {
    /// Create a tableau in a basic feasible state for the artificial (phase one) problem.
    ///
    /// Lower bounds are shifted out of the problem, finite upper bounds become additional rows.
    pub fn new(constraints: &ConstraintSystem<F>, bounds: &[Bound<F>]) -> Self {
        let nr_structural = constraints.nr_variables();
        debug_assert_eq!(bounds.len(), nr_structural);

        let mut coefficient_rows = Vec::new();
        let mut rhs = Vec::new();
        for row in constraints.rows() {
            let shift = row.coefficients.iter().zip(bounds)
                .fold(F::zero(), |total, (a, bound)| total + a.clone() * bound.lower.clone());
            coefficient_rows.push(row.coefficients.clone());
            rhs.push(row.limit.clone() - shift);
        }
        for (variable, bound) in bounds.iter().enumerate() {
            if let Some(upper) = &bound.upper {
                let mut coefficients = vec![F::zero(); nr_structural];
                coefficients[variable] = F::one();
                coefficient_rows.push(coefficients);
                rhs.push(upper.clone() - bound.lower.clone());
            }
        }

        let nr_rows = coefficient_rows.len();
        let nr_artificial = rhs.iter().filter(|value| value.is_negative()).count();
        let nr_columns = nr_structural + nr_rows + nr_artificial;

        let mut rows = Vec::with_capacity(nr_rows);
        let mut basis_indices = Vec::with_capacity(nr_rows);
        let mut next_artificial = nr_structural + nr_rows;
        for (index, (mut row, value)) in coefficient_rows.into_iter().zip(&mut rhs).enumerate() {
            row.resize(nr_columns, F::zero());
            row[nr_structural + index] = F::one();

            if value.is_negative() {
                for element in &mut row {
                    *element = -element.clone();
                }
                *value = -value.clone();
                row[next_artificial] = F::one();
                basis_indices.push(next_artificial);
                next_artificial += 1;
            } else {
                basis_indices.push(nr_structural + index);
            }

            rows.push(row);
        }

        // Artificial cost is one, relative to the artificial basis
        let mut relative_cost = vec![F::zero(); nr_columns];
        for column in (nr_structural + nr_rows)..nr_columns {
            relative_cost[column] = F::one();
        }
        let mut objective_value = F::zero();
        for (row, &basic) in basis_indices.iter().enumerate() {
            if basic >= nr_structural + nr_rows {
                for (cost, element) in relative_cost.iter_mut().zip(&rows[row]) {
                    *cost = cost.clone() - element.clone();
                }
                objective_value = objective_value + rhs[row].clone();
            }
        }

        let basis_columns = basis_indices.iter().copied().collect();

        Self {
            rows,
            rhs,
            relative_cost,
            objective_value,
            basis_indices,
            basis_columns,
            nr_structural,
            nr_artificial,
            phase: Phase::One,
        }
    }

    /// Replace the artificial cost by the real objective function.
    ///
    /// Relative costs are recomputed with respect to the current basis.
    pub fn start_phase_two(&mut self, objective: &[F]) {
        debug_assert_eq!(objective.len(), self.nr_structural);

        self.relative_cost = vec![F::zero(); self.nr_columns()];
        self.relative_cost[..self.nr_structural].clone_from_slice(objective);
        self.objective_value = F::zero();

        for row in 0..self.nr_rows() {
            let basic = self.basis_indices[row];
            let factor = self.relative_cost[basic].clone();
            if factor.is_zero() {
                continue;
            }

            for (cost, element) in self.relative_cost.iter_mut().zip(&self.rows[row]) {
                *cost = cost.clone() - factor.clone() * element.clone();
            }
            self.objective_value = self.objective_value.clone() + factor * self.rhs[row].clone();
        }

        self.phase = Phase::Two;
    }

    /// Move the basis from one basic feasible solution to the next.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: Row of the variable leaving the basis.
    /// * `pivot_column`: Column of the variable entering the basis.
    pub fn bring_into_basis(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(!self.is_in_basis(pivot_column));
        debug_assert!(!self.rows[pivot_row][pivot_column].is_zero());

        let pivot_value = self.rows[pivot_row][pivot_column].clone();
        for element in &mut self.rows[pivot_row] {
            *element = element.clone() / pivot_value.clone();
        }
        self.rhs[pivot_row] = self.rhs[pivot_row].clone() / pivot_value;

        let normalized_row = self.rows[pivot_row].clone();
        let normalized_rhs = self.rhs[pivot_row].clone();
        for row in 0..self.nr_rows() {
            if row == pivot_row {
                continue;
            }
            let factor = self.rows[row][pivot_column].clone();
            if factor.is_zero() {
                continue;
            }

            for (element, pivot_element) in self.rows[row].iter_mut().zip(&normalized_row) {
                *element = element.clone() - factor.clone() * pivot_element.clone();
            }
            self.rows[row][pivot_column] = F::zero();
            self.rhs[row] = self.rhs[row].clone() - factor * normalized_rhs.clone();
        }

        let factor = self.relative_cost[pivot_column].clone();
        if !factor.is_zero() {
            for (cost, pivot_element) in self.relative_cost.iter_mut().zip(&normalized_row) {
                *cost = cost.clone() - factor.clone() * pivot_element.clone();
            }
            self.relative_cost[pivot_column] = F::zero();
            self.objective_value = self.objective_value.clone() + factor * normalized_rhs;
        }

        let leaving = self.basis_indices[pivot_row];
        self.basis_columns.remove(&leaving);
        self.basis_columns.insert(pivot_column);
        self.basis_indices[pivot_row] = pivot_column;
    }

    /// Ratio test: the row whose basic variable reaches zero first when increasing the column.
    ///
    /// Ties are broken on the lowest basic column index.
    ///
    /// # Return value
    ///
    /// `None` if no element of the column is positive, meaning that the problem is unbounded in
    /// this direction.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let element = &self.rows[row][column];
            if !element.is_significantly_positive() {
                continue;
            }

            let ratio = self.rhs[row].clone() / element.clone();
            let better = match &best {
                None => true,
                Some((best_row, best_ratio)) => ratio < *best_ratio || (
                    ratio == *best_ratio && self.basis_indices[row] < self.basis_indices[*best_row]
                ),
            };
            if better {
                best = Some((row, ratio));
            }
        }

        best.map(|(row, _)| row)
    }

    /// Pivot artificial variables out of the basis after phase one.
    ///
    /// Rows in which no other column has a nonzero coefficient are redundant; their artificial
    /// variable stays in the basis at value zero and those rows are never selected again.
    pub fn remove_artificial_from_basis(&mut self) {
        debug_assert_eq!(self.phase, Phase::One);

        let first_artificial = self.first_artificial_column();
        for row in 0..self.nr_rows() {
            if self.basis_indices[row] < first_artificial {
                continue;
            }

            let replacement = (0..first_artificial)
                .filter(|&column| !self.is_in_basis(column))
                .find(|&column| !self.rows[row][column].is_significantly_zero());
            if let Some(column) = replacement {
                self.bring_into_basis(row, column);
            }
        }
    }

    /// Values of the structural variables in the current basic feasible solution.
    ///
    /// # Arguments
    ///
    /// * `bounds`: Bounds that were used to construct the tableau, such that the lower bound shift
    /// can be undone.
    pub fn current_bfs(&self, bounds: &[Bound<F>]) -> Vec<F> {
        let mut x = bounds.iter().map(|bound| bound.lower.clone()).collect::<Vec<_>>();
        for (row, &column) in self.basis_indices.iter().enumerate() {
            if column < self.nr_structural {
                x[column] = x[column].clone() + self.rhs[row].clone();
            }
        }

        x
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis_columns.contains(&column)
    }

    /// Relative cost of a column.
    pub fn relative_cost(&self, column: usize) -> &F {
        &self.relative_cost[column]
    }

    /// Objective value of the current basic feasible solution, for the current phase.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Number of columns that may enter the basis in the current phase.
    pub fn nr_active_columns(&self) -> usize {
        match self.phase {
            Phase::One => self.nr_columns(),
            Phase::Two => self.first_artificial_column(),
        }
    }

    /// Whether there are artificial variables, and phase one is needed.
    pub fn has_artificial_variables(&self) -> bool {
        self.nr_artificial > 0
    }

    /// Number of rows, including the ones created from upper bounds.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns: structural, slack and artificial.
    pub fn nr_columns(&self) -> usize {
        self.nr_structural + self.nr_rows() + self.nr_artificial
    }

    fn first_artificial_column(&self) -> usize {
        self.nr_structural + self.nr_rows()
    }
}
