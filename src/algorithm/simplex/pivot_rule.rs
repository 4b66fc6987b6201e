//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// currently made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column that is not in the basis and has a negative relative cost, if there is one.
    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize>;
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with the lowest index tie breaking of the row selection, this is Bland's rule, which
/// can't cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        (0..tableau.nr_active_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.relative_cost(column).is_significantly_negative())
    }
}

/// Pivot on the column with the most negative relative cost.
///
/// Often needs less pivots than `FirstProfitable`, but may cycle on degenerate problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        let mut best: Option<(usize, &F)> = None;
        for column in (0..tableau.nr_active_columns()).filter(|&column| !tableau.is_in_basis(column)) {
            let cost = tableau.relative_cost(column);
            if !cost.is_significantly_negative() {
                continue;
            }
            match best {
                Some((_, best_cost)) if cost >= best_cost => {},
                _ => best = Some((column, cost)),
            }
        }

        best.map(|(column, _)| column)
    }
}
