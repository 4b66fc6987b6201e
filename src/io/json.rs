//! # Importing JSON problem files
//!
//! A problem file is a single JSON object:
//!
//! ```json
//! {
//!     "objective": [170000, 125000],
//!     "weights": [[600000, 250000]],
//!     "limits": [1250000],
//!     "binary": false
//! }
//! ```
//!
//! describing `max objective · x s.t. weights x <= limits`, with `x` nonnegative and integral, or
//! in `{0, 1}` if `binary` is set. The `binary` field may be omitted and defaults to `false`.
use serde::{Deserialize, Serialize};

use crate::data::linear_program::constraints::ConstraintSystem;
use crate::data::linear_program::elements::VariableDomain;
use crate::data::linear_program::problem::Problem;
use crate::io::error::ImportError;

/// Contents of a problem file, before conversion to the number type that is solved with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProblemFile {
    /// Coefficients to maximize.
    pub objective: Vec<f64>,
    /// Constraint matrix, one row per constraint.
    pub weights: Vec<Vec<f64>>,
    /// Right-hand side of each constraint.
    pub limits: Vec<f64>,
    /// Whether each variable is restricted to `{0, 1}`.
    #[serde(default)]
    pub binary: bool,
}

/// Parse a problem description in JSON form.
///
/// # Errors
///
/// If the text is not a JSON object with the expected fields.
pub fn parse(program: &str) -> Result<ProblemFile, ImportError> {
    serde_json::from_str(program).map_err(ImportError::Parse)
}

impl ProblemFile {
    /// Capital budgeting: choose among six investments with a budget of 1 250 000.
    pub fn capital_budgeting(binary: bool) -> Self {
        Self {
            objective: vec![170000., 125000., 200000., 150000., 90000., 70000.],
            weights: vec![vec![600000., 250000., 750000., 200000., 250000., 100000.]],
            limits: vec![1250000.],
            binary,
        }
    }

    /// Convert into a problem over the number type `F`.
    ///
    /// # Arguments
    ///
    /// * `convert`: Representation of a float in `F`, or `None` if there is none (for example for
    /// infinite values when converting to a rational type).
    ///
    /// # Errors
    ///
    /// If a value can't be converted, or the dimensions of the data don't match.
    pub fn into_problem<F>(
        self,
        convert: impl Fn(f64) -> Option<F>,
    ) -> Result<(Problem<F>, ConstraintSystem<F>), ImportError> {
        let convert_at = |value: f64, location: String| {
            convert(value).ok_or(ImportError::Conversion { location, value })
        };

        let objective = self.objective.iter()
            .enumerate()
            .map(|(j, &value)| convert_at(value, format!("objective[{}]", j)))
            .collect::<Result<Vec<_>, _>>()?;
        let weights = self.weights.iter()
            .enumerate()
            .map(|(i, row)| row.iter()
                .enumerate()
                .map(|(j, &value)| convert_at(value, format!("weights[{}][{}]", i, j)))
                .collect::<Result<Vec<_>, _>>()
            )
            .collect::<Result<Vec<_>, _>>()?;
        let limits = self.limits.iter()
            .enumerate()
            .map(|(i, &value)| convert_at(value, format!("limits[{}]", i)))
            .collect::<Result<Vec<_>, _>>()?;

        let nr_variables = objective.len();
        let problem = Problem::new(objective, VariableDomain::from_binary_flag(self.binary))?;
        let constraints = ConstraintSystem::new(nr_variables, weights, limits)?;

        Ok((problem, constraints))
    }
}
