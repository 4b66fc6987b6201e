//! # Building blocks to describe integer linear programs.
use std::ops::{Neg, Not};

use num_traits::{One, Zero};

/// Direction of a bound.
///
/// Branching on a variable with fractional value `v` creates one child with an upper bound
/// `x <= floor(v)` and one with a lower bound `x >= ceil(v)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// In the case of a variable, x >= b.
    Lower,
    /// In the case of a variable, x <= b.
    Upper,
}

impl BoundDirection {
    /// Convert a bound direction into a positive or negative one.
    ///
    /// An upper bound can be written as a `<=` row directly, a lower bound needs to be negated.
    #[must_use]
    pub fn into<F: One + Neg<Output = F>>(self) -> F {
        match self {
            BoundDirection::Lower => -F::one(),
            BoundDirection::Upper => F::one(),
        }
    }
}

impl Not for BoundDirection {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// The values each of the variables may take.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum VariableDomain {
    /// Each variable is either zero or one.
    Binary,
    /// Each variable is a nonnegative integer.
    #[default]
    NonNegativeInteger,
}

impl VariableDomain {
    /// Domain matching the flag that callers of the solver pass around.
    pub fn from_binary_flag(binary: bool) -> Self {
        if binary {
            VariableDomain::Binary
        } else {
            VariableDomain::NonNegativeInteger
        }
    }

    /// Bounds of the continuous relaxation of this domain, for `nr_variables` variables.
    pub fn bounds<F: Zero + One + Clone>(self, nr_variables: usize) -> Vec<Bound<F>> {
        let bound = match self {
            VariableDomain::Binary => Bound::new(F::zero(), Some(F::one())),
            VariableDomain::NonNegativeInteger => Bound::new(F::zero(), None),
        };

        vec![bound; nr_variables]
    }
}

/// Interval a single variable of the relaxation is restricted to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Bound<F> {
    /// Finite lower bound.
    pub lower: F,
    /// Upper bound, if there is one.
    pub upper: Option<F>,
}

impl<F> Bound<F> {
    /// Create a new bound.
    pub fn new(lower: F, upper: Option<F>) -> Self {
        Self { lower, upper }
    }
}
