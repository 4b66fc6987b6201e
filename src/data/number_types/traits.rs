//! # Traits
//!
//! A hierarchy of number types is defined. The hierarchy is "mathematically exact", but the
//! implementations aren't. That is, the contracts that these traits define, or their names imply,
//! may not be kept precisely. This is due to finite representation of these numbers and is a
//! fundamental problem that cannot be avoided, but perhaps be dealt with differently.
//!
//! Floating point numbers are compared against a small tolerance, the rational types compare
//! exactly.
use std::fmt::{Debug, Display};

use num_rational::{BigRational, Rational64};
use num_traits::{Num, Signed, Zero};

/// Values of a magnitude below this are treated as zero by pivoting decisions on `f64`.
pub const F64_PIVOT_TOLERANCE: f64 = 1e-9;

/// The simplex algorithm is defined over the ordered fields. All methods containing algorithmic
/// logic should be defined to work on an ordered field.
///
/// The `is_significantly_*` methods are what the algorithms use to make decisions. For exact
/// types they coincide with the sign of the value.
pub trait OrderedField:
    Num +
    Signed +
    PartialOrd +
    Clone +
    Display +
    Debug +
    Send +
    Sync
{
    /// Whether the value is positive, and not only because of rounding errors.
    fn is_significantly_positive(&self) -> bool {
        self.is_positive()
    }

    /// Whether the value is negative, and not only because of rounding errors.
    fn is_significantly_negative(&self) -> bool {
        self.is_negative()
    }

    /// Whether the value should be considered equal to zero.
    fn is_significantly_zero(&self) -> bool {
        !self.is_significantly_positive() && !self.is_significantly_negative()
    }
}

impl OrderedField for f64 {
    fn is_significantly_positive(&self) -> bool {
        *self > F64_PIVOT_TOLERANCE
    }

    fn is_significantly_negative(&self) -> bool {
        *self < -F64_PIVOT_TOLERANCE
    }
}

impl OrderedField for Rational64 {
}

impl OrderedField for BigRational {
}

/// Ordered fields that know where the integers are.
///
/// Needed to branch on fractional values.
pub trait Integral: OrderedField {
    /// Largest integer not greater than the value.
    fn floor(&self) -> Self;
    /// Smallest integer not smaller than the value.
    fn ceil(&self) -> Self;
    /// Nearest integer, rounding half-way cases away from zero.
    fn round(&self) -> Self;
    /// Whether the value is an integer.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Largest accepted distance to the nearest integer. Ignored by exact types.
    fn is_integral(&self, tolerance: f64) -> bool;
}

impl Integral for f64 {
    fn floor(&self) -> Self {
        f64::floor(*self)
    }

    fn ceil(&self) -> Self {
        f64::ceil(*self)
    }

    fn round(&self) -> Self {
        f64::round(*self)
    }

    fn is_integral(&self, tolerance: f64) -> bool {
        debug_assert!(tolerance >= 0_f64);

        if tolerance.is_zero() {
            self.fract() == 0_f64
        } else {
            (self - f64::round(*self)).abs() <= tolerance
        }
    }
}

macro_rules! exact_integral {
    ($t:ty) => {
        impl Integral for $t {
            fn floor(&self) -> Self {
                <$t>::floor(self)
            }

            fn ceil(&self) -> Self {
                <$t>::ceil(self)
            }

            fn round(&self) -> Self {
                <$t>::round(self)
            }

            fn is_integral(&self, _tolerance: f64) -> bool {
                self.is_integer()
            }
        }
    }
}

exact_integral!(Rational64);
exact_integral!(BigRational);
