//! Scalar algebra used as matrix element types.
//!
//! Two scalar families are supported:
//! - plain `f64` for DC analysis (conductances and currents)
//! - complex phasors for AC analysis, in two interchangeable forms:
//!   [`Cartesian`] (real, imaginary) and [`Polar`] (magnitude, argument)
//!
//! The matrix engine only needs the operations captured by [`Scalar`]:
//! the four arithmetic operators, negation, exact equality and the
//! [`Zero`]/[`One`] constants from `num_traits`. Both complex forms also
//! interoperate with bare `f64` operands in either order.

mod cartesian;
mod polar;

pub use cartesian::Cartesian;
pub use polar::Polar;

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;
pub use num_traits::{One, Zero};

/// Capability contract for a matrix element type.
///
/// `Zero::is_zero` is what the determinant and the singularity check rely
/// on, so it must be exact.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl Scalar for f64 {}

/// Convert a polar phasor to cartesian form.
pub fn polar_to_cartesian(polar: Polar) -> Cartesian {
    Cartesian::from(Complex64::from_polar(polar.magnitude(), polar.argument()))
}

/// Convert a cartesian complex number to polar form.
///
/// Uses [`Cartesian::argument`] rather than `Complex64::to_polar` so the zero
/// value keeps argument 0.
pub fn cartesian_to_polar(cart: Cartesian) -> Polar {
    Polar::new(cart.absolute(), cart.argument())
}

impl From<Polar> for Cartesian {
    fn from(polar: Polar) -> Self {
        polar_to_cartesian(polar)
    }
}

impl From<Cartesian> for Polar {
    fn from(cart: Cartesian) -> Self {
        cartesian_to_polar(cart)
    }
}
