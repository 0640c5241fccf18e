//! Complex numbers in polar (magnitude, argument) form.
//!
//! This is the element type of AC admittance matrices. Multiplication and
//! division act directly on magnitude and argument; addition and
//! subtraction round-trip through [`Cartesian`](super::Cartesian).
//!
//! The magnitude is stored exactly as given, including a negative sign.
//! Negation flips the magnitude rather than rotating the argument, so a
//! cofactor sign shows up as a negative magnitude in printed output.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{cartesian_to_polar, polar_to_cartesian, One, Scalar, Zero};

/// A phasor `magnitude ∠ argument`, argument kept in (-pi, pi].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    mag: f64,
    arg: f64,
}

/// Reduce an angle into (-pi, pi].
fn normalize_argument(arg: f64) -> f64 {
    let reduced = arg % TAU;
    if reduced > PI {
        reduced - TAU
    } else if reduced <= -PI {
        reduced + TAU
    } else {
        reduced
    }
}

impl Polar {
    /// Create a phasor. The argument is normalized into (-pi, pi].
    pub fn new(mag: f64, arg: f64) -> Self {
        Self {
            mag,
            arg: normalize_argument(arg),
        }
    }

    /// Create a phasor from a magnitude and a phase in degrees.
    pub fn from_degrees(mag: f64, degrees: f64) -> Self {
        Self::new(mag, degrees.to_radians())
    }

    /// Magnitude (may be negative).
    pub fn magnitude(&self) -> f64 {
        self.mag
    }

    /// Argument in radians, within (-pi, pi].
    pub fn argument(&self) -> f64 {
        self.arg
    }

    pub fn set_magnitude(&mut self, mag: f64) {
        self.mag = mag;
    }

    /// Set the argument, normalizing it into (-pi, pi].
    pub fn set_argument(&mut self, arg: f64) {
        self.arg = normalize_argument(arg);
    }

    /// Real component `mag * cos(arg)`.
    pub fn real(&self) -> f64 {
        self.mag * self.arg.cos()
    }

    /// Imaginary component `mag * sin(arg)`.
    pub fn imaginary(&self) -> f64 {
        self.mag * self.arg.sin()
    }

    /// Complex conjugate.
    pub fn conjugate(&self) -> Self {
        Self::new(self.mag, -self.arg)
    }
}

impl Zero for Polar {
    fn zero() -> Self {
        Self { mag: 0.0, arg: 0.0 }
    }

    /// Any zero-magnitude phasor is zero, whatever its angle.
    fn is_zero(&self) -> bool {
        self.mag == 0.0
    }
}

impl One for Polar {
    fn one() -> Self {
        Self { mag: 1.0, arg: 0.0 }
    }
}

impl Scalar for Polar {}

impl From<f64> for Polar {
    fn from(mag: f64) -> Self {
        Self { mag, arg: 0.0 }
    }
}

impl Add for Polar {
    type Output = Polar;

    fn add(self, rhs: Polar) -> Polar {
        cartesian_to_polar(polar_to_cartesian(self) + polar_to_cartesian(rhs))
    }
}

impl Add<f64> for Polar {
    type Output = Polar;

    fn add(self, rhs: f64) -> Polar {
        self + Polar::from(rhs)
    }
}

impl Add<Polar> for f64 {
    type Output = Polar;

    fn add(self, rhs: Polar) -> Polar {
        rhs + self
    }
}

impl Sub for Polar {
    type Output = Polar;

    fn sub(self, rhs: Polar) -> Polar {
        cartesian_to_polar(polar_to_cartesian(self) - polar_to_cartesian(rhs))
    }
}

impl Sub<f64> for Polar {
    type Output = Polar;

    fn sub(self, rhs: f64) -> Polar {
        self - Polar::from(rhs)
    }
}

impl Sub<Polar> for f64 {
    type Output = Polar;

    fn sub(self, rhs: Polar) -> Polar {
        Polar::from(self) - rhs
    }
}

impl Mul for Polar {
    type Output = Polar;

    fn mul(self, rhs: Polar) -> Polar {
        Polar::new(self.mag * rhs.mag, self.arg + rhs.arg)
    }
}

impl Mul<f64> for Polar {
    type Output = Polar;

    fn mul(self, rhs: f64) -> Polar {
        Polar {
            mag: self.mag * rhs,
            arg: self.arg,
        }
    }
}

impl Mul<Polar> for f64 {
    type Output = Polar;

    fn mul(self, rhs: Polar) -> Polar {
        rhs * self
    }
}

impl Div for Polar {
    type Output = Polar;

    fn div(self, rhs: Polar) -> Polar {
        Polar::new(self.mag / rhs.mag, self.arg - rhs.arg)
    }
}

impl Div<f64> for Polar {
    type Output = Polar;

    fn div(self, rhs: f64) -> Polar {
        Polar {
            mag: self.mag / rhs,
            arg: self.arg,
        }
    }
}

impl Div<Polar> for f64 {
    type Output = Polar;

    fn div(self, rhs: Polar) -> Polar {
        cartesian_to_polar(self / polar_to_cartesian(rhs))
    }
}

impl Neg for Polar {
    type Output = Polar;

    fn neg(self) -> Polar {
        Polar {
            mag: -self.mag,
            arg: self.arg,
        }
    }
}

impl PartialEq<f64> for Polar {
    fn eq(&self, other: &f64) -> bool {
        self.mag == *other && self.arg == 0.0
    }
}

impl PartialEq<Polar> for f64 {
    fn eq(&self, other: &Polar) -> bool {
        other == self
    }
}

impl<T> AddAssign<T> for Polar
where
    Polar: Add<T, Output = Polar>,
{
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T> SubAssign<T> for Polar
where
    Polar: Sub<T, Output = Polar>,
{
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T> MulAssign<T> for Polar
where
    Polar: Mul<T, Output = Polar>,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T> DivAssign<T> for Polar
where
    Polar: Div<T, Output = Polar>,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mag_sign = if self.mag < 0.0 { '-' } else { '+' };
        let arg_sign = if self.arg < 0.0 { '-' } else { '+' };
        write!(
            f,
            "{}{:.6}∠ {}{:.6}π",
            mag_sign,
            self.mag.abs(),
            arg_sign,
            self.arg.abs() / PI
        )
    }
}
