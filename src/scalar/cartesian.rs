//! Complex numbers in cartesian (real, imaginary) form.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::Complex64;
use num_traits::{One, Zero};

use super::Scalar;

/// A complex number `re + i*im`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian(Complex64);

impl Cartesian {
    /// The imaginary unit `i`.
    pub const I: Cartesian = Cartesian(Complex64::new(0.0, 1.0));

    /// Create a complex number from its real and imaginary parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    /// Real part.
    pub fn real(&self) -> f64 {
        self.0.re
    }

    /// Imaginary part.
    pub fn imaginary(&self) -> f64 {
        self.0.im
    }

    /// Complex conjugate `re - i*im`.
    pub fn conjugate(&self) -> Self {
        Self(self.0.conj())
    }

    /// Euclidean norm.
    pub fn absolute(&self) -> f64 {
        self.0.norm()
    }

    /// Angle from the positive real axis in (-pi, pi].
    ///
    /// The zero value has argument 0 whatever the signs of its parts, and a
    /// negative real axis value yields `pi` even with a `-0.0` imaginary part.
    pub fn argument(&self) -> f64 {
        if self.0.is_zero() {
            return 0.0;
        }
        let arg = self.0.arg();
        if arg == -PI {
            PI
        } else {
            arg
        }
    }

    /// `e` raised to this value, `e^(b+ic) = e^b * (cos c + i sin c)`.
    pub fn exp(&self) -> Self {
        Self(self.0.exp())
    }

    /// This value raised to a complex power.
    pub fn powc(&self, exponent: Cartesian) -> Self {
        Self(self.0.powc(exponent.0))
    }
}

impl From<Complex64> for Cartesian {
    fn from(z: Complex64) -> Self {
        Self(z)
    }
}

impl From<Cartesian> for Complex64 {
    fn from(z: Cartesian) -> Self {
        z.0
    }
}

impl Zero for Cartesian {
    fn zero() -> Self {
        Self(Complex64::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Cartesian {
    fn one() -> Self {
        Self(Complex64::one())
    }
}

impl Scalar for Cartesian {}

impl From<f64> for Cartesian {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

/// Forward a binary operator to `Complex64`, for `Cartesian` and bare `f64`
/// operands on either side.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Cartesian {
            type Output = Cartesian;

            fn $method(self, rhs: Cartesian) -> Cartesian {
                Cartesian(self.0.$method(rhs.0))
            }
        }

        impl $trait<f64> for Cartesian {
            type Output = Cartesian;

            fn $method(self, rhs: f64) -> Cartesian {
                Cartesian(self.0.$method(rhs))
            }
        }

        impl $trait<Cartesian> for f64 {
            type Output = Cartesian;

            fn $method(self, rhs: Cartesian) -> Cartesian {
                Cartesian(Complex64::from(self).$method(rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Neg for Cartesian {
    type Output = Cartesian;

    fn neg(self) -> Cartesian {
        Cartesian(-self.0)
    }
}

impl PartialEq<f64> for Cartesian {
    fn eq(&self, other: &f64) -> bool {
        self.0.re == *other && self.0.im == 0.0
    }
}

impl PartialEq<Cartesian> for f64 {
    fn eq(&self, other: &Cartesian) -> bool {
        other == self
    }
}

impl<T> AddAssign<T> for Cartesian
where
    Cartesian: Add<T, Output = Cartesian>,
{
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T> SubAssign<T> for Cartesian
where
    Cartesian: Sub<T, Output = Cartesian>,
{
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T> MulAssign<T> for Cartesian
where
    Cartesian: Mul<T, Output = Cartesian>,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T> DivAssign<T> for Cartesian
where
    Cartesian: Div<T, Output = Cartesian>,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Cartesian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Complex64 { re, im } = self.0;
        let re_sign = if re < 0.0 { '-' } else { '+' };
        let im_sign = if im < 0.0 { '-' } else { '+' };
        write!(f, "{}{:.6}{}{:.6}i", re_sign, re.abs(), im_sign, im.abs())
    }
}
