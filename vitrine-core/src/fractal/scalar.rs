//! Numeric backends for the escape-time classifier
//!
//! The classifier is generic over [`Scalar`] so the fixed-point path used
//! on target can be checked against an `f64` reference on the host.

use core::ops::{Add, Mul, Neg, Sub};

use crate::fixed::Fx;

/// Arithmetic needed by the escape-time loop and interior tests
pub trait Scalar:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const QUARTER: Self;
    const SIXTEENTH: Self;

    /// Left edge of the period-2 bulb (-1.25)
    const BULB_MIN_RE: Self;
    /// Right-most point of the main cardioid (0.375)
    const CARDIOID_MAX_RE: Self;
    /// Bound on |Im| for both interior regions (0.75)
    const INTERIOR_MAX_IM: Self;

    /// Convert from a float; for constants only
    fn from_f64(value: f64) -> Self;

    /// `2 * self`
    fn double(self) -> Self;

    /// `self / 4`
    fn quarter(self) -> Self;

    /// `n * self` for a pixel offset `n`
    fn scale_by(self, n: i32) -> Self;

    /// `(re², im²)` while `re² + im² <= 4`, `None` once the orbit escapes
    fn bounded_squares(re: Self, im: Self) -> Option<(Self, Self)>;
}

impl Scalar for Fx {
    const ZERO: Self = Fx::ZERO;
    const ONE: Self = Fx::ONE;
    const QUARTER: Self = Fx::from_bits(Fx::ONE.to_bits() >> 2);
    const SIXTEENTH: Self = Fx::from_bits(Fx::ONE.to_bits() >> 4);

    const BULB_MIN_RE: Self = Fx::from_bits(-(Fx::ONE.to_bits() + (Fx::ONE.to_bits() >> 2)));
    const CARDIOID_MAX_RE: Self = Fx::from_bits((Fx::ONE.to_bits() >> 2) + (Fx::ONE.to_bits() >> 3));
    const INTERIOR_MAX_IM: Self = Fx::from_bits(Fx::ONE.to_bits() - (Fx::ONE.to_bits() >> 2));

    fn from_f64(value: f64) -> Self {
        Fx::from_f64(value)
    }

    fn double(self) -> Self {
        Fx::double(self)
    }

    fn quarter(self) -> Self {
        Fx::quarter(self)
    }

    fn scale_by(self, n: i32) -> Self {
        Fx::scale_by(self, n)
    }

    /// Squares are formed in 64 bits so the comparison is exact even when
    /// |z|² has left the Q4.28 range. Returned squares are narrowed the
    /// same way `Mul` narrows, and always fit because they are at most 4.
    fn bounded_squares(re: Self, im: Self) -> Option<(Self, Self)> {
        let re2 = re.wide_square();
        let im2 = im.wide_square();
        if re2 + im2 > Fx::FOUR.to_bits() as i64 {
            return None;
        }
        Some((Fx::from_bits(re2 as i32), Fx::from_bits(im2 as i32)))
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const QUARTER: Self = 0.25;
    const SIXTEENTH: Self = 0.0625;

    const BULB_MIN_RE: Self = -1.25;
    const CARDIOID_MAX_RE: Self = 0.375;
    const INTERIOR_MAX_IM: Self = 0.75;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn double(self) -> Self {
        self * 2.0
    }

    fn quarter(self) -> Self {
        self * 0.25
    }

    fn scale_by(self, n: i32) -> Self {
        self * n as f64
    }

    fn bounded_squares(re: Self, im: Self) -> Option<(Self, Self)> {
        let re2 = re * re;
        let im2 = im * im;
        if re2 + im2 > 4.0 {
            return None;
        }
        Some((re2, im2))
    }
}
