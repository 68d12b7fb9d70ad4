//! Q4.28 signed fixed point
//!
//! 4 integer bits and 28 fractional bits in an `i32`: range about ±8.0,
//! resolution 2^-28 (≈ 3.7e-9). The fractal engine uses this instead of
//! floats so frames are bit-for-bit reproducible on a chip without an FPU.
//!
//! Addition and subtraction wrap silently. Values in the escape-time loop
//! stay well inside the range because iteration stops once |z|² > 4.

use core::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional bits
pub const FRAC_BITS: u32 = 28;

/// Q4.28 fixed-point number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fx(i32);

impl Fx {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << FRAC_BITS);
    pub const FOUR: Self = Self(4 << FRAC_BITS);
    /// Smallest representable positive value
    pub const EPSILON: Self = Self(1);

    /// Wrap raw Q4.28 bits
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Raw Q4.28 bits
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Convert from a float, truncating toward zero
    ///
    /// Only meant for seeding constants, never for per-pixel work.
    pub fn from_f64(value: f64) -> Self {
        Self((value * (1u32 << FRAC_BITS) as f64) as i32)
    }

    /// Convert to a float (exact: every Q4.28 value fits in an f64)
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u32 << FRAC_BITS) as f64
    }

    /// `2 * self`
    pub const fn double(self) -> Self {
        Self(self.0.wrapping_shl(1))
    }

    /// `self / 4`, rounding toward negative infinity
    pub const fn quarter(self) -> Self {
        Self(self.0 >> 2)
    }

    /// `n * self` for an integer `n`, truncated to 32 bits
    ///
    /// Used to turn a pixel offset into a plane offset: `scale.scale_by(dx)`.
    pub const fn scale_by(self, n: i32) -> Self {
        Self((n as i64 * self.0 as i64) as i32)
    }

    /// Square computed in 64 bits, before narrowing
    ///
    /// Lets the escape test look at |z|² even when it no longer fits Q4.28.
    pub const fn wide_square(self) -> i64 {
        (self.0 as i64 * self.0 as i64) >> FRAC_BITS
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Add for Fx {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fx {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Fx {
    type Output = Self;

    /// Widen, multiply, arithmetic shift right
    ///
    /// The shift floors, so negative products truncate toward negative
    /// infinity. Fractal geometry depends on this exact behavior.
    fn mul(self, rhs: Self) -> Self {
        Self(((self.0 as i64 * rhs.0 as i64) >> FRAC_BITS) as i32)
    }
}

impl Neg for Fx {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}
