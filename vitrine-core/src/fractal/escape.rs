//! Escape-time classification of a single point

use super::scalar::Scalar;

/// Outcome of classifying a point `c`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Classification {
    /// Inside the main cardioid or the period-2 bulb; no iteration done
    Interior,
    /// Still bounded when the iteration cap was reached
    Bounded,
    /// Escaped after this many iterations
    Escaped(u16),
}

impl Classification {
    /// Iteration count for coloring; points in the set map to `max_iter`
    pub fn iterations(self, max_iter: u16) -> u16 {
        match self {
            Classification::Escaped(n) => n,
            Classification::Interior | Classification::Bounded => max_iter,
        }
    }
}

/// Closed-form membership test for the two largest components of the set
pub fn in_cardioid_or_bulb<T: Scalar>(cr: T, ci: T) -> bool {
    // Both regions lie inside this box; outside it the cardioid product
    // below could leave the fixed-point range
    if cr < T::BULB_MIN_RE || cr > T::CARDIOID_MAX_RE {
        return false;
    }
    if ci > T::INTERIOR_MAX_IM || ci < -T::INTERIOR_MAX_IM {
        return false;
    }

    let ci2 = ci * ci;

    let xm = cr - T::QUARTER;
    let q = xm * xm + ci2;
    if q * (q + xm) <= ci2.quarter() {
        return true;
    }

    let xp = cr + T::ONE;
    xp * xp + ci2 <= T::SIXTEENTH
}

/// Iterate `z ← z² + c` from zero until `|z|² > 4` or `max_iter` steps
///
/// Returns the number of completed steps; `max_iter` means the orbit never
/// escaped. The bound is strict, so an orbit sitting exactly on |z| = 2
/// keeps iterating.
pub fn escape_time<T: Scalar>(cr: T, ci: T, max_iter: u16) -> u16 {
    let mut zr = T::ZERO;
    let mut zi = T::ZERO;
    let mut it = 0;

    while it < max_iter {
        let Some((zr2, zi2)) = T::bounded_squares(zr, zi) else {
            break;
        };
        let cross = (zr * zi).double();
        zr = zr2 - zi2 + cr;
        zi = cross + ci;
        it += 1;
    }

    it
}

/// Classify `c`, short-circuiting the interior regions
pub fn classify<T: Scalar>(cr: T, ci: T, max_iter: u16) -> Classification {
    if in_cardioid_or_bulb(cr, ci) {
        return Classification::Interior;
    }
    match escape_time(cr, ci, max_iter) {
        n if n >= max_iter => Classification::Bounded,
        n => Classification::Escaped(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Fx;
    use proptest::prelude::*;

    fn fx(v: f64) -> Fx {
        Fx::from_f64(v)
    }

    #[test]
    fn test_origin_is_interior() {
        assert_eq!(classify(0.0f64, 0.0, 64), Classification::Interior);
        assert_eq!(classify(Fx::ZERO, Fx::ZERO, 64), Classification::Interior);
    }

    #[test]
    fn test_bulb_center_is_interior() {
        assert!(in_cardioid_or_bulb(-1.0f64, 0.0));
        assert!(in_cardioid_or_bulb(fx(-1.0), Fx::ZERO));
        assert!(in_cardioid_or_bulb(fx(-1.2), fx(0.05)));
    }

    #[test]
    fn test_cardioid_cusp_and_edges() {
        assert!(in_cardioid_or_bulb(0.25f64, 0.0));
        assert!(in_cardioid_or_bulb(fx(0.25), Fx::ZERO));
        assert!(in_cardioid_or_bulb(fx(-0.5), fx(0.5)));
        assert!(!in_cardioid_or_bulb(fx(0.3), Fx::ZERO));
        assert!(!in_cardioid_or_bulb(fx(-0.8), fx(0.3)));
    }

    #[test]
    fn test_far_points_are_not_interior() {
        assert!(!in_cardioid_or_bulb(fx(-7.5), fx(7.5)));
        assert!(!in_cardioid_or_bulb(fx(7.5), fx(-7.5)));
        assert!(!in_cardioid_or_bulb(fx(-2.0), Fx::ZERO));
    }

    #[test]
    fn test_escape_at_two_uses_strict_bound() {
        // z1 = 2 sits exactly on |z|² = 4 and keeps going; z2 = 6 escapes
        assert_eq!(escape_time(2.0f64, 0.0, 64), 2);
        assert_eq!(escape_time(fx(2.0), Fx::ZERO, 64), 2);
        assert_eq!(classify(2.0f64, 0.0, 64), Classification::Escaped(2));
    }

    #[test]
    fn test_minus_two_never_escapes() {
        // Orbit 0, -2, 2, 2, ... stays on the boundary circle
        assert_eq!(classify(-2.0f64, 0.0, 64), Classification::Bounded);
        assert_eq!(classify(fx(-2.0), Fx::ZERO, 64), Classification::Bounded);
    }

    #[test]
    fn test_fixed_and_float_agree_on_exact_orbit() {
        // Every orbit value up to escape is a short binary fraction
        assert_eq!(escape_time(0.5f64, 0.0, 64), 5);
        assert_eq!(escape_time(fx(0.5), Fx::ZERO, 64), 5);
    }

    #[test]
    fn test_slow_escape_outside_cusp() {
        match classify(fx(0.3), Fx::ZERO, 64) {
            Classification::Escaped(n) => assert!(n > 5 && n < 64),
            other => panic!("expected escape, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_cap_never_iterates() {
        assert_eq!(escape_time(fx(3.0), Fx::ZERO, 0), 0);
        assert_eq!(classify(fx(3.0), Fx::ZERO, 0), Classification::Bounded);
    }

    #[test]
    fn test_iterations_for_coloring() {
        assert_eq!(Classification::Escaped(7).iterations(64), 7);
        assert_eq!(Classification::Interior.iterations(64), 64);
        assert_eq!(Classification::Bounded.iterations(140), 140);
    }

    proptest! {
        #[test]
        fn prop_outside_radius_two_escapes_after_one_step(
            cr in -7.5f64..7.5,
            ci in -7.5f64..7.5,
        ) {
            prop_assume!(cr * cr + ci * ci > 4.01);
            prop_assert_eq!(classify(cr, ci, 64), Classification::Escaped(1));
            prop_assert_eq!(classify(fx(cr), fx(ci), 64), Classification::Escaped(1));
        }

        #[test]
        fn prop_interior_points_never_escape(cr in -1.25f64..0.375, ci in -0.75f64..0.75) {
            prop_assume!(in_cardioid_or_bulb(cr, ci));
            prop_assert_eq!(escape_time(cr, ci, 200), 200);
        }
    }
}
