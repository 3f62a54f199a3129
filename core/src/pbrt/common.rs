//! Common

use num_traits::Num;
use std::ops::Neg;

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// Infinty (∞)
pub const INFINITY: Float = Float::INFINITY;

/// PI (π)
pub const PI: Float = std::f32::consts::PI;

/// Offset used to keep shadow rays from hitting the surface they leave.
pub const SHADOW_EPSILON: Float = 0.0001;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps a value to the closed interval `[low, high]`.
///
/// * `val`  - The value.
/// * `low`  - Lower bound.
/// * `high` - Upper bound.
#[inline(always)]
pub fn clamp<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Solves `a t^2 + b t + c = 0` and returns the real roots in ascending order.
/// Uses double precision internally to limit cancellation.
///
/// * `a` - Quadratic coefficient.
/// * `b` - Linear coefficient.
/// * `c` - Constant coefficient.
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let (a, b, c) = (a as f64, b as f64, c as f64);
    if a == 0.0 {
        return None;
    }

    let discrim = b * b - 4.0 * a * c;
    if discrim < 0.0 {
        return None;
    }
    let root_discrim = discrim.sqrt();

    let q = if b < 0.0 {
        -0.5 * (b - root_discrim)
    } else {
        -0.5 * (b + root_discrim)
    };
    if q == 0.0 {
        // b == 0 and c == 0.
        return Some((0.0, 0.0));
    }

    let t0 = (q / a) as Float;
    let t1 = (c / q) as Float;
    if t0 > t1 {
        Some((t1, t0))
    } else {
        Some((t0, t1))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn quadratic_roots() {
        assert_eq!(quadratic(1.0, -3.0, 2.0), Some((1.0, 2.0)));
        assert_eq!(quadratic(1.0, 0.0, 1.0), None);
        assert_eq!(quadratic(0.0, 1.0, 1.0), None);
        assert_eq!(quadratic(1.0, 0.0, 0.0), Some((0.0, 0.0)));
    }

    proptest! {
        #[test]
        fn clamp_f32(v in -100.0..100.0f32, lo in -10.0..0.0f32, hi in 0.0..10.0f32) {
            let c = clamp(v, lo, hi);
            prop_assert!(c >= lo && c <= hi);
            prop_assert_eq!(c, v.max(lo).min(hi));
        }

        #[test]
        fn min_max_i32(a in -100..100i32, b in -100..100i32) {
            prop_assert_eq!(min(a, b), a.min(b));
            prop_assert_eq!(max(a, b), a.max(b));
        }
    }
}
