//! Sampling

use crate::geometry::*;

/// Uniformly sample a triangle and return the barycentric coordinates `(b0,
/// b1)` of the sample point; `b2 = 1 - b0 - b1`.
///
/// * `u` - The random sample point.
#[inline]
pub fn uniform_sample_triangle(u: &Point2f) -> Point2f {
    let su0 = u[0].sqrt();
    Point2f::new(1.0 - su0, u[1] * su0)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
