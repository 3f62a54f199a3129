//! Rays

use super::{FaceForward, Float, Normal3f, Point3f, Vector3f};
use crate::pbrt::SHADOW_EPSILON;
use std::fmt;

/// A semi-infinite line `o + t * d` for `t` in `(0, t_max)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction.
    pub d: Vector3f,

    /// Maximum extent of the ray. Scene queries narrow this to the nearest
    /// intersection found so far.
    pub t_max: Float,
}

impl Ray {
    /// Returns a new ray.
    ///
    /// * `o`     - Origin.
    /// * `d`     - Direction.
    /// * `t_max` - Maximum extent of the ray.
    pub fn new(o: Point3f, d: Vector3f, t_max: Float) -> Self {
        Self { o, d, t_max }
    }

    /// Returns a ray leaving a surface point `p` with normal `n` toward the
    /// point `target`. The origin is pushed off the surface by
    /// `SHADOW_EPSILON` on the side `target` lies on, so the ray does not
    /// immediately re-hit the surface. The direction is unit length and
    /// `t_max` stops just short of `target`, so only geometry strictly
    /// between the two points is reported by scene queries.
    ///
    /// * `p`      - Surface point.
    /// * `n`      - Surface normal at `p`.
    /// * `target` - Point the ray travels to.
    pub fn spawn_to(p: &Point3f, n: &Normal3f, target: &Point3f) -> Self {
        let offset = Vector3f::from(n.face_forward(&(*target - *p))) * SHADOW_EPSILON;
        let o = *p + offset;
        let w = *target - o;
        match w.try_normalize() {
            Some(d) => Self::new(o, d, w.length() * (1.0 - SHADOW_EPSILON)),
            None => Self::new(o, w, 0.0),
        }
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans() || self.t_max.is_nan()
    }

    /// Get position along the ray at given parameter.
    ///
    /// * `t` - Parameter to evaluate.
    pub fn at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }

    /// Returns the point at `t_max`; after a successful scene query this is
    /// the intersection point.
    pub fn end(&self) -> Point3f {
        self.at(self.t_max)
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[o={}, d={}, t_max={}]", self.o, self.d, self.t_max)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
