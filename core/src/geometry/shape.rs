//! Shapes

use super::{Float, Normal3f, Ray};
use std::sync::Arc;

/// Geometric details of a ray-shape intersection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeHit {
    /// Ray parameter of the hit.
    pub t: Float,

    /// Unit surface normal at the hit point.
    pub n: Normal3f,
}

impl ShapeHit {
    /// Returns a new `ShapeHit`.
    ///
    /// * `t` - Ray parameter of the hit.
    /// * `n` - Unit surface normal at the hit point.
    pub fn new(t: Float, n: Normal3f) -> Self {
        Self { t, n }
    }
}

/// Shape common functions
pub trait Shape {
    /// Returns the shape type. Usually these are behind ArcShape and harder to
    /// debug. So this will be helpful.
    fn get_type(&self) -> &'static str;

    /// Returns geometric details of the nearest intersection with
    /// `SHADOW_EPSILON < t < r.t_max`. If there is no intersection, `None` is
    /// returned.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &Ray) -> Option<ShapeHit>;

    /// Returns `true` if a ray-shape intersection succeeds; otherwise `false`.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.intersect(r).is_some()
    }
}

/// Atomic reference counted `Shape`.
pub type ArcShape = Arc<dyn Shape + Send + Sync>;
