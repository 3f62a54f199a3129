//! Primitives

use crate::geometry::*;
use crate::interaction::*;
use std::sync::Arc;

mod geometric_primitive;

// Re-export
pub use geometric_primitive::*;

/// Primitive is the bridge between the geometry and shading subsystems.
pub trait Primitive {
    /// Returns the surface interaction if a ray intersects the primitive and
    /// narrows `r.t_max` to the hit. If there is no intersection, `None` is
    /// returned and the ray is unchanged.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &mut Ray) -> Option<SurfaceInteraction>;

    /// Returns `true` if a ray intersects the primitive; otherwise `false`.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool;
}

/// Atomic reference counted `Primitive`.
pub type ArcPrimitive = Arc<dyn Primitive + Send + Sync>;
