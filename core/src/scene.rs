//! Scene

use crate::geometry::*;
use crate::interaction::*;
use crate::light::*;
use crate::primitives::*;

/// Scene.
///
/// Primitives are tested by brute force; the scene is read-only once built
/// and is shared by all rendering threads.
#[derive(Clone, Default)]
pub struct Scene {
    /// All primitives in the scene.
    pub primitives: Vec<ArcPrimitive>,

    /// All light sources in the scene.
    pub lights: Vec<ArcLight>,
}

impl Scene {
    /// Creates a new `Scene`.
    ///
    /// * `primitives` - All primitives in the scene.
    /// * `lights`     - All light sources in the scene.
    pub fn new(primitives: Vec<ArcPrimitive>, lights: Vec<ArcLight>) -> Self {
        info!(
            "Scene has {} primitives and {} lights",
            primitives.len(),
            lights.len()
        );
        Self { primitives, lights }
    }

    /// Traces the ray into the scene and returns the `SurfaceInteraction` of
    /// the nearest hit if an intersection occurred. `ray.t_max` is narrowed
    /// to the hit.
    ///
    /// * `ray` - The ray to trace.
    pub fn intersect(&self, ray: &mut Ray) -> Option<SurfaceInteraction> {
        // Each hit shortens `t_max` so later primitives only report closer hits.
        self.primitives
            .iter()
            .fold(None, |nearest, primitive| primitive.intersect(ray).or(nearest))
    }

    /// Traces the ray into the scene and returns whether or not an intersection
    /// occurred.
    ///
    /// * `ray` - The ray to trace.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        self.primitives.iter().any(|primitive| primitive.intersect_p(ray))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
