//! Shader

use crate::geometry::*;
use crate::interaction::*;
use crate::sampler::*;
use crate::scene::*;
use crate::spectrum::*;
use std::sync::Arc;

/// Shader trait provides common behavior for surface shading models.
pub trait Shader {
    /// Returns the color seen along `ray` at the intersection `isect`.
    ///
    /// `ray.t_max` must have been narrowed to the intersection by the scene
    /// query so that `ray.end()` is the shading point.
    ///
    /// * `ray`     - The ray that hit the surface.
    /// * `isect`   - The surface interaction.
    /// * `scene`   - The scene, used for lights and occlusion queries.
    /// * `sampler` - Source of sample values for light sampling.
    fn shade(
        &self,
        ray: &Ray,
        isect: &SurfaceInteraction,
        scene: &Scene,
        sampler: &mut dyn Sampler,
    ) -> Spectrum;
}

/// Atomic reference counted `Shader`.
pub type ArcShader = Arc<dyn Shader + Send + Sync>;
