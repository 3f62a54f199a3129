//! Flat Shader

use pbrt_core::geometry::*;
use pbrt_core::interaction::*;
use pbrt_core::sampler::*;
use pbrt_core::scene::*;
use pbrt_core::shader::*;
use pbrt_core::spectrum::*;

/// Implements an unlit surface that always shows its own color. Used for
/// emitters and for debugging geometry.
#[derive(Clone, Debug)]
pub struct FlatShader {
    /// Surface color.
    pub color: Spectrum,
}

impl FlatShader {
    /// Create a new `FlatShader`.
    ///
    /// * `color` - Surface color.
    pub fn new(color: Spectrum) -> Self {
        Self { color }
    }
}

impl Shader for FlatShader {
    fn shade(
        &self,
        _ray: &Ray,
        _isect: &SurfaceInteraction,
        _scene: &Scene,
        _sampler: &mut dyn Sampler,
    ) -> Spectrum {
        self.color
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use samplers::RandomSampler;

    #[test]
    fn returns_color() {
        let color = Spectrum::from_rgb(0.2, 0.4, 0.8);
        let shader = FlatShader::new(color);
        let ray = Ray::new(Point3f::zero(), Vector3::new(0.0, 0.0, 1.0), 1.0);
        let isect = SurfaceInteraction::new(1.0, Normal3::new(0.0, 0.0, -1.0), None);
        let mut sampler = RandomSampler::new(1, None);
        assert_eq!(
            shader.shade(&ray, &isect, &Scene::default(), &mut sampler),
            color
        );
    }
}
