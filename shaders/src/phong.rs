//! Phong Shader

use pbrt_core::geometry::*;
use pbrt_core::interaction::*;
use pbrt_core::light::*;
use pbrt_core::pbrt::*;
use pbrt_core::sampler::*;
use pbrt_core::scene::*;
use pbrt_core::shader::*;
use pbrt_core::spectrum::*;

/// Number of light samples per light used to estimate soft shadows when none
/// is specified.
pub const DEFAULT_SHADOW_SAMPLES: usize = 20;

/// Implements the Phong local illumination model: an ambient term, a diffuse
/// term tinted by the surface color and a white specular highlight. Shadows
/// are soft: each light is sampled `shadow_samples` times and each sample is
/// tested for occlusion separately.
#[derive(Clone, Debug)]
pub struct PhongShader {
    /// Surface color.
    pub color: Spectrum,

    /// Ambient coefficient.
    pub ka: Float,

    /// Diffuse reflection coefficient.
    pub kd: Float,

    /// Specular reflection coefficient.
    pub ks: Float,

    /// Shininess exponent.
    pub ke: Float,

    /// Light samples per light for each term.
    pub shadow_samples: usize,
}

impl PhongShader {
    /// Create a new `PhongShader`.
    ///
    /// * `color`          - Surface color.
    /// * `ka`             - Ambient coefficient.
    /// * `kd`             - Diffuse reflection coefficient.
    /// * `ks`             - Specular reflection coefficient.
    /// * `ke`             - Shininess exponent.
    /// * `shadow_samples` - Light samples per light; 0 is treated as 1.
    pub fn new(
        color: Spectrum,
        ka: Float,
        kd: Float,
        ks: Float,
        ke: Float,
        shadow_samples: usize,
    ) -> Self {
        let shadow_samples = if shadow_samples == 0 {
            warn!("shadow_samples must be positive; using 1");
            1
        } else {
            shadow_samples
        };

        Self {
            color,
            ka,
            kd,
            ks,
            ke,
            shadow_samples,
        }
    }

    /// Sums `f(li)` over `shadow_samples` unoccluded samples of every light
    /// and returns the average per sample. A sample is blocked only by
    /// geometry between `p` and the sampled light point. Samples for which the
    /// light returns `None` or that are blocked add nothing but still count.
    ///
    /// * `p`       - Shading point.
    /// * `n`       - Surface normal at `p`.
    /// * `scene`   - The scene.
    /// * `sampler` - Source of light samples.
    /// * `f`       - Contribution of one unoccluded sample.
    fn estimate<F>(
        &self,
        p: &Point3f,
        n: &Normal3f,
        scene: &Scene,
        sampler: &mut dyn Sampler,
        f: F,
    ) -> Spectrum
    where
        F: Fn(&Li) -> Spectrum,
    {
        let mut sum = Spectrum::ZERO;
        for light in scene.lights.iter() {
            for _ in 0..self.shadow_samples {
                let u = sampler.get_2d();
                if let Some(li) = light.illuminate(p, &u) {
                    let target = *p + li.wi * li.distance;
                    if !scene.intersect_p(&Ray::spawn_to(p, n, &target)) {
                        sum += f(&li);
                    }
                }
            }
        }
        sum / self.shadow_samples as Float
    }
}

impl Shader for PhongShader {
    fn shade(
        &self,
        ray: &Ray,
        isect: &SurfaceInteraction,
        scene: &Scene,
        sampler: &mut dyn Sampler,
    ) -> Spectrum {
        let p = ray.end();
        let n = isect.n;

        let ambient = self.ka * self.color;

        let diffuse = self.estimate(&p, &n, scene, sampler, |li| {
            li.value * max(0.0, li.wi.dot(&n))
        });
        let diffuse = self.kd * (diffuse * self.color);

        // A degenerate view ray has no highlight.
        let specular = match ray.d.try_normalize() {
            Some(v) => {
                let n = Vector3f::from(n);
                let ke = self.ke;
                self.estimate(&p, &isect.n, scene, sampler, |li| {
                    let cos_i = li.wi.dot(&n);
                    if cos_i <= 0.0 {
                        return Spectrum::ZERO;
                    }
                    let r = li.wi - n * (2.0 * cos_i);
                    li.value * max(0.0, v.dot(&r)).powf(ke)
                })
            }
            None => Spectrum::ZERO,
        };
        let specular = self.ks * (Spectrum::ONE * specular);

        diffuse + specular + ambient
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
