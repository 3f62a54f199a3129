//! Demo Scene

use crate::camera::*;
use pbrt_core::geometry::*;
use pbrt_core::light::*;
use pbrt_core::pbrt::*;
use pbrt_core::primitives::*;
use pbrt_core::scene::*;
use pbrt_core::shader::*;
use pbrt_core::spectrum::*;
use lights::*;
use shaders::*;
use shapes::*;
use std::sync::Arc;

/// Height of the area light above the ground.
const LIGHT_HEIGHT: Float = 3.5;

/// Side length of the square area light.
const LIGHT_SIZE: Float = 1.5;

/// Height of the ceiling above the ground.
const CEILING_HEIGHT: Float = 4.5;

/// Returns the demo scene: a ground plane, three Phong spheres and a small
/// unlit marker sphere under a square area light hanging below a ceiling.
///
/// * `intensity`      - Light intensity.
/// * `sampling`       - Light sampling strategy.
/// * `shadow_samples` - Shadow samples per light for the Phong surfaces.
pub fn demo_scene(intensity: Float, sampling: QuadSampling, shadow_samples: usize) -> Scene {
    let phong = |r: Float, g: Float, b: Float, ks: Float, ke: Float| -> ArcShader {
        Arc::new(PhongShader::new(
            Spectrum::from_rgb(r, g, b),
            0.1,
            0.7,
            ks,
            ke,
            shadow_samples,
        ))
    };

    let primitive = |shape: ArcShape, shader: ArcShader| -> ArcPrimitive {
        Arc::new(GeometricPrimitive::new(shape, shader))
    };

    let primitives = vec![
        primitive(
            Arc::new(Plane::new(Point3f::zero(), Normal3::new(0.0, 1.0, 0.0))),
            phong(0.8, 0.8, 0.8, 0.1, 8.0),
        ),
        primitive(
            Arc::new(Plane::new(
                Point3::new(0.0, CEILING_HEIGHT, 0.0),
                Normal3::new(0.0, -1.0, 0.0),
            )),
            phong(0.7, 0.7, 0.7, 0.0, 1.0),
        ),
        primitive(
            Arc::new(Sphere::new(Point3::new(-1.3, 0.6, 0.2), 0.6)),
            phong(0.9, 0.2, 0.2, 0.2, 32.0),
        ),
        primitive(
            Arc::new(Sphere::new(Point3::new(0.0, 0.8, -0.7), 0.8)),
            phong(0.2, 0.9, 0.3, 0.3, 64.0),
        ),
        primitive(
            Arc::new(Sphere::new(Point3::new(1.3, 0.5, 0.5), 0.5)),
            phong(0.2, 0.3, 0.9, 0.2, 16.0),
        ),
        primitive(
            Arc::new(Sphere::new(Point3::new(0.9, 0.25, 1.6), 0.25)),
            Arc::new(FlatShader::new(Spectrum::from_rgb(0.9, 0.8, 0.2))),
        ),
    ];

    // Wound so the normal faces down toward the scene.
    let h = 0.5 * LIGHT_SIZE;
    let light: ArcLight = Arc::new(QuadAreaLight::new(
        Spectrum::new(intensity),
        [
            Point3::new(-h, LIGHT_HEIGHT, -h),
            Point3::new(h, LIGHT_HEIGHT, -h),
            Point3::new(h, LIGHT_HEIGHT, h),
            Point3::new(-h, LIGHT_HEIGHT, h),
        ],
        sampling,
    ));
    info!("Area light emits {} in total", light.power());

    Scene::new(primitives, vec![light])
}

/// Returns the demo camera.
///
/// * `aspect` - Image width divided by height.
pub fn demo_camera(aspect: Float) -> Result<PinholeCamera, String> {
    PinholeCamera::new(
        Point3::new(0.0, 1.8, 6.0),
        Point3::new(0.0, 0.6, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        40.0,
        aspect,
    )
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
