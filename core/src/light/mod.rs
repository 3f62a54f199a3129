//! Light

use crate::geometry::*;
use crate::pbrt::*;
use crate::spectrum::*;
use std::sync::Arc;

/// Return value for `Light::illuminate()`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Li {
    /// Unit incident direction, from the shading point toward the sampled
    /// point on the light.
    pub wi: Vector3f,

    /// Distance from the shading point to the sampled point on the light.
    pub distance: Float,

    /// Radiance arriving at the shading point.
    pub value: Spectrum,
}

impl Li {
    /// Return a new `Li`.
    ///
    /// * `wi`       - Unit incident direction.
    /// * `distance` - Distance to the sampled point.
    /// * `value`    - Radiance arriving at the shading point.
    pub fn new(wi: Vector3f, distance: Float, value: Spectrum) -> Self {
        Self {
            wi,
            distance,
            value,
        }
    }
}

/// Light trait provides common behavior.
pub trait Light {
    /// Samples an incident direction toward the light as seen from `p` and
    /// returns the radiance arriving along it. Returns `None` when the light
    /// does not reach `p` for this sample; the caller must still count the
    /// sample when averaging.
    ///
    /// * `p` - The shading point.
    /// * `u` - Sample value for Monte Carlo integration.
    fn illuminate(&self, p: &Point3f, u: &Point2f) -> Option<Li>;

    /// Return the total emitted power.
    fn power(&self) -> Spectrum;
}

/// Atomic reference counted `Light`.
pub type ArcLight = Arc<dyn Light + Send + Sync>;

/// AreaLight trait provides common behavior for lights with a finite emitting
/// surface.
pub trait AreaLight: Light {
    /// Returns the surface normal of the emitter at a point on it.
    ///
    /// * `p` - Point on the light surface.
    fn normal(&self, p: &Point3f) -> Normal3f;

    /// Returns the surface area of the emitter.
    fn area(&self) -> Float;
}
