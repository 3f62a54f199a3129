//! Pinhole Camera

use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;

/// A pinhole camera. Rays leave the eye through a virtual image plane one
/// unit in front of it.
#[derive(Clone, Debug)]
pub struct PinholeCamera {
    /// Eye position.
    pub eye: Point3f,

    /// Upper left corner of the image plane.
    pub upper_left: Point3f,

    /// Image plane extent from left to right.
    pub horizontal: Vector3f,

    /// Image plane extent from top to bottom.
    pub vertical: Vector3f,
}

impl PinholeCamera {
    /// Returns a new `PinholeCamera`.
    ///
    /// * `eye`     - Eye position.
    /// * `look_at` - Point the camera looks at.
    /// * `up`      - Up direction.
    /// * `fov`     - Vertical field of view in degrees.
    /// * `aspect`  - Image width divided by height.
    pub fn new(
        eye: Point3f,
        look_at: Point3f,
        up: Vector3f,
        fov: Float,
        aspect: Float,
    ) -> Result<Self, String> {
        if !(fov > 0.0 && fov < 180.0) {
            return Err(format!("Invalid field of view {fov}"));
        }
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(format!("Invalid aspect ratio {aspect}"));
        }

        let w = (eye - look_at)
            .try_normalize()
            .ok_or_else(|| format!("Camera eye {eye} and look at {look_at} coincide"))?;
        let u = up
            .cross(&w)
            .try_normalize()
            .ok_or_else(|| format!("Camera up {up} is parallel to the view direction"))?;
        let v = w.cross(&u);

        let half_height = (0.5 * fov).to_radians().tan();
        let half_width = aspect * half_height;

        let horizontal = u * (2.0 * half_width);
        let vertical = -v * (2.0 * half_height);
        let upper_left = eye - w - horizontal * 0.5 - vertical * 0.5;

        debug!("Camera at {eye} looking at {look_at}, fov {fov}");

        Ok(Self {
            eye,
            upper_left,
            horizontal,
            vertical,
        })
    }

    /// Returns a ray with unit direction through the image plane position
    /// `(s, t)`, where `(0, 0)` is the upper left and `(1, 1)` the lower
    /// right corner.
    ///
    /// * `s` - Horizontal image plane position.
    /// * `t` - Vertical image plane position.
    pub fn generate_ray(&self, s: Float, t: Float) -> Ray {
        let target = self.upper_left + self.horizontal * s + self.vertical * t;
        Ray::new(self.eye, (target - self.eye).normalize(), INFINITY)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
