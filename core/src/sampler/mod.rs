//! Sampler

use crate::geometry::*;
use crate::pbrt::*;

/// Sampler interface. A sampler supplies the uniform sample values consumed by
/// light sampling and camera ray generation. Samplers are stateful so each
/// rendering thread owns its own instance.
pub trait Sampler: Send {
    /// Generates a new instance of an initial `Sampler` for use by a rendering
    /// thread or image tile.
    ///
    /// * `seed` - The seed for the random number generator.
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler>;

    /// Returns the number of camera samples generated for each pixel.
    fn samples_per_pixel(&self) -> usize;

    /// Returns the sample value for the next dimension of the current sample
    /// vector. Values are in [0, 1).
    fn get_1d(&mut self) -> Float;

    /// Returns the sample value for the next two dimensions of the current
    /// sample vector. Values are in [0, 1)^2.
    fn get_2d(&mut self) -> Point2f;
}
