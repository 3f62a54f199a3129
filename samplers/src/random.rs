//! Random Sampler.

use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;
use pbrt_core::rng::*;
use pbrt_core::sampler::*;

/// Implements a sampler that uses a PRNG to generate uniformly random samples.
#[derive(Clone, Debug)]
pub struct RandomSampler {
    /// Number of samples to generate for each pixel.
    pub samples_per_pixel: usize,

    /// The random number generator.
    pub rng: RNG,
}

impl RandomSampler {
    /// Create a new `RandomSampler`.
    ///
    /// * `samples_per_pixel` - Number of samples to generate for each pixel.
    /// * `seed`              - Optional seed for the random number generator.
    pub fn new(samples_per_pixel: usize, seed: Option<u64>) -> Self {
        let samples_per_pixel = if samples_per_pixel == 0 {
            warn!("samples_per_pixel must be positive; using 1");
            1
        } else {
            samples_per_pixel
        };

        Self {
            samples_per_pixel,
            rng: match seed {
                Some(s) => RNG::new(s),
                None => RNG::default(),
            },
        }
    }
}

impl Sampler for RandomSampler {
    /// Generates a new instance of an initial `Sampler` for use by a rendering thread.
    ///
    /// * `seed` - The seed for the random number generator.
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler> {
        Box::new(Self::new(self.samples_per_pixel, Some(seed)))
    }

    fn samples_per_pixel(&self) -> usize {
        self.samples_per_pixel
    }

    /// Returns the sample value for the next dimension of the current sample vector.
    fn get_1d(&mut self) -> Float {
        self.rng.uniform_float()
    }

    /// Returns the sample value for the next two dimensions of the current sample vector.
    fn get_2d(&mut self) -> Point2f {
        Point2f::new(self.rng.uniform_float(), self.rng.uniform_float())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
