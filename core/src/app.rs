//! Application related stuff

use crate::pbrt::Float;
use clap::{Parser, ValueEnum};

lazy_static! {
    /// The global application options.
    pub static ref OPTIONS: Options = Options::parse();
}

/// Strategy used to pick sample points on a quadrilateral area light.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SamplingOption {
    /// Sample the parallelogram spanned by the first two edges.
    #[default]
    Parallelogram,

    /// Sample the two triangles of the quad weighted by area.
    TrianglePair,
}

/// System wide options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Number of threads to use for rendering.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 1,
        help = "Use specified number of threads for rendering."
    )]
    pub n_threads: usize,

    /// Automatically reduce a number of quality settings to render more quickly.
    #[arg(
        long = "quick",
        help = "Automatically reduce a number of quality settings to render more quickly."
    )]
    pub quick_render: bool,

    /// Suppress all text output other than error messages.
    #[arg(long, help = "Suppress all text output other than error messages.")]
    pub quiet: bool,

    /// Path to the image file.
    #[arg(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        default_value = "lumen.png",
        help = "Write the final image to the given filename."
    )]
    pub image_file: String,

    /// Image width.
    #[arg(long, value_name = "NUM", default_value_t = 320, help = "Image width in pixels.")]
    pub width: usize,

    /// Image height.
    #[arg(long, value_name = "NUM", default_value_t = 240, help = "Image height in pixels.")]
    pub height: usize,

    /// Camera samples per pixel.
    #[arg(long, value_name = "NUM", default_value_t = 4, help = "Camera rays traced per pixel.")]
    pub spp: usize,

    /// Shadow samples per light for each shading evaluation.
    #[arg(
        long = "shadow-samples",
        value_name = "NUM",
        default_value_t = 20,
        help = "Number of light samples used to estimate soft shadows."
    )]
    pub shadow_samples: usize,

    /// Base seed for the per tile samplers.
    #[arg(long, value_name = "NUM", default_value_t = 0, help = "Base random seed.")]
    pub seed: u64,

    /// Tile size.
    #[arg(
        long = "tilesize",
        short = 'p',
        value_name = "NUM",
        default_value_t = 16,
        help = "Size in pixels of square tiles rendered per thread."
    )]
    pub tile_size: usize,

    /// Radiance emitted by the demo area light at unit distance.
    #[arg(
        long = "light-intensity",
        value_name = "FLOAT",
        default_value_t = 60.0,
        help = "Intensity of the area light."
    )]
    pub light_intensity: Float,

    /// Area light sampling strategy.
    #[arg(
        long,
        value_enum,
        default_value_t = SamplingOption::Parallelogram,
        help = "How sample points are chosen on the area light."
    )]
    pub sampling: SamplingOption,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            0 => {
                warn!("Invalid nthreads");
                1
            }
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        }
    }

    /// Returns the number of shadow samples to use, reduced for quick renders.
    pub fn shadow_samples(&self) -> usize {
        let n = if self.quick_render {
            self.shadow_samples / 4
        } else {
            self.shadow_samples
        };
        n.max(1)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
