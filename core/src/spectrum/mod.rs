//! Spectrum

mod rgb_spectrum;

// Re-export
pub use rgb_spectrum::*;

/// Rendering is done in RGB.
pub type Spectrum = RGBSpectrum;
