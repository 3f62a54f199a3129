//! RGB Spectrum.

use crate::pbrt::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign};

/// Number of spectral samples to use for `RGBSpectrum`.
pub const RGB_SAMPLES: usize = 3;

/// RGBSpectrum represents radiance, reflectance or a color as a weighted sum
/// of red, green and blue components.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBSpectrum {
    /// The sampled spectral values.
    c: [Float; RGB_SAMPLES],
}

impl RGBSpectrum {
    /// Black.
    pub const ZERO: Self = Self {
        c: [0.0; RGB_SAMPLES],
    };

    /// White.
    pub const ONE: Self = Self {
        c: [1.0; RGB_SAMPLES],
    };

    /// Create a new `RGBSpectrum` with a constant value across all
    /// wavelengths.
    ///
    /// * `v` - Constant value.
    pub fn new(v: Float) -> Self {
        let ret = Self {
            c: [v; RGB_SAMPLES],
        };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Create a new `RGBSpectrum` from red, green and blue components.
    ///
    /// * `r` - Red.
    /// * `g` - Green.
    /// * `b` - Blue.
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        let ret = Self { c: [r, g, b] };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Returns the RGB components.
    pub fn to_rgb(&self) -> [Float; 3] {
        self.c
    }

    /// Returns true if any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Returns true if the values are zero everywhere.
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|v| *v == 0.0)
    }

    /// Returns the maximum component value.
    pub fn max_component_value(&self) -> Float {
        self.c[1..].iter().fold(self.c[0], |m, v| max(m, *v))
    }

    /// Clamps the components to `[low, high]`.
    ///
    /// * `low`  - Lower bound.
    /// * `high` - Upper bound.
    pub fn clamp(&self, low: Float, high: Float) -> Self {
        Self {
            c: [
                clamp(self.c[0], low, high),
                clamp(self.c[1], low, high),
                clamp(self.c[2], low, high),
            ],
        }
    }
}

impl Default for RGBSpectrum {
    /// Return a black `RGBSpectrum`.
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        let mut ret = self;
        ret += other;
        ret
    }
}

impl AddAssign for RGBSpectrum {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.c.iter_mut().zip(other.c.iter()) {
            *a += b;
        }
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    /// Component-wise product, e.g. radiance times reflectance.
    ///
    /// * `other` - The other `RGBSpectrum`.
    fn mul(self, other: Self) -> Self::Output {
        let mut ret = self;
        ret *= other;
        ret
    }
}

impl MulAssign for RGBSpectrum {
    fn mul_assign(&mut self, other: Self) {
        for (a, b) in self.c.iter_mut().zip(other.c.iter()) {
            *a *= b;
        }
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    /// Scales the components.
    ///
    /// * `f` - Scale factor.
    fn mul(self, f: Float) -> Self::Output {
        let mut ret = self;
        ret *= f;
        ret
    }
}

impl MulAssign<Float> for RGBSpectrum {
    fn mul_assign(&mut self, f: Float) {
        for a in self.c.iter_mut() {
            *a *= f;
        }
    }
}

impl Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    fn mul(self, s: RGBSpectrum) -> Self::Output {
        s * self
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    /// Divides the components by a scalar.
    ///
    /// * `f` - Divisor.
    fn div(self, f: Float) -> Self::Output {
        let mut ret = self;
        ret /= f;
        ret
    }
}

impl DivAssign<Float> for RGBSpectrum {
    fn div_assign(&mut self, f: Float) {
        debug_assert!(f != 0.0);
        for a in self.c.iter_mut() {
            *a /= f;
        }
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, i: usize) -> &Self::Output {
        &self.c[i]
    }
}

impl IndexMut<usize> for RGBSpectrum {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.c[i]
    }
}

impl fmt::Display for RGBSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB[{}, {}, {}]", self.c[0], self.c[1], self.c[2])
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn black() {
        assert!(RGBSpectrum::ZERO.is_black());
        assert!(RGBSpectrum::default().is_black());
        assert!(!RGBSpectrum::from_rgb(0.0, 0.1, 0.0).is_black());
    }

    #[test]
    fn max_component_value() {
        assert_eq!(RGBSpectrum::from_rgb(0.2, 0.9, 0.4).max_component_value(), 0.9);
    }

    #[test]
    fn clamp_unit() {
        let s = RGBSpectrum::from_rgb(-1.0, 0.5, 3.0).clamp(0.0, 1.0);
        assert_eq!(s.to_rgb(), [0.0, 0.5, 1.0]);
    }

    prop_compose! {
        fn rgb_f32()(r in 0.0..10.0f32, g in 0.0..10.0f32, b in 0.0..10.0f32) -> RGBSpectrum {
            RGBSpectrum::from_rgb(r, g, b)
        }
    }

    proptest! {
        #[test]
        fn add_f32(s1 in rgb_f32(), s2 in rgb_f32()) {
            let sum = s1 + s2;
            for i in 0..RGB_SAMPLES {
                prop_assert_eq!(sum[i], s1[i] + s2[i]);
            }
        }

        #[test]
        fn mul_f32(s1 in rgb_f32(), s2 in rgb_f32()) {
            let prod = s1 * s2;
            for i in 0..RGB_SAMPLES {
                prop_assert_eq!(prod[i], s1[i] * s2[i]);
            }
        }

        #[test]
        fn scale_commutes_f32(s in rgb_f32(), f in -10.0..10.0f32) {
            prop_assert_eq!(s * f, f * s);
        }

        #[test]
        fn div_f32(s in rgb_f32(), f in 1.0..10.0f32) {
            let q = s / f;
            for i in 0..RGB_SAMPLES {
                prop_assert_eq!(q[i], s[i] / f);
            }
        }
    }
}
