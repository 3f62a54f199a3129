//! Common

use super::abs;
use num_traits::{Num, Zero};
use std::ops::Neg;

/// Dot product trait.
pub trait Dot<V> {
    type Output: Num + Zero + Neg<Output = Self::Output> + PartialOrd + Copy;

    /// Returns the dot product.
    ///
    /// * `other` - The other vector/normal.
    fn dot(&self, other: &V) -> Self::Output;

    /// Returns the absolute value of dot product.
    ///
    /// * `other` - The other vector/normal.
    fn abs_dot(&self, other: &V) -> Self::Output {
        abs(self.dot(other))
    }
}

/// FaceForward trait allows pointing vectors in the same hemisphere as
/// another normal/vector.
pub trait FaceForward<T, V>
where
    T: Num + Zero + Neg<Output = T> + PartialOrd + Copy,
    Self: Dot<V, Output = T> + Neg<Output = Self> + Sized + Copy,
{
    /// If the vector/normal is not in the same hemisphere as another,
    /// return flipped vector/normal. Otherwise, return itself.
    ///
    /// * `other` - The other vector.
    fn face_forward(&self, other: &V) -> Self {
        if self.dot(other) < T::zero() {
            -*self
        } else {
            *self
        }
    }
}
