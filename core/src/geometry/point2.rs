//! 2-D Points

use super::Float;
use num_traits::{Num, Zero};
use std::ops::{Index, IndexMut};

/// A 2-D point containing numeric values. Used for sample values fed to
/// lights and for image plane positions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D point containing `Float` values.
pub type Point2f = Point2<Float>;

impl<T: Num> Point2<T> {
    /// Creates a new 2-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new 2-D zero point.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero())
    }
}

impl<T> Index<usize> for Point2<T> {
    type Output = T;

    /// Index the point by an axis to get the immutable coordinate value.
    ///
    /// * `axis` - 0 or 1.
    fn index(&self, axis: usize) -> &Self::Output {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("invalid axis value {axis}"),
        }
    }
}

impl<T> IndexMut<usize> for Point2<T> {
    /// Index the point by an axis to get a mutable coordinate value.
    ///
    /// * `axis` - 0 or 1.
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("invalid axis value {axis}"),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index() {
        let mut p = Point2::new(1.0, 2.0);
        assert_eq!(p[0], 1.0);
        assert_eq!(p[1], 2.0);
        p[0] = 3.0;
        assert_eq!(p, Point2::new(3.0, 2.0));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let p = Point2::new(1, 2);
        let _ = p[2];
    }
}
