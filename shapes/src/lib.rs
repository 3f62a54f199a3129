//! Shapes

#[macro_use]
extern crate log;

mod plane;
mod sphere;

// Re-export
pub use plane::*;
pub use sphere::*;
