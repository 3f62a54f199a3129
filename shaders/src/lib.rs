//! Shaders

#[macro_use]
extern crate log;

mod flat;
mod phong;

// Re-export
pub use flat::*;
pub use phong::*;
