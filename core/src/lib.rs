//! Core

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

// Re-export.
pub mod app;
pub mod geometry;
pub mod interaction;
pub mod light;
pub mod pbrt;
pub mod primitives;
pub mod rng;
pub mod sampler;
pub mod sampling;
pub mod scene;
pub mod shader;
pub mod spectrum;
