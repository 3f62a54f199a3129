//! Lights

#[macro_use]
extern crate log;

mod area;

// Re-export.
pub use area::*;
