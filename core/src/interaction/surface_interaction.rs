//! Surface Interactions

use crate::geometry::*;
use crate::pbrt::*;
use crate::shader::*;
use std::fmt;

/// SurfaceInteraction represents the geometry of the nearest surface hit by a
/// ray along with the shader bound to it.
#[derive(Clone)]
pub struct SurfaceInteraction {
    /// Ray parameter of the hit.
    pub t: Float,

    /// Surface normal at the hit point.
    pub n: Normal3f,

    /// The shader of the primitive that was hit.
    pub shader: Option<ArcShader>,
}

impl SurfaceInteraction {
    /// Create a new surface interaction.
    ///
    /// * `t`      - Ray parameter of the hit.
    /// * `n`      - Surface normal at the hit point.
    /// * `shader` - The shader of the primitive that was hit.
    pub fn new(t: Float, n: Normal3f, shader: Option<ArcShader>) -> Self {
        Self { t, n, shader }
    }
}

impl fmt::Debug for SurfaceInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceInteraction")
            .field("t", &self.t)
            .field("n", &self.n)
            .field("shader", &self.shader.is_some())
            .finish()
    }
}
