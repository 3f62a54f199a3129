//! Geometric Primitives

use crate::geometry::*;
use crate::interaction::*;
use crate::primitives::*;
use crate::shader::*;
use std::sync::Arc;

/// GeometricPrimitive represents a single shape in a scene.
#[derive(Clone)]
pub struct GeometricPrimitive {
    /// The shape.
    pub shape: ArcShape,

    /// The shader.
    pub shader: ArcShader,
}

impl GeometricPrimitive {
    /// Create a new geometric primitive.
    ///
    /// * `shape`  - The shape.
    /// * `shader` - The shader.
    pub fn new(shape: ArcShape, shader: ArcShader) -> Self {
        Self {
            shape: Arc::clone(&shape),
            shader: Arc::clone(&shader),
        }
    }
}

impl Primitive for GeometricPrimitive {
    fn intersect(&self, r: &mut Ray) -> Option<SurfaceInteraction> {
        let hit = self.shape.intersect(r)?;
        r.t_max = hit.t;
        Some(SurfaceInteraction::new(
            hit.t,
            hit.n,
            Some(Arc::clone(&self.shader)),
        ))
    }

    fn intersect_p(&self, r: &Ray) -> bool {
        self.shape.intersect_p(r)
    }
}
