//! Loaded model descriptions.

use crate::abs::VertexArrayId;

/// How a model's vertices are consumed by a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Vertices are reused through an element buffer.
    Indexed,
    /// Vertices are consumed in array order.
    Sequential,
}

/// A model living in GPU memory.
///
/// The handle does not own the buffers it names; they belong to the
/// [`ModelStore`](crate::loader::ModelStore) that produced it and stop being valid once the
/// store releases them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelHandle {
    vertex_array: VertexArrayId,
    count: usize,
    mode: DrawMode,
}

impl ModelHandle {
    /// Creates a handle. Only the store mints these, after checking the count.
    pub(crate) fn new(vertex_array: VertexArrayId, count: usize, mode: DrawMode) -> Self {
        Self {
            vertex_array,
            count,
            mode,
        }
    }

    /// Returns the vertex array holding the model's buffers.
    pub fn vertex_array(&self) -> VertexArrayId {
        self.vertex_array
    }

    /// Number of indices for an indexed model, number of vertices otherwise.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns how the model is drawn.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Returns `true` if the model was loaded with indices.
    pub fn is_indexed(&self) -> bool {
        self.mode == DrawMode::Indexed
    }
}
