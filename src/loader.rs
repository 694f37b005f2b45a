//! Model loading.
//!
//! This module defines the [`ModelStore`], which uploads position data (and optionally index
//! data) into vertex-array and buffer objects and hands back a [`ModelHandle`]. Every object it
//! allocates is kept in a [`ResourceRegistry`] so it can all be released at once.

use std::sync::Arc;

use glam::Vec3;

use crate::abs::{BufferId, BufferTarget, GraphicsApi, VertexArrayId};
use crate::error::{ResourceError, ResourceKind, Result, ValidationError};
use crate::model::{DrawMode, ModelHandle};

/// Attribute slot the position data is bound to.
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Every GPU object allocated by a store, in allocation order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResourceRegistry {
    vertex_arrays: Vec<VertexArrayId>,
    buffers: Vec<BufferId>,
}

impl ResourceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registered vertex arrays.
    pub fn vertex_arrays(&self) -> &[VertexArrayId] {
        &self.vertex_arrays
    }

    /// Returns the registered vertex and element buffers.
    pub fn buffers(&self) -> &[BufferId] {
        &self.buffers
    }

    /// Returns the number of registered objects of either kind.
    pub fn len(&self) -> usize {
        self.vertex_arrays.len() + self.buffers.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.vertex_arrays.is_empty() && self.buffers.is_empty()
    }

    fn track_vertex_array(&mut self, id: VertexArrayId) {
        self.vertex_arrays.push(id);
    }

    fn track_buffer(&mut self, id: BufferId) {
        self.buffers.push(id);
    }

    /// Deletes everything registered and empties the registry. Returns how many objects were
    /// deleted.
    pub fn release<G: GraphicsApi + ?Sized>(&mut self, gl: &G) -> usize {
        let released = self.len();
        for vao in self.vertex_arrays.drain(..) {
            gl.delete_vertex_array(vao);
        }
        for buffer in self.buffers.drain(..) {
            gl.delete_buffer(buffer);
        }
        released
    }
}

/// Uploads models to the GPU and owns the resulting objects.
pub struct ModelStore<G: GraphicsApi> {
    gl: Arc<G>,
    registry: ResourceRegistry,
}

impl<G: GraphicsApi> ModelStore<G> {
    /// Creates an empty store on the given context.
    pub fn new(gl: &Arc<G>) -> Self {
        Self {
            gl: Arc::clone(gl),
            registry: ResourceRegistry::new(),
        }
    }

    /// Returns every object this store currently owns.
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Loads a model from flat `x, y, z` position triples.
    ///
    /// With `indices` the model is drawn as indexed triangles and its count is the number of
    /// indices. Without, it is drawn sequentially and its count is the number of vertices.
    pub fn load(&mut self, positions: &[f32], indices: Option<&[u32]>) -> Result<ModelHandle> {
        let (count, mode) = validate(positions, indices)?;

        let vao = self.create_vao()?;
        let uploaded = self.fill_vao(positions, indices);
        self.gl.bind_vertex_array(None);
        uploaded?;

        log::debug!(
            "Loaded {:?} model into vertex array {} ({} elements, {} floats)",
            mode,
            vao.0,
            count,
            positions.len()
        );

        Ok(ModelHandle::new(vao, count, mode))
    }

    /// Same as [`ModelStore::load`], taking positions as vectors.
    pub fn load_vertices(&mut self, positions: &[Vec3], indices: Option<&[u32]>) -> Result<ModelHandle> {
        let flat: Vec<f32> = positions.iter().flat_map(|p| p.to_array()).collect();
        self.load(&flat, indices)
    }

    /// Deletes every vertex array and buffer this store has created. Calling it again without
    /// loading anything in between does nothing.
    pub fn release_all(&mut self) {
        if self.registry.is_empty() {
            return;
        }
        let released = self.registry.release(self.gl.as_ref());
        log::debug!("Released {} GPU objects", released);
    }

    fn create_vao(&mut self) -> Result<VertexArrayId> {
        let vao = self.gl.create_vertex_array().map_err(|message| ResourceError {
            kind: ResourceKind::VertexArray,
            message,
        })?;
        self.registry.track_vertex_array(vao);
        self.gl.bind_vertex_array(Some(vao));
        Ok(vao)
    }

    fn create_buffer(&mut self) -> Result<BufferId> {
        let buffer = self.gl.create_buffer().map_err(|message| ResourceError {
            kind: ResourceKind::Buffer,
            message,
        })?;
        self.registry.track_buffer(buffer);
        Ok(buffer)
    }

    fn fill_vao(&mut self, positions: &[f32], indices: Option<&[u32]>) -> Result<()> {
        if let Some(indices) = indices {
            self.bind_indices_buffer(indices)?;
        }
        self.store_in_attribute(POSITION_ATTRIBUTE, 3, positions)
    }

    // The element buffer stays bound; it is part of the vertex array's state.
    fn bind_indices_buffer(&mut self, indices: &[u32]) -> Result<()> {
        let ebo = self.create_buffer()?;
        self.gl.bind_buffer(BufferTarget::ElementArray, Some(ebo));
        self.gl
            .buffer_data(BufferTarget::ElementArray, bytemuck::cast_slice(indices));
        Ok(())
    }

    fn store_in_attribute(&mut self, attribute: u32, size: i32, data: &[f32]) -> Result<()> {
        let vbo = self.create_buffer()?;
        self.gl.bind_buffer(BufferTarget::Array, Some(vbo));
        self.gl.buffer_data(BufferTarget::Array, bytemuck::cast_slice(data));
        self.gl.vertex_attrib_pointer_f32(attribute, size, false, 0, 0);
        self.gl.bind_buffer(BufferTarget::Array, None);
        Ok(())
    }
}

impl<G: GraphicsApi> Drop for ModelStore<G> {
    fn drop(&mut self) {
        if !self.registry.is_empty() {
            log::warn!(
                "Model store dropped with {} live GPU objects, releasing them",
                self.registry.len()
            );
            self.release_all();
        }
    }
}

fn validate(positions: &[f32], indices: Option<&[u32]>) -> std::result::Result<(usize, DrawMode), ValidationError> {
    if positions.len() % 3 != 0 {
        return Err(ValidationError::PositionsNotTriples { len: positions.len() });
    }
    let vertex_count = positions.len() / 3;

    let (count, mode) = match indices {
        Some(indices) => {
            if let Some((position, &index)) = indices
                .iter()
                .enumerate()
                .find(|&(_, &index)| index as usize >= vertex_count)
            {
                return Err(ValidationError::IndexOutOfRange {
                    position,
                    index,
                    vertex_count,
                });
            }
            (indices.len(), DrawMode::Indexed)
        }
        None => (vertex_count, DrawMode::Sequential),
    };

    draw_count(count)?;
    Ok((count, mode))
}

/// Converts an element count to the signed count a draw call takes.
pub(crate) fn draw_count(count: usize) -> std::result::Result<i32, ValidationError> {
    i32::try_from(count).map_err(|_| ValidationError::CountOverflow { count })
}
