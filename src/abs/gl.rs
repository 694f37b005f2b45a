//! The OpenGL entry points used by the engine.
//!
//! This module defines the [`GraphicsApi`] trait, a narrow view of the GL calls the model store
//! and the renderer issue, and implements it for [`glow::Context`]. Object names are carried as
//! [`VertexArrayId`] and [`BufferId`] so handles stay plain values.

use std::num::NonZeroU32;

use glow::HasContext;

/// Name of a vertex-array object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexArrayId(pub NonZeroU32);

/// Name of a buffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub NonZeroU32);

/// Binding point of a buffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    /// Per-vertex attribute data.
    Array,
    /// Index data of an indexed draw.
    ElementArray,
}

impl BufferTarget {
    /// Returns the GL binding point enum.
    pub fn gl_enum(self) -> u32 {
        match self {
            BufferTarget::Array => glow::ARRAY_BUFFER,
            BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// The subset of OpenGL needed to upload and draw raw models.
///
/// All calls must happen on the thread that owns the context. Allocation calls report driver
/// failure as a `String`, the same way `glow` does.
pub trait GraphicsApi {
    /// Creates a vertex-array object.
    fn create_vertex_array(&self) -> Result<VertexArrayId, String>;
    /// Binds a vertex array, or unbinds with `None`.
    fn bind_vertex_array(&self, vertex_array: Option<VertexArrayId>);
    /// Deletes a vertex array.
    fn delete_vertex_array(&self, vertex_array: VertexArrayId);

    /// Creates a buffer object.
    fn create_buffer(&self) -> Result<BufferId, String>;
    /// Binds a buffer at `target`, or unbinds with `None`.
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<BufferId>);
    /// Uploads `data` into the buffer bound at `target` with static-draw usage.
    fn buffer_data(&self, target: BufferTarget, data: &[u8]);
    /// Deletes a buffer.
    fn delete_buffer(&self, buffer: BufferId);

    /// Points attribute `index` at the bound array buffer as `size` floats per vertex.
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, normalized: bool, stride: i32, offset: i32);
    /// Enables attribute slot `index` for drawing.
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Disables attribute slot `index`.
    fn disable_vertex_attrib_array(&self, index: u32);

    /// Sets the color used by [`GraphicsApi::clear`].
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    /// Clears the buffers selected by `mask`.
    fn clear(&self, mask: u32);

    /// Draws `count` elements from the bound element buffer.
    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);
    /// Draws `count` vertices in array order starting at `first`.
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
}

impl GraphicsApi for glow::Context {
    fn create_vertex_array(&self) -> Result<VertexArrayId, String> {
        unsafe { HasContext::create_vertex_array(self).map(|vao| VertexArrayId(vao.0)) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<VertexArrayId>) {
        unsafe {
            HasContext::bind_vertex_array(self, vertex_array.map(|id| glow::NativeVertexArray(id.0)));
        }
    }

    fn delete_vertex_array(&self, vertex_array: VertexArrayId) {
        unsafe {
            HasContext::delete_vertex_array(self, glow::NativeVertexArray(vertex_array.0));
        }
    }

    fn create_buffer(&self) -> Result<BufferId, String> {
        unsafe { HasContext::create_buffer(self).map(|buffer| BufferId(buffer.0)) }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<BufferId>) {
        unsafe {
            HasContext::bind_buffer(self, target.gl_enum(), buffer.map(|id| glow::NativeBuffer(id.0)));
        }
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        unsafe {
            self.buffer_data_u8_slice(target.gl_enum(), data, glow::STATIC_DRAW);
        }
    }

    fn delete_buffer(&self, buffer: BufferId) {
        unsafe {
            HasContext::delete_buffer(self, glow::NativeBuffer(buffer.0));
        }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, normalized: bool, stride: i32, offset: i32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(self, index, size, glow::FLOAT, normalized, stride, offset);
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe {
            HasContext::enable_vertex_attrib_array(self, index);
        }
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe {
            HasContext::disable_vertex_attrib_array(self, index);
        }
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe {
            HasContext::clear_color(self, red, green, blue, alpha);
        }
    }

    fn clear(&self, mask: u32) {
        unsafe {
            HasContext::clear(self, mask);
        }
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        unsafe {
            HasContext::draw_elements(self, mode, count, element_type, offset);
        }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe {
            HasContext::draw_arrays(self, mode, first, count);
        }
    }
}
