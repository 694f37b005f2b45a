//! Frame rendering.
//!
//! The [`Renderer`] clears the color target once per frame and draws loaded models, binding
//! only the vertex array and the position attribute around each draw call.

use std::sync::Arc;

use glam::Vec4;

use crate::abs::GraphicsApi;
use crate::loader::{POSITION_ATTRIBUTE, draw_count};
use crate::model::{DrawMode, ModelHandle};

/// Opaque red.
pub const DEFAULT_CLEAR_COLOR: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

/// Clears frames and draws models loaded by a [`ModelStore`](crate::loader::ModelStore).
pub struct Renderer<G: GraphicsApi> {
    gl: Arc<G>,
    clear_color: Vec4,
}

impl<G: GraphicsApi> Renderer<G> {
    /// Creates a renderer that clears to `clear_color`.
    pub fn new(gl: &Arc<G>, clear_color: Vec4) -> Self {
        Self {
            gl: Arc::clone(gl),
            clear_color,
        }
    }

    /// Creates a renderer that clears to [`DEFAULT_CLEAR_COLOR`].
    pub fn with_default_color(gl: &Arc<G>) -> Self {
        Self::new(gl, DEFAULT_CLEAR_COLOR)
    }

    /// Returns the color frames are cleared to.
    pub fn clear_color(&self) -> Vec4 {
        self.clear_color
    }

    /// Sets the color used by the next [`Renderer::begin_frame`].
    pub fn set_clear_color(&mut self, color: Vec4) {
        self.clear_color = color;
    }

    /// Clears the color buffer. Call once at the start of every frame, before drawing.
    pub fn begin_frame(&self) {
        let [red, green, blue, alpha] = self.clear_color.to_array();
        self.gl.clear_color(red, green, blue, alpha);
        self.gl.clear(glow::COLOR_BUFFER_BIT);
    }

    /// Draws a model as triangles.
    ///
    /// The vertex array and attribute 0 are unbound again afterwards. A handle whose store has
    /// already released its buffers is not detected here. A count too large for a draw call is
    /// skipped with a warning.
    pub fn draw(&self, model: &ModelHandle) {
        let count = match draw_count(model.count()) {
            Ok(count) => count,
            Err(err) => {
                log::warn!("Skipping model {}: {}", model.vertex_array().0, err);
                return;
            }
        };
        log::trace!("Drawing {:?} model {} ({} elements)", model.mode(), model.vertex_array().0, count);

        self.gl.bind_vertex_array(Some(model.vertex_array()));
        self.gl.enable_vertex_attrib_array(POSITION_ATTRIBUTE);
        match model.mode() {
            DrawMode::Indexed => {
                self.gl
                    .draw_elements(glow::TRIANGLES, count, glow::UNSIGNED_INT, 0);
            }
            DrawMode::Sequential => {
                self.gl.draw_arrays(glow::TRIANGLES, 0, count);
            }
        }
        self.gl.disable_vertex_attrib_array(POSITION_ATTRIBUTE);
        self.gl.bind_vertex_array(None);
    }

    /// Draws each model in order.
    pub fn draw_all<'a>(&self, models: impl IntoIterator<Item = &'a ModelHandle>) {
        for model in models {
            self.draw(model);
        }
    }
}
