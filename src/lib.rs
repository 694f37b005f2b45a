//! A minimal OpenGL render engine. Models are uploaded through a [`ModelStore`] into
//! vertex-array objects and drawn as triangles by a [`Renderer`], either indexed or in array
//! order.

pub mod abs;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod model;
pub mod renderer;

pub use error::{Error, Result};
pub use loader::{ModelStore, ResourceRegistry};
pub use model::{DrawMode, ModelHandle};
pub use renderer::Renderer;
