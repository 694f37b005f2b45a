//! This module contains the thin layer over OpenGL the engine is built on,
//! including the graphics entry points and, for the demo, window setup.

#[cfg(feature = "demo")]
pub mod app;
pub mod gl;
#[cfg(test)]
pub(crate) mod recording;

#[cfg(feature = "demo")]
pub use app::*;
pub use gl::*;
