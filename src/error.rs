//! Error types for the render engine.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Input rejected before anything is uploaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("position data has {len} floats, which is not a multiple of 3")]
    PositionsNotTriples { len: usize },

    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("element count {count} does not fit in a draw call")]
    CountOverflow { count: usize },
}

/// Kind of GPU object that failed to allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    VertexArray,
    Buffer,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::VertexArray => write!(f, "vertex array"),
            ResourceKind::Buffer => write!(f, "buffer"),
        }
    }
}

/// The driver refused to allocate an object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to create {kind}: {message}")]
pub struct ResourceError {
    pub kind: ResourceKind,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
