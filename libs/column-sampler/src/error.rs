//! # Sampler Errors
//!
//! Error types for column sampling and the end-to-end pipeline.

use config::ConfigError;
use support_points::SupportError;
use thiserror::Error;

/// Errors that can occur while sampling a mesh or finding its supports.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Support point detection failed
    #[error("Support detection failed: {0}")]
    Support(#[from] SupportError),

    /// Mesh has no triangles to sample
    #[error("Mesh is empty")]
    EmptyMesh,

    /// Triangle refers to a vertex that does not exist
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Footprint needs more columns than the configured maximum
    #[error("The model is too big: {cols}x{rows} columns (max: {max})")]
    ModelTooLarge { rows: usize, cols: usize, max: usize },
}

impl SamplerError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

/// Result type alias for sampling operations.
pub type SamplerResult<T> = Result<T, SamplerError>;
