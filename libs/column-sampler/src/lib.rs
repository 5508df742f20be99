//! # Column Sampler
//!
//! Turns a triangle mesh into the per-column surface crossings consumed by
//! the support point finder, and runs the whole detection pipeline.
//!
//! ## Architecture
//!
//! ```text
//! Mesh
//!   ↓
//! LayeredDepthSampler (vertical rays, one per grid cell, rayon rows)
//!   ↓
//! SupportPointFinder (graph construction + anchor selection)
//!   ↓
//! SupportPoints
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use column_sampler::{find_support_points, primitives::create_box};
//! use config::SupportConfig;
//! use glam::DVec3;
//!
//! let mesh = create_box(DVec3::ZERO, DVec3::new(1.0, 1.0, 2.0))?;
//! let result = find_support_points(&mesh, &SupportConfig::default())?;
//! assert_eq!(result.len(), 1);
//! # Ok::<(), column_sampler::SamplerError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;
pub mod sampler;

pub use error::{SamplerError, SamplerResult};
pub use mesh::Mesh;
pub use sampler::LayeredDepthSampler;

use config::SupportConfig;
use support_points::{SupportPointFinder, SupportPoints};

/// Samples `mesh` and selects the support anchors it needs.
///
/// # Errors
///
/// Propagates sampling errors ([`SamplerError::EmptyMesh`],
/// [`SamplerError::ModelTooLarge`], ...) and configuration errors.
pub fn find_support_points(mesh: &Mesh, config: &SupportConfig) -> SamplerResult<SupportPoints> {
    let sampler = LayeredDepthSampler::new(mesh, config)?;
    let grid = sampler.into_grid()?;
    Ok(SupportPointFinder::new(config).run_grid(&grid)?)
}
