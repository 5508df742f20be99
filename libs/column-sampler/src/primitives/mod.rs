//! # Primitives
//!
//! Mesh generation for simple solids used to exercise the sampler.

pub mod cuboid;

pub use cuboid::create_box;
