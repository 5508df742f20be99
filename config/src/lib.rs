//! # Config Crate
//!
//! Centralized configuration for the support point detection pipeline.
//! Printer parameters, sampling resolution and overhang thresholds are
//! defined here so the graph builder, the selector and the sampler agree on
//! the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::{SupportConfig, DEFAULT_SLICE_THICKNESS};
//!
//! let cfg = SupportConfig::default();
//! assert_eq!(cfg.slice_thickness, DEFAULT_SLICE_THICKNESS);
//!
//! // Coverage is the effective radius expressed in grid steps.
//! assert!((cfg.coverage() - 5.0 / (25.4 / 600.0)).abs() < 1e-9);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit**: Configuration is a value passed by reference, never global
//! - **Validated**: Constructors reject values the algorithms cannot use

pub mod constants;
pub mod support;

pub use constants::*;
pub use support::{ConfigError, SupportConfig};
