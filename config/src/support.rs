//! Printer and sampling parameters for support point detection.
//!
//! [`SupportConfig`] replaces a process-wide parameter store: it is built
//! once, validated, and passed by reference into the graph builder, the
//! selector and the sampler.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    pixel_width_for_dpi, DEFAULT_DPI, DEFAULT_EFFECTIVE_RADIUS, DEFAULT_OVERHANG_ANGLE_DEGREES,
    DEFAULT_SLICE_THICKNESS, MAX_GRID_SIZE,
};

/// Parameters shared by every stage of the pipeline.
///
/// # Examples
/// ```
/// use config::SupportConfig;
/// let cfg = SupportConfig::new(0.2, 300, 4.0, 50f64.to_radians()).expect("valid config");
/// assert_eq!(cfg.dpi, 300);
/// assert!(cfg.coverage() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportConfig {
    /// Print layer height in millimetres.
    pub slice_thickness: f64,
    /// Sampling resolution in dots per inch.
    pub dpi: u32,
    /// Width of one grid step in millimetres, derived from `dpi`.
    pub pixel_width: f64,
    /// Maximum number of sampling columns per axis.
    pub max_grid_size: usize,
    /// Physical reach of one support anchor in millimetres.
    pub effective_radius: f64,
    /// Self-supporting overhang angle in radians, measured from the build axis.
    pub overhang_angle: f64,
}

impl SupportConfig {
    /// Builds a configuration, deriving the pixel width from `dpi`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is outside the range the
    /// builder and selector can work with.
    pub fn new(
        slice_thickness: f64,
        dpi: u32,
        effective_radius: f64,
        overhang_angle: f64,
    ) -> Result<Self, ConfigError> {
        let cfg = Self {
            slice_thickness,
            dpi,
            pixel_width: if dpi == 0 { 0.0 } else { pixel_width_for_dpi(dpi) },
            max_grid_size: MAX_GRID_SIZE,
            effective_radius,
            overhang_angle,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Replaces the maximum grid size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGridSize`] for a zero size.
    pub fn with_max_grid_size(mut self, max_grid_size: usize) -> Result<Self, ConfigError> {
        self.max_grid_size = max_grid_size;
        self.validate()?;
        Ok(self)
    }

    /// Checks every field. Useful after deserializing a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.slice_thickness > 0.0) || !self.slice_thickness.is_finite() {
            return Err(ConfigError::InvalidSliceThickness(self.slice_thickness));
        }
        if self.dpi == 0 {
            return Err(ConfigError::InvalidDpi(self.dpi));
        }
        if !(self.pixel_width > 0.0) || !self.pixel_width.is_finite() {
            return Err(ConfigError::InvalidPixelWidth(self.pixel_width));
        }
        if self.max_grid_size == 0 {
            return Err(ConfigError::InvalidGridSize(self.max_grid_size));
        }
        if !(self.effective_radius >= 0.0) || !self.effective_radius.is_finite() {
            return Err(ConfigError::InvalidEffectiveRadius(self.effective_radius));
        }
        if !(0.0..FRAC_PI_2).contains(&self.overhang_angle) {
            return Err(ConfigError::InvalidOverhangAngle(self.overhang_angle));
        }
        Ok(())
    }

    /// Reach of one anchor in grid steps, comparable with penalty-weighted
    /// graph distances.
    #[inline]
    pub fn coverage(&self) -> f64 {
        self.effective_radius / self.pixel_width
    }

    /// Integer print layer a z coordinate belongs to.
    ///
    /// A half-layer offset makes boundary values round consistently.
    ///
    /// # Examples
    /// ```
    /// use config::SupportConfig;
    /// let cfg = SupportConfig::default();
    /// assert_eq!(cfg.machine_layer(0.0), 0);
    /// assert_eq!(cfg.machine_layer(0.1), 1);
    /// assert_eq!(cfg.machine_layer(0.12), 1);
    /// ```
    #[inline]
    pub fn machine_layer(&self, z: f64) -> i64 {
        ((z - self.slice_thickness * 0.5) / self.slice_thickness).ceil() as i64
    }
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            slice_thickness: DEFAULT_SLICE_THICKNESS,
            dpi: DEFAULT_DPI,
            pixel_width: pixel_width_for_dpi(DEFAULT_DPI),
            max_grid_size: MAX_GRID_SIZE,
            effective_radius: DEFAULT_EFFECTIVE_RADIUS,
            overhang_angle: DEFAULT_OVERHANG_ANGLE_DEGREES.to_radians(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Layer height is zero, negative or not finite.
    #[error("slice thickness must be positive: {0}")]
    InvalidSliceThickness(f64),
    /// Sampling resolution is zero.
    #[error("dpi must be positive: {0}")]
    InvalidDpi(u32),
    /// Grid step is zero, negative or not finite.
    #[error("pixel width must be positive: {0}")]
    InvalidPixelWidth(f64),
    /// Maximum grid size is zero.
    #[error("max grid size must be >= 1: {0}")]
    InvalidGridSize(usize),
    /// Anchor reach is negative or not finite.
    #[error("effective radius must be non-negative: {0}")]
    InvalidEffectiveRadius(f64),
    /// Overhang angle is outside `[0, pi/2)`.
    #[error("overhang angle must be in [0, pi/2) radians: {0}")]
    InvalidOverhangAngle(f64),
}
