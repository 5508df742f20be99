//! # Configuration Constants
//!
//! Centralized constants for support point detection. Printer parameters,
//! sampling resolution and numerical tolerances are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Printer**: Layer height and printable overhang
//! - **Sampling**: Grid resolution and limits of the column sampler
//! - **Support**: Reach of a single support anchor

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used by the ray caster to reject rays parallel to a triangle and by
/// helpers that compare derived quantities.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// PRINTER CONSTANTS
// =============================================================================

/// Default slice thickness (layer height) in millimetres.
///
/// Continuous z coordinates are snapped to integer machine layers of this
/// height before neighbouring columns are connected.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SLICE_THICKNESS;
///
/// let layers_per_mm = (1.0 / DEFAULT_SLICE_THICKNESS).round();
/// assert_eq!(layers_per_mm, 10.0);
/// ```
pub const DEFAULT_SLICE_THICKNESS: f64 = 0.1;

/// Default self-supporting overhang angle in degrees.
///
/// Directions within this angle of the build axis need no support.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_OVERHANG_ANGLE_DEGREES;
///
/// let radians = DEFAULT_OVERHANG_ANGLE_DEGREES.to_radians();
/// assert!((radians - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// ```
pub const DEFAULT_OVERHANG_ANGLE_DEGREES: f64 = 45.0;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Millimetres per inch, used to turn a dpi resolution into a pixel width.
pub const MM_PER_INCH: f64 = 25.4;

/// Default sampling resolution in dots per inch.
///
/// # Example
///
/// ```rust
/// use config::constants::{pixel_width_for_dpi, DEFAULT_DPI};
///
/// let width = pixel_width_for_dpi(DEFAULT_DPI);
/// assert!((width - 0.042333).abs() < 1e-6);
/// ```
pub const DEFAULT_DPI: u32 = 600;

/// Largest grid (in columns per axis) the sampler accepts.
///
/// Models whose footprint needs more columns than this on either axis are
/// rejected instead of allocating an oversized grid.
pub const MAX_GRID_SIZE: usize = 4000;

/// Margin, in pixels, added around the model footprint before sampling.
///
/// # Example
///
/// ```rust
/// use config::constants::{pixel_width_for_dpi, DEFAULT_DPI, SAMPLING_MARGIN_PIXELS};
///
/// let margin = SAMPLING_MARGIN_PIXELS * pixel_width_for_dpi(DEFAULT_DPI);
/// assert!(margin > 0.0 && margin < 1.0);
/// ```
pub const SAMPLING_MARGIN_PIXELS: f64 = 10.0;

// =============================================================================
// SUPPORT CONSTANTS
// =============================================================================

/// Default physical reach of one support anchor in millimetres.
pub const DEFAULT_EFFECTIVE_RADIUS: f64 = 5.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Converts a dpi resolution into the width of one grid step in millimetres.
///
/// # Example
///
/// ```rust
/// use config::constants::pixel_width_for_dpi;
///
/// assert!((pixel_width_for_dpi(254) - 0.1).abs() < 1e-12);
/// ```
#[inline]
pub fn pixel_width_for_dpi(dpi: u32) -> f64 {
    MM_PER_INCH / f64::from(dpi)
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
