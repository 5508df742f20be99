//! # Overhang Penalty
//!
//! Weights a supporting direction by how far it leans away from the build
//! axis. A penalty of 0 means the direction is self-supporting, 1 means a
//! horizontal (or worse) overhang.

use std::f64::consts::FRAC_PI_2;

use glam::DVec3;

/// Angle in radians between the build axis (+Z) and the direction from
/// `support` up to `target`.
///
/// Coincident points have no direction and are treated as vertical.
#[inline]
pub fn support_angle(support: DVec3, target: DVec3) -> f64 {
    let direction = (target - support).normalize_or_zero();
    if direction == DVec3::ZERO {
        return 0.0;
    }
    DVec3::Z.dot(direction).clamp(-1.0, 1.0).acos()
}

/// Penalty in `[0, 1]` for a supporting direction at `angle`.
///
/// Zero up to `overhang_angle`, then growing linearly until it saturates at
/// a right angle.
///
/// # Example
///
/// ```rust
/// use std::f64::consts::FRAC_PI_4;
/// use support_points::overhang::overhang_penalty;
///
/// assert_eq!(overhang_penalty(0.3, FRAC_PI_4), 0.0);
/// assert!((overhang_penalty(3.0 * FRAC_PI_4 / 2.0, FRAC_PI_4) - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn overhang_penalty(angle: f64, overhang_angle: f64) -> f64 {
    if angle <= overhang_angle {
        return 0.0;
    }
    ((angle - overhang_angle) / (FRAC_PI_2 - overhang_angle)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_vertical_direction_has_zero_angle() {
        let angle = support_angle(DVec3::ZERO, DVec3::new(0.0, 0.0, 3.0));
        assert_relative_eq!(angle, 0.0);
    }

    #[test]
    fn test_diagonal_direction_is_quarter_pi() {
        let angle = support_angle(DVec3::ZERO, DVec3::new(1.0, 0.0, 1.0));
        assert_relative_eq!(angle, FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_downward_direction_is_pi() {
        let angle = support_angle(DVec3::new(0.0, 0.0, 1.0), DVec3::ZERO);
        assert_relative_eq!(angle, PI, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_points_are_vertical() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(support_angle(p, p), 0.0);
    }

    #[test]
    fn test_penalty_zero_at_threshold() {
        assert_eq!(overhang_penalty(FRAC_PI_4, FRAC_PI_4), 0.0);
        assert!(overhang_penalty(FRAC_PI_4 + 1e-9, FRAC_PI_4) > 0.0);
    }

    #[test]
    fn test_penalty_halfway() {
        let overhang = FRAC_PI_4;
        let angle = overhang + (FRAC_PI_2 - overhang) / 2.0;
        assert_relative_eq!(overhang_penalty(angle, overhang), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_penalty_saturates() {
        assert_eq!(overhang_penalty(FRAC_PI_2, FRAC_PI_4), 1.0);
        assert_eq!(overhang_penalty(PI, FRAC_PI_4), 1.0);
    }

    #[test]
    fn test_penalty_stays_in_unit_interval() {
        for overhang_step in 0..10 {
            let overhang = overhang_step as f64 * 0.15;
            for angle_step in 0..=64 {
                let angle = angle_step as f64 * PI / 64.0;
                let penalty = overhang_penalty(angle, overhang);
                assert!((0.0..=1.0).contains(&penalty));
                assert_eq!(penalty == 0.0, angle <= overhang);
            }
        }
    }
}
