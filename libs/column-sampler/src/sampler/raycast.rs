//! Ray/triangle crossings for vertical sampling rays.

use config::constants::EPSILON;
use glam::DVec3;

/// Slack on barycentric bounds so rays through a shared edge or vertex hit
/// every adjacent triangle. The duplicates are merged afterwards.
const BARYCENTRIC_TOLERANCE: f64 = 1e-9;

/// Crossings of one ray closer than this along z are the same crossing.
const HIT_MERGE_TOLERANCE: f64 = 1e-7;

/// A ray crossing the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hit {
    /// Height of the crossing.
    pub z: f64,
    /// True where the ray enters material (surface faces against the ray).
    pub entering: bool,
}

/// Möller–Trumbore ray-triangle intersection algorithm.
///
/// Returns the distance along the ray and whether the ray enters the solid
/// through this triangle, or None if there is no intersection.
pub(crate) fn ray_triangle_intersection(
    ray_origin: DVec3,
    ray_dir: DVec3,
    v0: DVec3,
    v1: DVec3,
    v2: DVec3,
) -> Option<(f64, bool)> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray_dir.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray_origin - v0;
    let u = f * s.dot(h);

    if !(-BARYCENTRIC_TOLERANCE..=1.0 + BARYCENTRIC_TOLERANCE).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray_dir.dot(q);

    if v < -BARYCENTRIC_TOLERANCE || u + v > 1.0 + BARYCENTRIC_TOLERANCE {
        return None;
    }

    // a = -dot(ray_dir, normal) scaled by twice the area
    Some((f * edge2.dot(q), a > 0.0))
}

/// Sorts the crossings of one column ascending by z and merges duplicates
/// produced by shared edges.
pub(crate) fn resolve_hits(mut hits: Vec<Hit>) -> Vec<Hit> {
    hits.sort_by(|a, b| a.z.total_cmp(&b.z));
    hits.dedup_by(|next, kept| {
        next.entering == kept.entering && (next.z - kept.z).abs() < HIT_MERGE_TOLERANCE
    });
    hits
}
