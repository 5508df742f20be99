//! # Layered Depth Sampler
//!
//! Casts one ray along +Z through the centre of every grid cell over the
//! model footprint and records where it crosses the surface. The result is
//! the per-column sorted crossing list the support point finder consumes.
//!
//! ## Grid
//!
//! The footprint is the model's bounding box grown by
//! [`SAMPLING_MARGIN_PIXELS`] grid steps and centred on the model. Column
//! `(row, col)` samples the cell centre
//! `origin + ((col + 0.5) * step, (row + 0.5) * step)`.
//!
//! Rows are sampled in parallel; the collected columns keep row-major order.

mod raycast;


use std::time::Instant;

use config::constants::SAMPLING_MARGIN_PIXELS;
use config::SupportConfig;
use glam::{DVec2, DVec3};
use rayon::prelude::*;
use support_points::{ColumnGrid, IntersectionSource, SupportResult};
use tracing::{debug, info};

use crate::error::{SamplerError, SamplerResult};
use crate::mesh::Mesh;
use raycast::{ray_triangle_intersection, resolve_hits, Hit};

/// Per-column surface crossings of a mesh.
///
/// # Example
///
/// ```rust
/// use column_sampler::{primitives::create_box, LayeredDepthSampler};
/// use config::SupportConfig;
/// use glam::DVec3;
/// use support_points::IntersectionSource;
///
/// let mesh = create_box(DVec3::ZERO, DVec3::ONE).unwrap();
/// let config = SupportConfig::new(0.1, 254, 1.0, 0.8).unwrap();
/// let sampler = LayeredDepthSampler::new(&mesh, &config).unwrap();
///
/// let (rows, cols) = sampler.grid_size();
/// assert_eq!((rows, cols), (20, 20));
/// assert_eq!(sampler.sample_column(10, 10).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LayeredDepthSampler {
    rows: usize,
    cols: usize,
    pixel_width: f64,
    origin: DVec2,
    columns: Vec<Vec<DVec3>>,
}

impl LayeredDepthSampler {
    /// Samples `mesh` on a grid with the configured pixel width.
    ///
    /// # Errors
    ///
    /// Fails for an invalid configuration, an empty or malformed mesh, or a
    /// footprint wider than `config.max_grid_size` columns.
    pub fn new(mesh: &Mesh, config: &SupportConfig) -> SamplerResult<Self> {
        config.validate()?;
        if mesh.is_empty() {
            return Err(SamplerError::EmptyMesh);
        }
        if !mesh.validate() {
            return Err(SamplerError::invalid_topology(
                "triangle index out of range",
            ));
        }

        let step = config.pixel_width;
        let (min, max) = mesh.bounding_box();
        let margin = SAMPLING_MARGIN_PIXELS * step;
        let size = max - min + DVec3::splat(margin);

        let cols = (size.x / step).round() as usize;
        let rows = (size.y / step).round() as usize;
        if cols > config.max_grid_size || rows > config.max_grid_size {
            return Err(SamplerError::ModelTooLarge {
                rows,
                cols,
                max: config.max_grid_size,
            });
        }

        let centre = (min + max) * 0.5;
        let origin = DVec2::new(
            centre.x - cols as f64 * step * 0.5,
            centre.y - rows as f64 * step * 0.5,
        );
        let mut sampler = Self {
            rows,
            cols,
            pixel_width: step,
            origin,
            columns: Vec::new(),
        };

        debug!(
            rows,
            cols,
            triangles = mesh.triangle_count(),
            "Sampling mesh"
        );
        let start = Instant::now();

        let buckets = sampler.row_buckets(mesh);
        let ray_z = min.z - margin;
        let columns: Vec<Vec<Vec<DVec3>>> = buckets
            .par_iter()
            .enumerate()
            .map(|(row, triangles)| sampler.sample_row(mesh, row, triangles, ray_z))
            .collect();
        sampler.columns = columns.into_iter().flatten().collect();

        info!(
            rows,
            cols,
            intersections = sampler.intersection_count(),
            elapsed_ns = start.elapsed().as_nanos() as u64,
            "Computed column intersections"
        );
        Ok(sampler)
    }

    /// Width of one grid step.
    #[inline]
    pub fn pixel_width(&self) -> f64 {
        self.pixel_width
    }

    /// World-space xy position sampled by column `(row, col)`.
    #[inline]
    pub fn cell_centre(&self, row: usize, col: usize) -> DVec2 {
        self.origin + DVec2::new(col as f64 + 0.5, row as f64 + 0.5) * self.pixel_width
    }

    /// Total number of crossings over all columns.
    pub fn intersection_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Converts the sampled columns into a validated grid.
    ///
    /// # Errors
    ///
    /// See [`ColumnGrid::new`].
    pub fn into_grid(self) -> SupportResult<ColumnGrid> {
        ColumnGrid::new(self.rows, self.cols, self.columns)
    }

    /// Triangles whose footprint covers at least one cell centre of each row.
    fn row_buckets(&self, mesh: &Mesh) -> Vec<Vec<usize>> {
        let mut buckets = vec![Vec::new(); self.rows];
        for tri in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.corners(tri);
            let lo = a.y.min(b.y).min(c.y);
            let hi = a.y.max(b.y).max(c.y);
            if let Some((first, last)) = cell_range(lo, hi, self.origin.y, self.pixel_width, self.rows)
            {
                for bucket in &mut buckets[first..=last] {
                    bucket.push(tri);
                }
            }
        }
        buckets
    }

    /// Casts the rays of one row against its candidate triangles.
    fn sample_row(&self, mesh: &Mesh, row: usize, triangles: &[usize], ray_z: f64) -> Vec<Vec<DVec3>> {
        let y = self.cell_centre(row, 0).y;
        let mut hits: Vec<Vec<Hit>> = vec![Vec::new(); self.cols];

        for &tri in triangles {
            let [a, b, c] = mesh.corners(tri);
            let lo = a.x.min(b.x).min(c.x);
            let hi = a.x.max(b.x).max(c.x);
            let Some((first, last)) = cell_range(lo, hi, self.origin.x, self.pixel_width, self.cols)
            else {
                continue;
            };
            for (col, column_hits) in hits.iter_mut().enumerate().take(last + 1).skip(first) {
                let x = self.cell_centre(row, col).x;
                let origin = DVec3::new(x, y, ray_z);
                if let Some((t, entering)) = ray_triangle_intersection(origin, DVec3::Z, a, b, c) {
                    column_hits.push(Hit {
                        z: ray_z + t,
                        entering,
                    });
                }
            }
        }

        hits.into_iter()
            .enumerate()
            .map(|(col, column_hits)| {
                let centre = self.cell_centre(row, col);
                resolve_hits(column_hits)
                    .into_iter()
                    .map(|hit| DVec3::new(centre.x, centre.y, hit.z))
                    .collect()
            })
            .collect()
    }
}

impl IntersectionSource for LayeredDepthSampler {
    fn grid_size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn sample_column(&self, row: usize, col: usize) -> Vec<DVec3> {
        self.columns[row * self.cols + col].clone()
    }
}

/// Indices of the cells whose centres fall inside `[lo, hi]`.
fn cell_range(lo: f64, hi: f64, origin: f64, step: f64, count: usize) -> Option<(usize, usize)> {
    if count == 0 {
        return None;
    }
    let first = ((lo - origin) / step - 0.5).ceil().max(0.0);
    let last = ((hi - origin) / step - 0.5).floor().min(count as f64 - 1.0);
    (first <= last).then_some((first as usize, last as usize))
}
