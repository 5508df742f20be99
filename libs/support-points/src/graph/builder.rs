//! Construction of the intersection graph from a [`ColumnGrid`].

use config::SupportConfig;
use glam::DVec3;
use tracing::{debug, warn};

use super::{EdgeKind, IntersectionGraph, VertexId};
use crate::grid::ColumnGrid;
use crate::overhang::{overhang_penalty, support_angle};

/// Builds an [`IntersectionGraph`] in a single pass over a grid.
///
/// Vertices are numbered column by column in row-major order and, inside a
/// column, in ascending z. Every complete entry/exit pair gets a vertical
/// edge, and every entry is offered support from each of its 8 neighbouring
/// columns.
///
/// # Example
///
/// ```rust
/// use config::SupportConfig;
/// use glam::DVec3;
/// use support_points::{ColumnGrid, IntersectionGraphBuilder};
///
/// let grid = ColumnGrid::new(1, 1, vec![vec![DVec3::ZERO, DVec3::Z]]).unwrap();
/// let config = SupportConfig::default();
/// let graph = IntersectionGraphBuilder::new(&config).build(&grid);
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IntersectionGraphBuilder<'a> {
    config: &'a SupportConfig,
}

impl<'a> IntersectionGraphBuilder<'a> {
    /// Creates a builder using the slice thickness and overhang angle of
    /// `config`.
    pub fn new(config: &'a SupportConfig) -> Self {
        Self { config }
    }

    /// Builds the graph for `grid`.
    pub fn build(&self, grid: &ColumnGrid) -> IntersectionGraph {
        let mut graph = IntersectionGraph::with_capacity(grid.intersection_count());

        // Id of the first vertex of each column, row-major
        let mut first_vertex = Vec::with_capacity(grid.rows() * grid.cols());
        for (row, col, column) in grid.columns() {
            first_vertex.push(graph.vertex_count() as u32);
            if column.len() % 2 == 1 {
                warn!(
                    row,
                    col,
                    count = column.len(),
                    "Odd intersection count, last crossing left unpaired"
                );
            }
            for &position in column {
                graph.add_vertex(position);
            }
        }

        for (row, col, column) in grid.columns() {
            let base = first_vertex[grid.column_index(row, col)];
            for (pair, span) in column.chunks_exact(2).enumerate() {
                let entry = VertexId(base + 2 * pair as u32);
                let exit = VertexId(entry.0 + 1);
                graph.add_edge(entry, exit, 0.0, EdgeKind::Vertical);

                for (n_row, n_col) in grid.neighbors(row, col) {
                    let candidates = grid.column(n_row, n_col);
                    if let Some((k, penalty)) = self.find_supporter(candidates, span[0]) {
                        let source = first_vertex[grid.column_index(n_row, n_col)] + k as u32;
                        graph.add_edge(VertexId(source), entry, penalty, EdgeKind::Cross);
                    }
                }
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Built intersection graph"
        );
        graph
    }

    /// Finds the material in `candidates` that supports a crossing at
    /// `target`.
    ///
    /// Scans entry/exit pairs bottom-up and returns the index of the first
    /// entry whose pair reaches the target's machine layer, along with the
    /// penalty of the direction from that entry to `target`. Scanning stops
    /// at the first pair that starts above the target's layer.
    pub fn find_supporter(&self, candidates: &[DVec3], target: DVec3) -> Option<(usize, f64)> {
        let layer = self.config.machine_layer(target.z);
        for (pair, span) in candidates.chunks_exact(2).enumerate() {
            if self.config.machine_layer(span[0].z) > layer {
                return None;
            }
            if self.config.machine_layer(span[1].z) >= layer {
                let angle = support_angle(span[0], target);
                let penalty = overhang_penalty(angle, self.config.overhang_angle);
                return Some((2 * pair, penalty));
            }
        }
        None
    }
}
