//! # Coverage-Constrained Selector
//!
//! Greedy anchor placement over an [`IntersectionGraph`].
//!
//! ## Algorithm Overview
//!
//! 1. Order all vertices by ascending z (stable, so ties keep id order)
//! 2. Skip vertices already held by an earlier anchor
//! 3. Otherwise place an anchor at the vertex and run a bounded Dijkstra
//!    from it, with edge penalties as weights
//! 4. Every vertex within `coverage` of the anchor stops being floatable
//!
//! Later candidates observe the coverage of earlier anchors, so the sweep is
//! inherently sequential.

mod frontier;

#[cfg(test)]
mod tests;

use config::SupportConfig;
use glam::DVec3;
use tracing::debug;

use crate::error::{SupportError, SupportResult};
use crate::graph::{IntersectionGraph, VertexId};
use frontier::BoundedDijkstra;

/// Picks an ordered set of support anchors.
///
/// # Example
///
/// ```rust
/// use config::SupportConfig;
/// use glam::DVec3;
/// use support_points::{ColumnGrid, CoverageConstrainedSelector, IntersectionGraphBuilder};
///
/// let grid = ColumnGrid::new(1, 1, vec![vec![DVec3::ZERO, DVec3::Z]]).unwrap();
/// let config = SupportConfig::default();
/// let mut graph = IntersectionGraphBuilder::new(&config).build(&grid);
///
/// let anchors = CoverageConstrainedSelector::new(&config)?.select(&mut graph);
/// assert_eq!(anchors, vec![DVec3::ZERO]);
/// assert_eq!(graph.floatable_count(), 0);
/// # Ok::<(), support_points::SupportError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageConstrainedSelector {
    coverage: f64,
}

impl CoverageConstrainedSelector {
    /// Creates a selector whose reach is the configured effective radius in
    /// grid steps.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: &SupportConfig) -> SupportResult<Self> {
        config.validate()?;
        Self::with_coverage(config.coverage())
    }

    /// Creates a selector with an explicit reach in penalty-weighted graph
    /// distance.
    ///
    /// # Errors
    ///
    /// Returns [`SupportError::InvalidCoverage`] for a negative or
    /// non-finite reach.
    pub fn with_coverage(coverage: f64) -> SupportResult<Self> {
        if !(coverage >= 0.0) || !coverage.is_finite() {
            return Err(SupportError::InvalidCoverage(coverage));
        }
        Ok(Self { coverage })
    }

    /// Reach of one anchor.
    #[inline]
    pub fn coverage(&self) -> f64 {
        self.coverage
    }

    /// Places anchors until no vertex of `graph` is floatable and returns
    /// their positions in placement order.
    ///
    /// Vertices that are already unfloatable on entry are treated as held and
    /// never become anchors. Scratch distances left in the graph are ignored.
    pub fn select(&self, graph: &mut IntersectionGraph) -> Vec<DVec3> {
        graph.clear_distances();

        let mut order: Vec<VertexId> = graph.vertex_ids().collect();
        order.sort_by(|a, b| {
            graph
                .vertex(*a)
                .position
                .z
                .total_cmp(&graph.vertex(*b).position.z)
        });

        let mut search = BoundedDijkstra::new();
        let mut anchors = Vec::new();

        for vertex in order {
            if !graph.vertex(vertex).floatable {
                continue;
            }

            anchors.push(graph.vertex(vertex).position);

            let mut covered = 0usize;
            search.run(graph, vertex, self.coverage, |graph, held| {
                graph.vertex_mut(held).floatable = false;
                covered += 1;
            });
            debug!(anchor = vertex.0, covered, "Placed support anchor");
        }

        anchors
    }
}
