//! # Support Point Finder
//!
//! Runs graph construction and anchor selection back to back for one
//! intersection source, logging phase timings.

use std::time::{Duration, Instant};

use config::SupportConfig;
use glam::DVec3;
use serde::Serialize;
use tracing::info;

use crate::error::SupportResult;
use crate::graph::{EdgeKind, IntersectionGraphBuilder};
use crate::grid::{ColumnGrid, IntersectionSource};
use crate::selector::CoverageConstrainedSelector;

/// Anchors chosen for one model, with statistics of the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupportPoints {
    /// Anchor positions in placement order (ascending z).
    pub anchors: Vec<DVec3>,
    /// Number of graph vertices (surface crossings).
    pub vertex_count: usize,
    /// Number of vertical edges.
    pub vertical_edge_count: usize,
    /// Number of cross edges.
    pub cross_edge_count: usize,
    /// Time spent building the graph.
    pub graph_time: Duration,
    /// Time spent selecting anchors.
    pub selection_time: Duration,
}

impl SupportPoints {
    /// Number of anchors.
    #[inline]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns true if no anchor was needed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

/// End-to-end support point detection.
#[derive(Debug, Clone, Copy)]
pub struct SupportPointFinder<'a> {
    config: &'a SupportConfig,
}

impl<'a> SupportPointFinder<'a> {
    /// Creates a finder for the given configuration.
    pub fn new(config: &'a SupportConfig) -> Self {
        Self { config }
    }

    /// Collects the columns of `source`, builds the intersection graph and
    /// selects anchors.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or a column breaks the ordering
    /// precondition.
    pub fn run<S: IntersectionSource + ?Sized>(&self, source: &S) -> SupportResult<SupportPoints> {
        self.config.validate()?;
        let grid = ColumnGrid::from_source(source)?;
        self.run_grid(&grid)
    }

    /// Builds the graph for an already validated grid and selects anchors.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid.
    pub fn run_grid(&self, grid: &ColumnGrid) -> SupportResult<SupportPoints> {
        let selector = CoverageConstrainedSelector::new(self.config)?;

        let start = Instant::now();
        let mut graph = IntersectionGraphBuilder::new(self.config).build(grid);
        let graph_time = start.elapsed();
        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            elapsed_ns = graph_time.as_nanos() as u64,
            "Constructed intersection graph"
        );

        let start = Instant::now();
        let anchors = selector.select(&mut graph);
        let selection_time = start.elapsed();
        info!(
            anchors = anchors.len(),
            coverage = self.config.coverage(),
            elapsed_ns = selection_time.as_nanos() as u64,
            "Found support points"
        );

        Ok(SupportPoints {
            anchors,
            vertex_count: graph.vertex_count(),
            vertical_edge_count: graph.edge_count_of(EdgeKind::Vertical),
            cross_edge_count: graph.edge_count_of(EdgeKind::Cross),
            graph_time,
            selection_time,
        })
    }
}
