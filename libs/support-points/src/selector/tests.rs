//! # Selector Tests
//!
//! Tests for greedy anchor placement and the bounded traversal behind it.

use std::f64::consts::FRAC_PI_4;

use config::SupportConfig;
use glam::DVec3;

use super::*;
use crate::error::SupportError;
use crate::graph::{EdgeKind, IntersectionGraphBuilder};
use crate::grid::ColumnGrid;

/// Unit layers, 0.1 mm grid step, 45° overhang. Coverage is 10.
fn unit_config() -> SupportConfig {
    SupportConfig::new(1.0, 254, 1.0, FRAC_PI_4).unwrap()
}

fn column(x: f64, y: f64, depths: &[f64]) -> Vec<DVec3> {
    depths.iter().map(|&z| DVec3::new(x, y, z)).collect()
}

/// Graph of isolated vertices at the given depths, one per x position.
fn chain(depths: &[f64]) -> IntersectionGraph {
    let mut graph = IntersectionGraph::new();
    for (i, &z) in depths.iter().enumerate() {
        graph.add_vertex(DVec3::new(i as f64, 0.0, z));
    }
    graph
}

/// Plate with a cantilevered slab over its left half. Every cross link
/// is an overhang of some degree.
fn cantilever_grid() -> ColumnGrid {
    let mut columns = Vec::new();
    for row in 0..3 {
        for col in 0..6 {
            let (x, y) = (col as f64 * 0.1, row as f64 * 0.1);
            let depths: &[f64] = if col < 3 {
                &[0.0, 0.3, 2.0, 2.4]
            } else {
                &[0.0, 2.4]
            };
            columns.push(column(x, y, depths));
        }
    }
    ColumnGrid::new(3, 6, columns).unwrap()
}

/// Reference all-pairs-free shortest distances by repeated relaxation.
fn reference_distances(graph: &IntersectionGraph, source: VertexId) -> Vec<f64> {
    let mut distance = vec![f64::INFINITY; graph.vertex_count()];
    distance[source.index()] = 0.0;
    for _ in 0..graph.vertex_count() {
        let mut changed = false;
        for id in graph.vertex_ids() {
            let d = distance[id.index()];
            if d.is_infinite() {
                continue;
            }
            for edge in graph.out_edges(id) {
                if d + edge.penalty < distance[edge.target.index()] {
                    distance[edge.target.index()] = d + edge.penalty;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    distance
}

fn vertex_at(graph: &IntersectionGraph, position: DVec3) -> VertexId {
    graph
        .vertex_ids()
        .find(|&id| graph.vertex(id).position == position)
        .unwrap()
}

#[test]
fn test_single_column_yields_one_anchor() {
    let grid = ColumnGrid::new(1, 1, vec![column(0.0, 0.0, &[0.0, 1.0])]).unwrap();
    let config = unit_config();
    let mut graph = IntersectionGraphBuilder::new(&config).build(&grid);

    let selector = CoverageConstrainedSelector::new(&config).unwrap();
    assert!((selector.coverage() - 10.0).abs() < 1e-9);

    let anchors = selector.select(&mut graph);
    assert_eq!(anchors, vec![DVec3::new(0.0, 0.0, 0.0)]);
    assert!(!graph.vertex(VertexId(1)).floatable);
}

#[test]
fn test_straight_down_neighbours_share_one_anchor() {
    let grid = ColumnGrid::new(
        1,
        2,
        vec![column(0.0, 0.0, &[0.0, 1.0]), column(0.0, 0.0, &[1.0, 2.0])],
    )
    .unwrap();
    let config = unit_config();
    let mut graph = IntersectionGraphBuilder::new(&config).build(&grid);

    let anchors = CoverageConstrainedSelector::new(&config).unwrap().select(&mut graph);
    assert_eq!(anchors.len(), 1);
    assert_eq!(graph.floatable_count(), 0);
}

#[test]
fn test_isolated_vertex_is_its_own_anchor() {
    let grid = ColumnGrid::new(1, 1, vec![column(0.0, 0.0, &[0.0, 1.0, 2.0])]).unwrap();
    let config = unit_config();
    let mut graph = IntersectionGraphBuilder::new(&config).build(&grid);

    let anchors = CoverageConstrainedSelector::new(&config).unwrap().select(&mut graph);
    assert_eq!(
        anchors,
        vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 2.0)]
    );
}

#[test]
fn test_coverage_bound_is_inclusive() {
    let mut graph = chain(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    for i in 0..4 {
        graph.add_edge(VertexId(i), VertexId(i + 1), 0.5, EdgeKind::Cross);
    }

    let anchors = CoverageConstrainedSelector::with_coverage(1.0).unwrap().select(&mut graph);
    // 0 reaches 1 (0.5) and 2 (1.0); 3 starts over and reaches 4
    let depths: Vec<f64> = anchors.iter().map(|p| p.z).collect();
    assert_eq!(depths, vec![0.0, 3.0]);
}

#[test]
fn test_traversal_stops_beyond_bound() {
    let mut graph = chain(&[0.0, 1.0, 2.0, 3.0]);
    for i in 0..3 {
        graph.add_edge(VertexId(i), VertexId(i + 1), 0.4, EdgeKind::Cross);
    }

    let anchors = CoverageConstrainedSelector::with_coverage(1.0).unwrap().select(&mut graph);
    let depths: Vec<f64> = anchors.iter().map(|p| p.z).collect();
    assert_eq!(depths, vec![0.0, 3.0]);
}

#[test]
fn test_cheap_detour_beats_expensive_direct_edge() {
    // Direct edge 0 -> 1 is over budget, the detour through 2 and 3 is not
    let mut graph = chain(&[0.0, 3.0, 1.0, 2.0]);
    graph.add_edge(VertexId(0), VertexId(1), 1.0, EdgeKind::Cross);
    graph.add_edge(VertexId(0), VertexId(2), 0.1, EdgeKind::Cross);
    graph.add_edge(VertexId(2), VertexId(3), 0.1, EdgeKind::Cross);
    graph.add_edge(VertexId(3), VertexId(1), 0.1, EdgeKind::Cross);

    let anchors = CoverageConstrainedSelector::with_coverage(0.5).unwrap().select(&mut graph);
    assert_eq!(anchors.len(), 1);
    assert_eq!(graph.floatable_count(), 0);
}

#[test]
fn test_cycles_are_tolerated() {
    let mut graph = chain(&[0.0, 0.5, 1.0]);
    graph.add_edge(VertexId(0), VertexId(1), 0.2, EdgeKind::Cross);
    graph.add_edge(VertexId(1), VertexId(0), 0.2, EdgeKind::Cross);
    graph.add_edge(VertexId(1), VertexId(2), 0.2, EdgeKind::Cross);
    graph.add_edge(VertexId(2), VertexId(1), 0.0, EdgeKind::Cross);

    let anchors = CoverageConstrainedSelector::with_coverage(1.0).unwrap().select(&mut graph);
    assert_eq!(anchors.len(), 1);
}

#[test]
fn test_unfloatable_vertex_is_never_emitted() {
    let mut graph = chain(&[0.0, 1.0, 2.0]);
    graph.vertex_mut(VertexId(0)).floatable = false;

    let anchors = CoverageConstrainedSelector::with_coverage(1.0).unwrap().select(&mut graph);
    let depths: Vec<f64> = anchors.iter().map(|p| p.z).collect();
    assert_eq!(depths, vec![1.0, 2.0]);
}

#[test]
fn test_equal_depths_keep_id_order() {
    let mut graph = chain(&[1.0, 0.0, 0.0, 0.0]);
    let anchors = CoverageConstrainedSelector::with_coverage(1.0).unwrap().select(&mut graph);
    let xs: Vec<f64> = anchors.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 0.0]);
}

#[test]
fn test_zero_coverage_still_follows_free_edges() {
    let grid = ColumnGrid::new(1, 1, vec![column(0.0, 0.0, &[0.0, 1.0])]).unwrap();
    let config = unit_config();
    let mut graph = IntersectionGraphBuilder::new(&config).build(&grid);

    let anchors = CoverageConstrainedSelector::with_coverage(0.0).unwrap().select(&mut graph);
    assert_eq!(anchors.len(), 1);
}

#[test]
fn test_anchors_ascend_in_z() {
    let grid = cantilever_grid();
    let config = unit_config();
    let mut graph = IntersectionGraphBuilder::new(&config).build(&grid);

    let anchors = CoverageConstrainedSelector::with_coverage(0.3).unwrap().select(&mut graph);
    assert!(!anchors.is_empty());
    assert!(anchors.windows(2).all(|w| w[0].z <= w[1].z));
}

#[test]
fn test_every_vertex_is_held_after_selection() {
    let grid = cantilever_grid();
    let config = unit_config();
    let mut graph = IntersectionGraphBuilder::new(&config).build(&grid);

    CoverageConstrainedSelector::with_coverage(0.3).unwrap().select(&mut graph);
    assert_eq!(graph.floatable_count(), 0);
    assert!(graph.vertices().iter().all(|v| v.distance.is_infinite()));
}

#[test]
fn test_leftover_scratch_distances_are_ignored() {
    let mut graph = chain(&[0.0, 1.0, 2.0]);
    graph.add_edge(VertexId(0), VertexId(1), 0.0, EdgeKind::Vertical);
    graph.add_edge(VertexId(1), VertexId(2), 0.0, EdgeKind::Cross);
    graph.vertex_mut(VertexId(1)).distance = 0.0;

    let anchors = CoverageConstrainedSelector::with_coverage(10.0)
        .unwrap()
        .select(&mut graph);
    assert_eq!(anchors, vec![DVec3::ZERO]);
    assert_eq!(graph.floatable_count(), 0);
    assert!(graph.vertices().iter().all(|v| v.distance.is_infinite()));
}

#[test]
fn test_invalid_coverage_is_rejected() {
    for coverage in [-1.0, f64::NAN, f64::INFINITY] {
        let err = CoverageConstrainedSelector::with_coverage(coverage).unwrap_err();
        assert!(matches!(err, SupportError::InvalidCoverage(_)));
    }

    let mut config = unit_config();
    config.effective_radius = -1.0;
    assert!(CoverageConstrainedSelector::new(&config).is_err());
}

#[test]
fn test_later_anchors_lie_beyond_earlier_coverage() {
    let grid = cantilever_grid();
    let config = unit_config();
    let mut graph = IntersectionGraphBuilder::new(&config).build(&grid);
    let coverage = 0.3;

    let anchors = CoverageConstrainedSelector::with_coverage(coverage)
        .unwrap()
        .select(&mut graph);
    assert!(anchors.len() > 1);

    let ids: Vec<VertexId> = anchors.iter().map(|&p| vertex_at(&graph, p)).collect();
    for (i, &earlier) in ids.iter().enumerate() {
        let distance = reference_distances(&graph, earlier);
        for &later in &ids[i + 1..] {
            assert!(
                distance[later.index()] > coverage,
                "anchor {later:?} was within reach of {earlier:?}"
            );
        }
    }
}

#[test]
fn test_selection_is_deterministic() {
    let grid = cantilever_grid();
    let config = unit_config();
    let selector = CoverageConstrainedSelector::with_coverage(0.3).unwrap();

    let mut first = IntersectionGraphBuilder::new(&config).build(&grid);
    let mut second = first.clone();
    let a = selector.select(&mut first);
    let b = selector.select(&mut second);
    assert_eq!(a, b);

    first.reset();
    assert_eq!(selector.select(&mut first), a);
}
