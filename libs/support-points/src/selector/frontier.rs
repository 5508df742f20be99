//! Distance-bounded Dijkstra over an [`IntersectionGraph`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{IntersectionGraph, VertexId};

/// State for the priority queue.
#[derive(Debug, Clone, Copy)]
struct State {
    vertex: VertexId,
    distance: f64,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; ties go to the lower vertex id
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Outcome of popping the frontier once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Settle {
    /// The vertex was finalized within the bound.
    Within(VertexId),
    /// A stale queue entry was discarded.
    Stale,
    /// The closest remaining vertex lies beyond the bound.
    Exceeded,
    /// Nothing left to explore.
    Exhausted,
}

/// Reusable bounded shortest-path search.
///
/// Tentative distances are kept in the graph's per-vertex scratch field.
/// Only vertices touched by the last run are reset afterwards, so repeated
/// runs cost in proportion to the area they explore rather than the whole
/// graph.
#[derive(Debug, Default)]
pub(crate) struct BoundedDijkstra {
    heap: BinaryHeap<State>,
    touched: Vec<VertexId>,
}

impl BoundedDijkstra {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Runs from `source` and calls `settle` for every vertex whose shortest
    /// distance is at most `bound`, in non-decreasing distance order.
    ///
    /// The search ends as soon as the closest frontier vertex lies beyond
    /// `bound`; since the frontier is explored in distance order, nothing
    /// later could be within it.
    pub(crate) fn run<F>(
        &mut self,
        graph: &mut IntersectionGraph,
        source: VertexId,
        bound: f64,
        mut settle: F,
    ) where
        F: FnMut(&mut IntersectionGraph, VertexId),
    {
        self.discover(graph, source, 0.0);

        loop {
            match self.pop(graph, bound) {
                Settle::Within(vertex) => {
                    settle(graph, vertex);
                    self.relax(graph, vertex);
                }
                Settle::Stale => {}
                Settle::Exceeded | Settle::Exhausted => break,
            }
        }

        self.clear(graph);
    }

    fn pop(&mut self, graph: &IntersectionGraph, bound: f64) -> Settle {
        let Some(State { vertex, distance }) = self.heap.pop() else {
            return Settle::Exhausted;
        };
        if distance > graph.vertex(vertex).distance {
            return Settle::Stale;
        }
        if distance > bound {
            return Settle::Exceeded;
        }
        Settle::Within(vertex)
    }

    fn relax(&mut self, graph: &mut IntersectionGraph, vertex: VertexId) {
        let distance = graph.vertex(vertex).distance;
        // Index loop: `discover` needs the graph mutably
        for i in 0..graph.out_edges(vertex).len() {
            let edge = graph.out_edges(vertex)[i];
            let candidate = distance + edge.penalty;
            if candidate < graph.vertex(edge.target).distance {
                self.discover(graph, edge.target, candidate);
            }
        }
    }

    fn discover(&mut self, graph: &mut IntersectionGraph, vertex: VertexId, distance: f64) {
        let slot = &mut graph.vertex_mut(vertex).distance;
        if slot.is_infinite() {
            self.touched.push(vertex);
        }
        *slot = distance;
        self.heap.push(State { vertex, distance });
    }

    fn clear(&mut self, graph: &mut IntersectionGraph) {
        self.heap.clear();
        for vertex in self.touched.drain(..) {
            graph.vertex_mut(vertex).distance = f64::INFINITY;
        }
    }
}
