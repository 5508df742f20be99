//! # Intersection Graph
//!
//! Directed graph over surface crossings. Vertices live in an arena indexed
//! by [`VertexId`]; each vertex owns the list of its outgoing edges.
//!
//! ## Edges
//!
//! - **Vertical**: entry → exit of the same column, penalty 0. Material
//!   spans the column between the two crossings.
//! - **Cross**: entry of a neighbouring column → entry of the target column,
//!   weighted by the overhang penalty of the supporting direction.
//!
//! Cross edges can form cycles between neighbouring columns, so traversals
//! must not assume a DAG.

mod builder;


pub use builder::IntersectionGraphBuilder;

use glam::DVec3;

/// Dense index of a vertex in an [`IntersectionGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Returns the arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One surface crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// World-space position of the crossing.
    pub position: DVec3,
    /// True until an anchor is proven to hold this point.
    pub floatable: bool,
    /// Scratch distance of the current bounded traversal.
    pub distance: f64,
}

impl Vertex {
    /// Creates a floatable vertex with no tentative distance.
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            floatable: true,
            distance: f64::INFINITY,
        }
    }
}

/// Kind of support an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Entry to exit within one column.
    Vertical,
    /// Neighbouring column to target column.
    Cross,
}

/// Outgoing edge of a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Vertex the edge points to.
    pub target: VertexId,
    /// Overhang severity in `[0, 1]`.
    pub penalty: f64,
    /// Vertical or cross edge.
    pub kind: EdgeKind,
}

/// Arena-backed directed graph of surface crossings.
#[derive(Debug, Clone, Default)]
pub struct IntersectionGraph {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl IntersectionGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Adds a floatable vertex and returns its id.
    pub fn add_vertex(&mut self, position: DVec3) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex::new(position));
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds a directed edge.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, penalty: f64, kind: EdgeKind) {
        debug_assert!((0.0..=1.0).contains(&penalty), "penalty out of range: {penalty}");
        self.adjacency[source.index()].push(Edge {
            target,
            penalty,
            kind,
        });
        self.edge_count += 1;
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edges of one kind.
    pub fn edge_count_of(&self, kind: EdgeKind) -> usize {
        self.adjacency
            .iter()
            .flatten()
            .filter(|edge| edge.kind == kind)
            .count()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex with the given id.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Returns the vertex with the given id for mutation.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.index()]
    }

    /// Returns all vertices in id order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterates over all vertex ids.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len() as u32).map(VertexId)
    }

    /// Returns the outgoing edges of a vertex.
    #[inline]
    pub fn out_edges(&self, id: VertexId) -> &[Edge] {
        &self.adjacency[id.index()]
    }

    /// Number of vertices still waiting for support.
    pub fn floatable_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.floatable).count()
    }

    /// Marks every vertex floatable again and clears scratch distances.
    pub fn reset(&mut self) {
        for vertex in &mut self.vertices {
            vertex.floatable = true;
        }
        self.clear_distances();
    }

    /// Sets every scratch distance back to infinity.
    pub fn clear_distances(&mut self) {
        for vertex in &mut self.vertices {
            vertex.distance = f64::INFINITY;
        }
    }
}
