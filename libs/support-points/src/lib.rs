//! # Support Points
//!
//! Detects where a printed object needs support material. Surface crossings
//! of vertical sampling rays are linked into a directed graph, and a greedy
//! sweep over that graph picks the anchors that hold every floating point
//! within reach.
//!
//! ## Architecture
//!
//! ```text
//! IntersectionSource (per-column sorted crossings)
//!       ↓
//! ColumnGrid (validated, row-major)
//!       ↓
//! IntersectionGraphBuilder (vertical + cross edges)
//!       ↓
//! CoverageConstrainedSelector (bounded Dijkstra sweep)
//!       ↓
//! Vec<DVec3> anchors
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::SupportConfig;
//! use glam::DVec3;
//! use support_points::{ColumnGrid, SupportPointFinder};
//!
//! let grid = ColumnGrid::new(1, 1, vec![vec![
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(0.0, 0.0, 1.0),
//! ]])?;
//!
//! let config = SupportConfig::default();
//! let result = SupportPointFinder::new(&config).run(&grid)?;
//! assert_eq!(result.anchors, vec![DVec3::ZERO]);
//! # Ok::<(), support_points::SupportError>(())
//! ```

pub mod error;
pub mod finder;
pub mod graph;
pub mod grid;
pub mod overhang;
pub mod selector;

pub use error::{SupportError, SupportResult};
pub use finder::{SupportPointFinder, SupportPoints};
pub use graph::{Edge, EdgeKind, IntersectionGraph, IntersectionGraphBuilder, Vertex, VertexId};
pub use grid::{ColumnGrid, IntersectionSource};
pub use selector::CoverageConstrainedSelector;
