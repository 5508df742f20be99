//! # Column Grid
//!
//! Per-column surface crossings of vertical sampling rays.
//!
//! Each column holds its crossings sorted ascending by z. For a closed
//! surface they come in entry/exit pairs: record `2k` is where the ray enters
//! material and record `2k + 1` where it leaves again.

use glam::DVec3;

use crate::error::{SupportError, SupportResult};

/// Offsets of the 8 grid neighbours of a column, centre excluded.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A data source of per-column sorted intersections.
///
/// Implemented by samplers that cast rays parallel to the build axis through
/// a model. Every column must be sorted ascending by z and should hold an
/// even number of points.
pub trait IntersectionSource {
    /// Returns the grid dimensions as `(rows, cols)`.
    fn grid_size(&self) -> (usize, usize);

    /// Returns the crossings of column `(row, col)`, ascending by z.
    fn sample_column(&self, row: usize, col: usize) -> Vec<DVec3>;
}

/// Row-major grid of validated intersection columns.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use support_points::ColumnGrid;
///
/// let grid = ColumnGrid::new(1, 2, vec![
///     vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 1.0)],
///     vec![],
/// ]).unwrap();
/// assert_eq!(grid.intersection_count(), 2);
/// assert!(grid.column(0, 1).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnGrid {
    rows: usize,
    cols: usize,
    columns: Vec<Vec<DVec3>>,
}

impl ColumnGrid {
    /// Creates a grid from row-major columns.
    ///
    /// # Errors
    ///
    /// Fails when the column count does not match `rows * cols`, when a
    /// crossing has a NaN or infinite coordinate, when a column is not
    /// sorted ascending by z, or when the grid holds more
    /// intersections than `u32` vertex ids can address.
    pub fn new(rows: usize, cols: usize, columns: Vec<Vec<DVec3>>) -> SupportResult<Self> {
        let expected = rows * cols;
        if columns.len() != expected {
            return Err(SupportError::ShapeMismatch {
                rows,
                cols,
                expected,
                actual: columns.len(),
            });
        }

        for (i, column) in columns.iter().enumerate() {
            if let Some(index) = column.iter().position(|p| !p.is_finite()) {
                return Err(SupportError::NonFiniteIntersection {
                    row: i / cols,
                    col: i % cols,
                    index,
                });
            }
            if let Some(index) = column
                .windows(2)
                .position(|pair| pair[0].z > pair[1].z)
            {
                return Err(SupportError::UnsortedColumn {
                    row: i / cols,
                    col: i % cols,
                    index: index + 1,
                });
            }
        }

        let count: usize = columns.iter().map(Vec::len).sum();
        let max = u32::MAX as usize;
        if count > max {
            return Err(SupportError::TooManyIntersections { count, max });
        }

        Ok(Self {
            rows,
            cols,
            columns,
        })
    }

    /// Collects every column of a source into a validated grid.
    ///
    /// # Errors
    ///
    /// See [`ColumnGrid::new`].
    pub fn from_source<S: IntersectionSource + ?Sized>(source: &S) -> SupportResult<Self> {
        let (rows, cols) = source.grid_size();
        let mut columns = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                columns.push(source.sample_column(row, col));
            }
        }
        Self::new(rows, cols, columns)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns per row.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the crossings of column `(row, col)`.
    #[inline]
    pub fn column(&self, row: usize, col: usize) -> &[DVec3] {
        &self.columns[self.column_index(row, col)]
    }

    /// Row-major index of column `(row, col)`.
    #[inline]
    pub fn column_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Iterates over all columns in row-major order.
    pub fn columns(&self) -> impl Iterator<Item = (usize, usize, &[DVec3])> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(move |(i, column)| (i / self.cols, i % self.cols, column.as_slice()))
    }

    /// Total number of intersections over all columns.
    pub fn intersection_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// In-bounds grid neighbours of `(row, col)`, centre excluded.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.rows && c < self.cols).then_some((r, c))
        })
    }
}

impl IntersectionSource for ColumnGrid {
    fn grid_size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn sample_column(&self, row: usize, col: usize) -> Vec<DVec3> {
        self.column(row, col).to_vec()
    }
}
