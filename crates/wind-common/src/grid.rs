//! Grid specification and implicit position stream for global wind fields.
//!
//! Wind components arrive as flat arrays with no coordinates attached. The
//! position of each sample is implied by its index: rows run west to east
//! starting at 0°E, and rows are stacked north to south starting at 90°N.

use std::iter::FusedIterator;

use crate::dataset::ComponentHeader;

/// Specification of a regular 1-degree lat/lon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of points in the longitude direction (row width)
    pub nx: u32,
    /// Number of points in the latitude direction
    pub ny: u32,
    /// Latitude of the first row
    pub first_lat: i32,
    /// Longitude of the first column
    pub first_lon: u32,
}

impl GridSpec {
    /// Create a new grid specification.
    pub fn new(nx: u32, ny: u32, first_lat: i32, first_lon: u32) -> Self {
        Self {
            nx,
            ny,
            first_lat,
            first_lon,
        }
    }

    /// GFS 1.0° global grid: 360 x 181, starting at 90°N, 0°E.
    pub fn global_1deg() -> Self {
        Self::new(360, 181, 90, 0)
    }

    /// Lazy, unbounded stream of positions in data order.
    pub fn positions(&self) -> GridPositions {
        GridPositions {
            nx: self.nx,
            first_lon: self.first_lon,
            lat: self.first_lat,
            lon: self.first_lon,
        }
    }

    /// Position of the sample at `index`, agreeing with [`GridSpec::positions`].
    ///
    /// Indices past the last row keep stepping south; latitude is not clamped.
    pub fn position_of(&self, index: usize) -> GridPosition {
        let nx = self.nx.max(1) as usize;
        GridPosition {
            lat: self.first_lat - (index / nx) as i32,
            lon: self.first_lon + (index % nx) as u32,
        }
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.nx as usize * self.ny as usize
    }

    /// Check if grid is empty.
    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0
    }

    /// Whether a component header agrees with this grid.
    ///
    /// Fields absent from the header are not compared.
    pub fn describes(&self, header: &ComponentHeader) -> bool {
        let matches_u32 = |field: Option<u32>, expected: u32| field.map_or(true, |v| v == expected);
        let matches_f64 =
            |field: Option<f64>, expected: f64| field.map_or(true, |v| (v - expected).abs() < 1e-6);

        matches_u32(header.nx, self.nx)
            && matches_u32(header.ny, self.ny)
            && matches_f64(header.la1, self.first_lat as f64)
            && matches_f64(header.lo1, self.first_lon as f64)
            && matches_f64(header.dx, 1.0)
            && matches_f64(header.dy, 1.0)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::global_1deg()
    }
}

/// A point on the grid, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub lat: i32,
    pub lon: u32,
}

/// Infinite iterator over grid positions.
///
/// Longitude advances every step and wraps after `nx` steps, at which point
/// latitude drops by one. Latitude has no floor.
#[derive(Debug, Clone)]
pub struct GridPositions {
    nx: u32,
    first_lon: u32,
    lat: i32,
    lon: u32,
}

impl Iterator for GridPositions {
    type Item = GridPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let position = GridPosition {
            lat: self.lat,
            lon: self.lon,
        };

        self.lon += 1;
        if self.lon - self.first_lon >= self.nx {
            self.lon = self.first_lon;
            self.lat -= 1;
        }

        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for GridPositions {}
