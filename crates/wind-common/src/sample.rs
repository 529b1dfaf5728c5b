//! Pairing of U/V values with their implied grid positions.

use serde_json::Number;

use crate::grid::{GridPosition, GridSpec};

/// One row of output: a wind vector at a grid point.
///
/// Borrowed from the loaded components and dropped as soon as it is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample<'a> {
    pub u: &'a Number,
    pub v: &'a Number,
    pub lat: i32,
    pub lon: u32,
}

impl WindSample<'_> {
    pub fn position(&self) -> GridPosition {
        GridPosition {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Zip U, V and the grid position stream.
///
/// Stops at the end of the shorter component.
pub fn samples<'a>(
    u: &'a [Number],
    v: &'a [Number],
    grid: &GridSpec,
) -> impl Iterator<Item = WindSample<'a>> + 'a {
    u.iter()
        .zip(v.iter())
        .zip(grid.positions())
        .map(|((u, v), position)| WindSample {
            u,
            v,
            lat: position.lat,
            lon: position.lon,
        })
}
