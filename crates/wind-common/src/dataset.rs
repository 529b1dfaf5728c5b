//! Loading of U/V wind component documents.
//!
//! The input is a JSON array in the layout produced by grib2json-style
//! exporters: one object per component, each carrying a flat `data` array
//! and optionally a `header` describing the grid and parameter. Only the
//! first two elements are read, positionally: `[0]` is U, `[1]` is V.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Number, Value};
use tracing::debug;

use crate::error::{WindError, WindResult};
use crate::grid::GridSpec;
use crate::sample::{samples, WindSample};

/// Optional per-component metadata.
///
/// Every field is optional; a header that fails to parse is treated as
/// absent since it is only used for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentHeader {
    /// e.g. "U-component_of_wind"
    pub parameter_number_name: Option<String>,
    /// e.g. "m.s-1"
    pub parameter_unit: Option<String>,
    /// Model reference time (ISO 8601)
    pub ref_time: Option<String>,
    /// Forecast hour offset from `ref_time`
    pub forecast_time: Option<i64>,
    pub nx: Option<u32>,
    pub ny: Option<u32>,
    pub la1: Option<f64>,
    pub lo1: Option<f64>,
    pub dx: Option<f64>,
    pub dy: Option<f64>,
}

/// One wind component: its samples in grid order plus optional metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct WindComponent {
    pub header: Option<ComponentHeader>,
    /// Values exactly as parsed, so they print back unchanged.
    pub data: Vec<Number>,
}

impl WindComponent {
    fn from_value(index: usize, value: Value) -> WindResult<Self> {
        let Value::Object(mut fields) = value else {
            return Err(WindError::MissingData { index });
        };

        let data = fields
            .remove("data")
            .ok_or(WindError::MissingData { index })?;
        let data: Vec<Number> = serde_json::from_value(data)
            .map_err(|source| WindError::InvalidData { index, source })?;

        let header = fields
            .remove("header")
            .and_then(|h| serde_json::from_value(h).ok());

        Ok(Self { header, data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Parameter name from the header, if any.
    pub fn parameter_name(&self) -> Option<&str> {
        self.header
            .as_ref()
            .and_then(|h| h.parameter_number_name.as_deref())
    }
}

/// The U and V components of a wind field.
#[derive(Debug, Clone, PartialEq)]
pub struct WindDataset {
    pub u: WindComponent,
    pub v: WindComponent,
}

impl WindDataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> WindResult<Self> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_value(document)
    }

    /// Read the whole reader into memory, then parse.
    pub fn from_reader<R: Read>(mut reader: R) -> WindResult<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Load a dataset from a file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> WindResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = json.len(), "Read wind component document");
        Self::from_json(&json)
    }

    /// Extract the first two elements of an already parsed document.
    pub fn from_value(document: Value) -> WindResult<Self> {
        let Value::Array(mut elements) = document else {
            return Err(WindError::NotAnArray);
        };

        let found = elements.len();
        if found < 2 {
            return Err(WindError::MissingComponent { index: found, found });
        }

        elements.truncate(2);
        let mut elements = elements.into_iter();
        let (Some(u), Some(v)) = (elements.next(), elements.next()) else {
            return Err(WindError::MissingComponent { index: 0, found });
        };

        Ok(Self {
            u: WindComponent::from_value(0, u)?,
            v: WindComponent::from_value(1, v)?,
        })
    }

    /// Number of rows a transform produces: the shorter component wins.
    pub fn row_count(&self) -> usize {
        self.u.len().min(self.v.len())
    }

    /// Paired samples annotated with positions on `grid`.
    pub fn samples<'a>(&'a self, grid: &GridSpec) -> impl Iterator<Item = WindSample<'a>> + 'a {
        samples(&self.u.data, &self.v.data, grid)
    }
}
