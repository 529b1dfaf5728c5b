//! File-to-file transform: U/V JSON components in, delimited rows out.

use std::fs::File;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::dataset::{WindComponent, WindDataset};
use crate::error::WindResult;
use crate::grid::GridSpec;
use crate::writer::{DelimitedWriter, DEFAULT_SEPARATOR};

/// Knobs for [`transform_wind_data_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Field separator for header and rows
    pub separator: String,
    /// Grid used to derive sample positions
    pub grid: GridSpec,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            grid: GridSpec::global_1deg(),
        }
    }
}

impl TransformOptions {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a completed transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSummary {
    /// Data rows written (header excluded)
    pub rows: usize,
    pub u_len: usize,
    pub v_len: usize,
}

/// Convert `input_filename` into delimited text at `output_filename`.
///
/// `sep` defaults to [`DEFAULT_SEPARATOR`]. The output file is created (or
/// truncated) only after both components have been extracted, so a
/// malformed document leaves no output behind.
pub fn transform_wind_data<P, Q>(
    input_filename: P,
    output_filename: Q,
    sep: Option<&str>,
) -> WindResult<TransformSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    transform_wind_data_with(
        input_filename,
        output_filename,
        &TransformOptions::with_separator(sep.unwrap_or(DEFAULT_SEPARATOR)),
    )
}

/// [`transform_wind_data`] with explicit options.
pub fn transform_wind_data_with<P, Q>(
    input_filename: P,
    output_filename: Q,
    options: &TransformOptions,
) -> WindResult<TransformSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input_filename.as_ref();
    let output = output_filename.as_ref();

    let dataset = WindDataset::from_path(input)?;
    log_diagnostics(&dataset, &options.grid);

    let rows = {
        let file = File::create(output)?;
        let mut writer = DelimitedWriter::new(file, options.separator.as_str());
        writer.write_header()?;
        let rows = writer.write_samples(dataset.samples(&options.grid))?;
        writer.finish()?;
        rows
    };

    let summary = TransformSummary {
        rows,
        u_len: dataset.u.len(),
        v_len: dataset.v.len(),
    };

    info!(
        input = %input.display(),
        output = %output.display(),
        rows = summary.rows,
        "Wrote wind samples"
    );

    Ok(summary)
}

/// Report anything unusual about the dataset. Never changes the output.
fn log_diagnostics(dataset: &WindDataset, grid: &GridSpec) {
    for (name, component) in [("U", &dataset.u), ("V", &dataset.v)] {
        log_component(name, component, grid);
    }

    if dataset.u.len() != dataset.v.len() {
        warn!(
            u_len = dataset.u.len(),
            v_len = dataset.v.len(),
            "Component lengths differ, truncating to the shorter one"
        );
    }

    let rows = dataset.row_count();
    if rows != grid.len() {
        warn!(
            rows,
            grid_points = grid.len(),
            last_lat = grid.position_of(rows.saturating_sub(1)).lat,
            "Sample count does not cover the grid exactly"
        );
    }
}

fn log_component(name: &str, component: &WindComponent, grid: &GridSpec) {
    let Some(header) = component.header.as_ref() else {
        debug!(component = name, len = component.len(), "Component has no header");
        return;
    };

    debug!(
        component = name,
        len = component.len(),
        parameter = header.parameter_number_name.as_deref().unwrap_or("unknown"),
        unit = header.parameter_unit.as_deref().unwrap_or("unknown"),
        ref_time = header.ref_time.as_deref().unwrap_or("unknown"),
        forecast_time = ?header.forecast_time,
        "Loaded wind component"
    );

    if !grid.describes(header) {
        warn!(
            component = name,
            nx = ?header.nx,
            ny = ?header.ny,
            dx = ?header.dx,
            dy = ?header.dy,
            "Component header describes a different grid; positions follow the configured grid"
        );
    }
}
