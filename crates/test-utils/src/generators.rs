//! Test data generators for synthetic wind components.
//!
//! Values are chosen to be exactly representable so expected output lines
//! can be written down literally.

use serde_json::{json, Value};

/// Eastward component values: `i + 0.5`.
///
/// # Example
///
/// ```
/// use test_utils::create_u_values;
///
/// assert_eq!(create_u_values(3), vec![0.5, 1.5, 2.5]);
/// ```
pub fn create_u_values(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 + 0.5).collect()
}

/// Northward component values: `-(i + 0.25)`.
///
/// # Example
///
/// ```
/// use test_utils::create_v_values;
///
/// assert_eq!(create_v_values(2), vec![-0.25, -1.25]);
/// ```
pub fn create_v_values(len: usize) -> Vec<f64> {
    (0..len).map(|i| -(i as f64 + 0.25)).collect()
}

/// GFS-style component header for the 1-degree global grid.
pub fn gfs_header(parameter_number: u32, parameter_name: &str) -> Value {
    json!({
        "discipline": 0,
        "parameterCategory": 2,
        "parameterNumber": parameter_number,
        "parameterNumberName": parameter_name,
        "parameterUnit": "m.s-1",
        "refTime": "2016-11-20T00:00:00.000Z",
        "forecastTime": 0,
        "surface1TypeName": "Specified height level above ground",
        "nx": 360,
        "ny": 181,
        "lo1": 0.0,
        "la1": 90.0,
        "lo2": 359.0,
        "la2": -90.0,
        "dx": 1.0,
        "dy": 1.0
    })
}

/// A headerless U/V document with the given component lengths.
pub fn create_wind_dataset_json(u_len: usize, v_len: usize) -> String {
    json!([
        { "data": create_u_values(u_len) },
        { "data": create_v_values(v_len) },
    ])
    .to_string()
}

/// A document shaped like the GFS surface wind export, with headers.
pub fn create_gfs_wind_json(len: usize) -> String {
    json!([
        { "header": gfs_header(2, "U-component_of_wind"), "data": create_u_values(len) },
        { "header": gfs_header(3, "V-component_of_wind"), "data": create_v_values(len) },
    ])
    .to_string()
}
