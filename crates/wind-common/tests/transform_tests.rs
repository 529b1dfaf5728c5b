//! End-to-end tests for the JSON to delimited text transform.

use std::fs;

use test_utils::fixtures::*;
use test_utils::{
    create_gfs_wind_json, create_wind_dataset_json, require_test_file, temp_test_dir,
    write_test_file,
};
use wind_common::{
    transform_wind_data, transform_wind_data_with, GridSpec, TransformOptions, WindError,
};

fn data_lines(csv: &str) -> Vec<&str> {
    csv.lines().skip(1).collect()
}

// ============================================================================
// Basic output
// ============================================================================

#[test]
fn test_minimal_pair_output() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", MINIMAL_PAIR);
    let output = dir.path().join("wind.csv");

    let summary = transform_wind_data(&input, &output, None).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), MINIMAL_PAIR_CSV);
}

#[test]
fn test_mismatched_lengths_use_shorter_component() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", MISMATCHED_LENGTHS);
    let output = dir.path().join("wind.csv");

    let summary = transform_wind_data(&input, &output, None).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.u_len, 3);
    assert_eq!(summary.v_len, 2);
    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv, "U,V,la,lo\n1.0,4.0,90,0\n2.0,5.0,90,1\n");
}

#[test]
fn test_empty_components_write_header_only() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", &create_wind_dataset_json(0, 5));
    let output = dir.path().join("wind.csv");

    let summary = transform_wind_data(&input, &output, None).unwrap();

    assert_eq!(summary.rows, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "U,V,la,lo\n");
}

#[test]
fn test_tab_separator_is_consistent() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", &create_wind_dataset_json(3, 2));
    let output = dir.path().join("wind.tsv");

    transform_wind_data(&input, &output, Some("\t")).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv, "U\tV\tla\tlo\n0.5\t-0.25\t90\t0\n1.5\t-1.25\t90\t1\n");
    assert!(!csv.contains(','));
}

#[test]
fn test_default_separator_matches_explicit_comma() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", MINIMAL_PAIR);
    let implicit = dir.path().join("implicit.csv");
    let explicit = dir.path().join("explicit.csv");

    transform_wind_data(&input, &implicit, None).unwrap();
    transform_wind_data(&input, &explicit, Some(",")).unwrap();

    assert_eq!(fs::read_to_string(&implicit).unwrap(), MINIMAL_PAIR_CSV);
    assert_eq!(
        fs::read_to_string(&implicit).unwrap(),
        fs::read_to_string(&explicit).unwrap()
    );
}

#[test]
fn test_near_calm_and_extreme_values() {
    let dir = temp_test_dir();
    let input = write_test_file(
        dir.path(),
        "wind.json",
        r#"[{"data": [0.00001, 1.2e-5, 1e16, -0, 123456789012345678901234]},
            {"data": [1e-7, 1E2, -0.0, 0.0001, 7]}]"#,
    );
    let output = dir.path().join("wind.csv");

    transform_wind_data(&input, &output, None).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(
        data_lines(&csv),
        vec![
            "1e-05,1e-07,90,0",
            "1.2e-05,100.0,90,1",
            "1e+16,-0.0,90,2",
            "0,0.0001,90,3",
            "123456789012345678901234,7,90,4",
        ]
    );
}

#[test]
fn test_existing_output_is_truncated() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", MINIMAL_PAIR);
    let output = write_test_file(
        dir.path(),
        "wind.csv",
        "stale content that is much longer than the new output\n".repeat(10).as_str(),
    );

    transform_wind_data(&input, &output, None).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), MINIMAL_PAIR_CSV);
}

// ============================================================================
// Grid positions
// ============================================================================

#[test]
fn test_full_global_grid_positions() {
    let grid = GridSpec::global_1deg();
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "gfs.json", &create_gfs_wind_json(grid.len()));
    let output = dir.path().join("gfs.csv");

    let summary = transform_wind_data(&input, &output, None).unwrap();
    assert_eq!(summary.rows, 65160);

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("U,V,la,lo\n"));
    let rows = data_lines(&csv);
    assert_eq!(rows.len(), 65160);

    assert_eq!(rows[0], "0.5,-0.25,90,0");
    assert_eq!(rows[359], "359.5,-359.25,90,359");
    assert_eq!(rows[360], "360.5,-360.25,89,0");
    assert_eq!(rows[719], "719.5,-719.25,89,359");
    assert_eq!(rows[65159], "65159.5,-65159.25,-90,359");

    for (i, row) in rows.iter().enumerate() {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 4);
        let lat: i32 = fields[2].parse().unwrap();
        let lon: u32 = fields[3].parse().unwrap();
        assert!(lon < 360, "row {i} has lon {lon}");
        assert_eq!(lat, 90 - (i / 360) as i32);
        assert_eq!(lon, (i % 360) as u32);
    }
}

#[test]
fn test_latitude_continues_past_south_pole() {
    let len = 361 * 181 + 1;
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "long.json", &create_wind_dataset_json(len, len));
    let output = dir.path().join("long.csv");

    transform_wind_data(&input, &output, None).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    let rows = data_lines(&csv);
    assert_eq!(rows.len(), len);
    assert_eq!(rows[65160], "65160.5,-65160.25,-91,0");
    assert_eq!(rows[65341], "65341.5,-65341.25,-91,181");
}

#[test]
fn test_custom_grid_options() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", &create_wind_dataset_json(4, 4));
    let output = dir.path().join("wind.csv");
    let options = TransformOptions {
        separator: ";".to_string(),
        grid: GridSpec::new(2, 2, 45, 10),
    };

    transform_wind_data_with(&input, &output, &options).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(
        data_lines(&csv),
        vec![
            "0.5;-0.25;45;10",
            "1.5;-1.25;45;11",
            "2.5;-2.25;44;10",
            "3.5;-3.25;44;11",
        ]
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_single_component_creates_no_output() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", SINGLE_COMPONENT);
    let output = dir.path().join("wind.csv");

    let err = transform_wind_data(&input, &output, None).unwrap_err();

    assert!(matches!(err, WindError::MissingComponent { index: 1, found: 1 }));
    assert!(!output.exists());
}

#[test]
fn test_missing_data_creates_no_output() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", MISSING_DATA);
    let output = dir.path().join("wind.csv");

    let err = transform_wind_data(&input, &output, None).unwrap_err();

    assert!(matches!(err, WindError::MissingData { index: 1 }));
    assert!(!output.exists());
}

#[test]
fn test_not_an_array_fails() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", NOT_AN_ARRAY);
    let output = dir.path().join("wind.csv");

    let err = transform_wind_data(&input, &output, None).unwrap_err();

    assert!(err.is_structure_error());
    assert!(!output.exists());
}

#[test]
fn test_invalid_json_fails() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", INVALID_JSON);
    let output = dir.path().join("wind.csv");

    let err = transform_wind_data(&input, &output, None).unwrap_err();

    assert!(matches!(err, WindError::Json(_)));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = temp_test_dir();
    let output = dir.path().join("wind.csv");

    let err = transform_wind_data(dir.path().join("absent.json"), &output, None).unwrap_err();

    match err {
        WindError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_missing_output_directory_fails() {
    let dir = temp_test_dir();
    let input = write_test_file(dir.path(), "wind.json", MINIMAL_PAIR);
    let output = dir.path().join("no-such-dir").join("wind.csv");

    let err = transform_wind_data(&input, &output, None).unwrap_err();

    assert!(matches!(err, WindError::Io(_)));
    assert!(!err.is_structure_error());
}

// ============================================================================
// Real data (optional)
// ============================================================================

#[test]
fn test_real_gfs_surface_wind() {
    let input = require_test_file!("current-wind-surface-level-gfs-1.0.json");
    let dir = temp_test_dir();
    let output = dir.path().join("current-wind.csv");

    let summary = transform_wind_data(&input, &output, None).unwrap();

    assert_eq!(summary.rows, GridSpec::global_1deg().len());
    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("U,V,la,lo\n"));
    assert!(data_lines(&csv)[0].ends_with(",90,0"));
}
