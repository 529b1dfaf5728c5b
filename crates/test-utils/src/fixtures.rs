//! Common JSON documents for wind transform tests.

/// Two components of two samples each.
pub const MINIMAL_PAIR: &str = r#"[{"data": [1.0, 2.0]}, {"data": [3.0, 4.0]}]"#;

/// Expected default-separator output for [`MINIMAL_PAIR`].
pub const MINIMAL_PAIR_CSV: &str = "U,V,la,lo\n1.0,3.0,90,0\n2.0,4.0,90,1\n";

/// U has three samples, V has two.
pub const MISMATCHED_LENGTHS: &str = r#"[{"data": [1.0, 2.0, 3.0]}, {"data": [4.0, 5.0]}]"#;

/// Only the U component is present.
pub const SINGLE_COMPONENT: &str = r#"[{"data": [1.0, 2.0]}]"#;

/// Second component lacks a `data` key.
pub const MISSING_DATA: &str = r#"[{"data": [1.0]}, {"values": [2.0]}]"#;

/// Top-level object instead of an array.
pub const NOT_AN_ARRAY: &str = r#"{"u": {"data": [1.0]}, "v": {"data": [2.0]}}"#;

/// Truncated document.
pub const INVALID_JSON: &str = r#"[{"data": [1.0, 2.0]}, {"data": [3.0"#;
