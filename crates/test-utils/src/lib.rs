//! Shared test utilities for the wind-transform workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Test data path helpers
//! - A skip macro for the optional real GFS sample
//! - Synthetic U/V dataset generators
//! - JSON fixtures for malformed and edge-case documents
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{require_test_file, fixtures};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use generators::*;
pub use paths::*;

/// Macro to skip a test if the required file is not found.
///
/// The real GFS wind sample is large and not checked in; tests that use it
/// return early when it is absent.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_test_file;
///
/// #[test]
/// fn test_real_gfs_wind() {
///     let path = require_test_file!("current-wind-surface-level-gfs-1.0.json");
///     // Test code using path...
/// }
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: Test file '{}' not found. Download test data or set TEST_DATA_DIR.",
                    $name
                );
                return;
            }
        }
    }};
}
