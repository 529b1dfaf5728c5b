//! Runtime configuration for a single transform run.

use std::path::PathBuf;

use wind_common::{TransformOptions, DEFAULT_SEPARATOR};

/// Input used by the default run.
pub const DEFAULT_INPUT: &str = "./data/current-wind-surface-level-gfs-1.0.json";

/// Output written by the default run.
pub const DEFAULT_OUTPUT: &str = "./data/current-wind.csv";

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: TransformOptions,
}

impl TransformConfig {
    pub fn new(input: PathBuf, output: PathBuf, separator: String) -> Self {
        Self {
            input,
            output,
            options: TransformOptions::with_separator(separator),
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_INPUT),
            PathBuf::from(DEFAULT_OUTPUT),
            DEFAULT_SEPARATOR.to_string(),
        )
    }
}

/// Parse a `--sep` value.
///
/// `\t` and `tab` mean a tab character. Empty separators and separators
/// containing line breaks are rejected since they would corrupt the rows.
pub fn parse_separator(raw: &str) -> Result<String, String> {
    let separator = match raw {
        "\\t" | "tab" => "\t".to_string(),
        other => other.to_string(),
    };

    if separator.is_empty() {
        return Err("separator must not be empty".to_string());
    }
    if separator.contains(['\n', '\r']) {
        return Err("separator must not contain line breaks".to_string());
    }

    Ok(separator)
}
