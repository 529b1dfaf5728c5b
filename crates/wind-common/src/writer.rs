//! Delimited text output for wind samples.
//!
//! Values are written unquoted; they are numbers and never contain the
//! separator. See [`NumberText`] for how each value is rendered.

use std::io::{BufWriter, Write};

use crate::error::WindResult;
use crate::number::NumberText;
use crate::sample::WindSample;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Column names, in output order.
pub const HEADER_FIELDS: [&str; 4] = ["U", "V", "la", "lo"];

/// Buffered writer producing one line per sample.
pub struct DelimitedWriter<W: Write> {
    inner: BufWriter<W>,
    separator: String,
    rows: usize,
}

impl<W: Write> DelimitedWriter<W> {
    pub fn new(inner: W, separator: impl Into<String>) -> Self {
        Self {
            inner: BufWriter::new(inner),
            separator: separator.into(),
            rows: 0,
        }
    }

    /// Writer using [`DEFAULT_SEPARATOR`].
    pub fn with_default_separator(inner: W) -> Self {
        Self::new(inner, DEFAULT_SEPARATOR)
    }

    /// Data rows written so far (the header is not counted).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Write `U<sep>V<sep>la<sep>lo`.
    pub fn write_header(&mut self) -> WindResult<()> {
        writeln!(self.inner, "{}", HEADER_FIELDS.join(self.separator.as_str()))?;
        Ok(())
    }

    /// Write `<u><sep><v><sep><lat><sep><lon>`.
    pub fn write_sample(&mut self, sample: &WindSample<'_>) -> WindResult<()> {
        let sep = &self.separator;
        writeln!(
            self.inner,
            "{}{sep}{}{sep}{}{sep}{}",
            NumberText(sample.u),
            NumberText(sample.v),
            sample.lat,
            sample.lon
        )?;
        self.rows += 1;
        Ok(())
    }

    /// Write every sample from an iterator, returning how many were written.
    pub fn write_samples<'a, I>(&mut self, samples: I) -> WindResult<usize>
    where
        I: IntoIterator<Item = WindSample<'a>>,
    {
        let before = self.rows;
        for sample in samples {
            self.write_sample(&sample)?;
        }
        Ok(self.rows - before)
    }

    /// Flush buffered output and hand back the underlying writer.
    pub fn finish(self) -> WindResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}
