//! Grid-visualizer trace backend.
//!
//! Writes one line per tick in the `(x, y)` convention grid visualizers
//! expect (`x` = column, `y` = row), each pair followed by a comma:
//!
//! ```text
//! 0:(2,2),(3,2),
//! 1:(2,1),(3,1),
//! ```
//!
//! Write the starting configuration yourself with
//! [`write_config`](VisualizerWriter::write_config) before the run if the
//! replay tool expects a `t = 0` line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wh_core::{Cell, Tick};
use wh_sim::TickSnapshot;

use crate::writer::OutputWriter;
use crate::OutputResult;

/// Streams configurations to a visualizer trace file.
pub struct VisualizerWriter<W: Write> {
    out:      BufWriter<W>,
    finished: bool,
}

impl VisualizerWriter<File> {
    /// Create (or truncate) the trace file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: Write> VisualizerWriter<W> {
    /// Wrap any `Write` sink — handy for tests with a `Vec<u8>`.
    pub fn from_writer(inner: W) -> Self {
        Self {
            out:      BufWriter::new(inner),
            finished: false,
        }
    }

    /// Append one configuration line.
    pub fn write_config(&mut self, t: Tick, positions: &[Cell]) -> OutputResult<()> {
        let mut line = format!("{}:", t.0);
        for p in positions {
            line.push_str(&format!("({},{}),", p.col, p.row));
        }
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Flush and unwrap the inner sink (e.g. to inspect the bytes in tests).
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.out.flush()?;
        self.out
            .into_inner()
            .map_err(|e| crate::OutputError::Io(e.into_error()))
    }
}

impl<W: Write> OutputWriter for VisualizerWriter<W> {
    fn write_tick(&mut self, snapshot: &TickSnapshot) -> OutputResult<()> {
        self.write_config(snapshot.t, &snapshot.positions)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
