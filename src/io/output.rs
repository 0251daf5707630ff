use crate::errors::{CalculationError, Result};
use crate::report::CalculationReport;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub trait OutputWriter {
    fn write_report(&mut self, report: &CalculationReport) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)
            .and_then(|_| self.writer.flush())
            .map_err(|e| CalculationError::FileSystem {
                message: "Failed to write report".to_string(),
                path: None,
                source: Some(e),
            })
    }
}

/// Write `report` as JSON to `path`, or to stdout when no path is given.
pub fn write_report(report: &CalculationReport, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| CalculationError::file_system("Failed to create report", path, e))?;
            JsonWriter::new(BufWriter::new(file)).write_report(report)
        }
        None => JsonWriter::new(io::stdout().lock()).write_report(report),
    }
}
