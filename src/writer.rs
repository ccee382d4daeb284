use std::io::Write;

use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `number of inversions: <count>`
    #[default]
    Text,
    /// A single JSON object per report
    Json,
}

/// Writes one line per [`Report`] and flushes after each.
pub struct ReportWriter<W> {
    stream: W,
    format: ReportFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(stream: W, format: ReportFormat) -> Self {
        Self { stream, format }
    }

    pub fn send(&mut self, report: &Report) -> anyhow::Result<()> {
        match self.format {
            ReportFormat::Text => {
                writeln!(self.stream, "number of inversions: {}", report.inversions)?;
            }
            ReportFormat::Json => {
                let serialized = serde_json::to_vec(report)?;
                self.stream.write_all(&serialized)?;
                self.stream.write_all(b"\n")?;
            }
        }
        self.stream.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.stream
    }
}
