use crate::domain::ports::{LoanReport, ReportWriter, ScenarioSummary};
use crate::error::Result;
use std::io::Write;

/// Emits raw engine numbers as JSON, one document per call.
pub struct JsonReportWriter<W: Write> {
    sink: W,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_report(&mut self, report: &LoanReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.sink, report)?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }

    fn write_summaries(&mut self, scenarios: &[ScenarioSummary]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.sink, scenarios)?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }
}
