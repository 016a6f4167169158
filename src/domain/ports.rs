use super::amortization::{Amortization, MonthlyRow, PaymentSummary};
use super::loan::LoanInputs;
use crate::error::Result;
use serde::Serialize;

/// Everything rendered for a single loan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanReport {
    #[serde(skip)]
    pub inputs: LoanInputs,
    #[serde(flatten)]
    pub amortization: Amortization,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_schedule: Option<Vec<MonthlyRow>>,
}

/// One computed row of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSummary {
    #[serde(flatten)]
    pub inputs: LoanInputs,
    #[serde(flatten)]
    pub summary: PaymentSummary,
}

/// Output port: a presentation format the engine's results can be written to.
pub trait ReportWriter {
    fn write_report(&mut self, report: &LoanReport) -> Result<()>;
    fn write_summaries(&mut self, scenarios: &[ScenarioSummary]) -> Result<()>;
}

pub type ReportWriterBox<'a> = Box<dyn ReportWriter + 'a>;
