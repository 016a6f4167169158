use crate::domain::amortization::{MonthlyRow, PeriodSnapshot};
use crate::domain::money::Money;
use crate::domain::ports::{LoanReport, ReportWriter, ScenarioSummary};
use crate::error::{AmortizationError, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct YearRecord {
    year: u32,
    remaining_balance: Money,
    total_interest_paid: Money,
    total_principal_paid: Money,
}

impl TryFrom<&PeriodSnapshot> for YearRecord {
    type Error = AmortizationError;

    fn try_from(snapshot: &PeriodSnapshot) -> Result<Self> {
        Ok(Self {
            year: snapshot.year,
            remaining_balance: snapshot.remaining_balance.try_into()?,
            total_interest_paid: snapshot.total_interest_paid.try_into()?,
            total_principal_paid: snapshot.total_principal_paid.try_into()?,
        })
    }
}

#[derive(Serialize)]
struct MonthRecord {
    month: u32,
    year: u32,
    payment: Money,
    principal_payment: Money,
    interest_payment: Money,
    total_interest_paid: Money,
    total_principal_paid: Money,
    balance: Money,
}

impl TryFrom<&MonthlyRow> for MonthRecord {
    type Error = AmortizationError;

    fn try_from(row: &MonthlyRow) -> Result<Self> {
        Ok(Self {
            month: row.month,
            year: row.year,
            payment: row.payment.try_into()?,
            principal_payment: row.principal_payment.try_into()?,
            interest_payment: row.interest_payment.try_into()?,
            total_interest_paid: row.total_interest_paid.try_into()?,
            total_principal_paid: row.total_principal_paid.try_into()?,
            balance: row.balance.try_into()?,
        })
    }
}

#[derive(Serialize)]
struct SummaryRecord {
    principal: Money,
    annual_rate_percent: f64,
    term_years: u32,
    monthly_payment: Money,
    total_payment: Money,
    total_interest: Money,
}

impl TryFrom<&ScenarioSummary> for SummaryRecord {
    type Error = AmortizationError;

    fn try_from(scenario: &ScenarioSummary) -> Result<Self> {
        Ok(Self {
            principal: scenario.inputs.principal().try_into()?,
            annual_rate_percent: scenario.inputs.annual_rate_percent(),
            term_years: scenario.inputs.term_years(),
            monthly_payment: scenario.summary.monthly_payment.try_into()?,
            total_payment: scenario.summary.total_payment.try_into()?,
            total_interest: scenario.summary.total_interest.try_into()?,
        })
    }
}

/// Writes schedules and batch summaries as CSV, money rounded to cents.
///
/// A single report becomes one table: the monthly rows when they were requested,
/// the yearly schedule otherwise.
pub struct CsvReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| AmortizationError::IoError(e.into_error()))
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_report(&mut self, report: &LoanReport) -> Result<()> {
        match &report.monthly_schedule {
            Some(rows) => {
                for row in rows {
                    self.writer.serialize(MonthRecord::try_from(row)?)?;
                }
            }
            None => {
                for snapshot in &report.amortization.schedule {
                    self.writer.serialize(YearRecord::try_from(snapshot)?)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_summaries(&mut self, scenarios: &[ScenarioSummary]) -> Result<()> {
        for scenario in scenarios {
            self.writer.serialize(SummaryRecord::try_from(scenario)?)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
