use crate::domain::money::Money;
use crate::domain::ports::{LoanReport, ReportWriter, ScenarioSummary};
use crate::error::Result;
use std::io::Write;

const DISCLAIMER: &str =
    "This is an estimate. Actual loan terms may vary based on lender, taxes, and other factors.";

const CHART_WIDTH: usize = 40;

/// Human-readable report: inputs, the three headline figures, and the schedule table.
pub struct TextReportWriter<W: Write> {
    sink: W,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

fn money(value: f64) -> Result<String> {
    Ok(Money::try_from(value)?.to_string())
}

fn years(term: u32) -> String {
    if term == 1 {
        "1 year".to_string()
    } else {
        format!("{term} years")
    }
}

impl<W: Write> ReportWriter for TextReportWriter<W> {
    fn write_report(&mut self, report: &LoanReport) -> Result<()> {
        let inputs = &report.inputs;
        let summary = &report.amortization.summary;
        let out = &mut self.sink;

        writeln!(out, "{:<18}{}", "Loan amount", money(inputs.principal())?)?;
        writeln!(out, "{:<18}{:.2}%", "Interest rate", inputs.annual_rate_percent())?;
        writeln!(out, "{:<18}{}", "Loan term", years(inputs.term_years()))?;
        writeln!(out)?;
        writeln!(out, "{:<18}{}", "Monthly payment", money(summary.monthly_payment)?)?;
        writeln!(out, "{:<18}{}", "Total interest", money(summary.total_interest)?)?;
        writeln!(out, "{:<18}{}", "Total payment", money(summary.total_payment)?)?;
        writeln!(out)?;

        writeln!(
            out,
            "{:>4}  {:>18}  {:>16}  {:>16}",
            "Year", "Remaining balance", "Interest paid", "Principal paid"
        )?;
        for snapshot in &report.amortization.schedule {
            writeln!(
                out,
                "{:>4}  {:>18}  {:>16}  {:>16}",
                snapshot.year,
                money(snapshot.remaining_balance)?,
                money(snapshot.total_interest_paid)?,
                money(snapshot.total_principal_paid)?
            )?;
        }

        if inputs.principal() > 0.0 {
            writeln!(out)?;
            writeln!(out, "Remaining balance by year")?;
            for snapshot in &report.amortization.schedule {
                let share = snapshot.remaining_balance / inputs.principal();
                let bar = ((share * CHART_WIDTH as f64).round() as usize).min(CHART_WIDTH);
                writeln!(
                    out,
                    "{:>4}  {:<width$}  {}",
                    snapshot.year,
                    "#".repeat(bar),
                    Money::try_from(snapshot.remaining_balance)?.compact(),
                    width = CHART_WIDTH
                )?;
            }
        }

        if let Some(rows) = &report.monthly_schedule {
            writeln!(out)?;
            writeln!(
                out,
                "{:>5}  {:>4}  {:>12}  {:>12}  {:>12}  {:>16}",
                "Month", "Year", "Payment", "Principal", "Interest", "Balance"
            )?;
            for row in rows {
                writeln!(
                    out,
                    "{:>5}  {:>4}  {:>12}  {:>12}  {:>12}  {:>16}",
                    row.month,
                    row.year,
                    money(row.payment)?,
                    money(row.principal_payment)?,
                    money(row.interest_payment)?,
                    money(row.balance)?
                )?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{DISCLAIMER}")?;
        out.flush()?;
        Ok(())
    }

    fn write_summaries(&mut self, scenarios: &[ScenarioSummary]) -> Result<()> {
        let out = &mut self.sink;

        writeln!(
            out,
            "{:>16}  {:>7}  {:>8}  {:>16}  {:>16}  {:>16}",
            "Principal", "Rate", "Term", "Monthly payment", "Total interest", "Total payment"
        )?;
        for scenario in scenarios {
            writeln!(
                out,
                "{:>16}  {:>6.2}%  {:>8}  {:>16}  {:>16}  {:>16}",
                money(scenario.inputs.principal())?,
                scenario.inputs.annual_rate_percent(),
                years(scenario.inputs.term_years()),
                money(scenario.summary.monthly_payment)?,
                money(scenario.summary.total_interest)?,
                money(scenario.summary.total_payment)?
            )?;
        }
        out.flush()?;
        Ok(())
    }
}
