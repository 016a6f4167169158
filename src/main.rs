use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use mortgage_calc::application::engine::{compute_amortization, monthly_schedule, payment_summary};
use mortgage_calc::domain::loan::LoanInputs;
use mortgage_calc::domain::ports::{LoanReport, ReportWriter, ReportWriterBox, ScenarioSummary};
use mortgage_calc::error::AmortizationError;
use mortgage_calc::interfaces::csv::report_writer::CsvReportWriter;
use mortgage_calc::interfaces::csv::scenario_reader::ScenarioReader;
use mortgage_calc::interfaces::input::sanitize_amount;
use mortgage_calc::interfaces::json::JsonReportWriter;
use mortgage_calc::interfaces::text::TextReportWriter;
use std::convert::Infallible;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Loan amount. Currency symbols and separators are ignored; unreadable text counts as 0.
    #[arg(
        long,
        default_value = "250000",
        value_parser = parse_amount,
        conflicts_with = "scenarios"
    )]
    principal: f64,

    /// Annual interest rate, in percent
    #[arg(
        long,
        default_value_t = 4.5,
        allow_negative_numbers = true,
        conflicts_with = "scenarios"
    )]
    rate: f64,

    /// Loan term, in whole years
    #[arg(long, default_value_t = 30, conflicts_with = "scenarios")]
    term: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Include the month-by-month table
    #[arg(long, conflicts_with = "scenarios")]
    monthly: bool,

    /// CSV file of `principal,rate,term` rows to summarize instead of a single loan
    #[arg(long)]
    scenarios: Option<PathBuf>,
}

fn parse_amount(raw: &str) -> std::result::Result<f64, Infallible> {
    Ok(sanitize_amount(raw))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut writer: ReportWriterBox = match cli.format {
        Format::Text => Box::new(TextReportWriter::new(stdout.lock())),
        Format::Csv => Box::new(CsvReportWriter::new(stdout.lock())),
        Format::Json => Box::new(JsonReportWriter::new(stdout.lock())),
    };

    match &cli.scenarios {
        Some(path) => summarize_scenarios(path, writer.as_mut()),
        None => report_single(&cli, writer.as_mut()),
    }
}

fn report_single(cli: &Cli, writer: &mut dyn ReportWriter) -> Result<()> {
    let inputs = LoanInputs::new(cli.principal, cli.rate, cli.term).into_diagnostic()?;
    info!(
        principal = inputs.principal(),
        annual_rate_percent = inputs.annual_rate_percent(),
        term_years = inputs.term_years(),
        "computing amortization"
    );

    let report = LoanReport {
        inputs,
        amortization: compute_amortization(&inputs),
        monthly_schedule: cli.monthly.then(|| monthly_schedule(&inputs)),
    };
    writer.write_report(&report).into_diagnostic()
}

fn summarize_scenarios(path: &Path, writer: &mut dyn ReportWriter) -> Result<()> {
    let file = File::open(path).into_diagnostic()?;

    let mut summaries = Vec::new();
    for scenario in ScenarioReader::new(file).scenarios() {
        match scenario {
            Ok(inputs) => summaries.push(ScenarioSummary {
                inputs,
                summary: payment_summary(&inputs),
            }),
            Err(e @ AmortizationError::InvalidInput(_)) => {
                warn!(error = %e, "Rejected scenario");
            }
            Err(e) => {
                warn!(error = %e, "Error reading scenario");
            }
        }
    }

    info!(count = summaries.len(), "summarized scenarios");
    writer.write_summaries(&summaries).into_diagnostic()
}
