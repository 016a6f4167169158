use crate::error::{AmortizationError, Result};
use serde::{Deserialize, Serialize};

/// Longest term accepted, in years. Keeps a simulation at or below 360 months.
pub const MAX_TERM_YEARS: u32 = 30;

/// Largest principal accepted. Totals at the highest rate stay well inside
/// the range every output format can represent.
pub const MAX_PRINCIPAL: f64 = 1e15;

/// Highest annual rate accepted, in percentage points.
pub const MAX_ANNUAL_RATE_PERCENT: f64 = 100.0;

/// The three scalars a schedule is computed from.
///
/// Construction goes through [`LoanInputs::new`], so any value of this type is
/// already inside the engine's domain: a finite non-negative principal, a rate
/// between 0 and 100 percent, and a whole-year term of at least one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInputs {
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
}

impl LoanInputs {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: u32) -> Result<Self> {
        if !principal.is_finite() || !(0.0..=MAX_PRINCIPAL).contains(&principal) {
            return Err(AmortizationError::invalid(format!(
                "principal must be between 0 and {MAX_PRINCIPAL} (got {principal})"
            )));
        }
        if !annual_rate_percent.is_finite()
            || !(0.0..=MAX_ANNUAL_RATE_PERCENT).contains(&annual_rate_percent)
        {
            return Err(AmortizationError::invalid(format!(
                "annual rate must be between 0 and {MAX_ANNUAL_RATE_PERCENT} percent (got {annual_rate_percent})"
            )));
        }
        if !(1..=MAX_TERM_YEARS).contains(&term_years) {
            return Err(AmortizationError::invalid(format!(
                "term must be between 1 and {MAX_TERM_YEARS} years (got {term_years})"
            )));
        }

        Ok(Self {
            principal,
            annual_rate_percent,
            term_years,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    /// Periodic rate applied each month, as a fraction.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    pub fn total_months(&self) -> u32 {
        self.term_years * 12
    }
}

impl Default for LoanInputs {
    /// 250,000 over 30 years at 4.5%.
    fn default() -> Self {
        Self {
            principal: 250_000.0,
            annual_rate_percent: 4.5,
            term_years: 30,
        }
    }
}

/// One scenario row as it appears in a batch file, before validation.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct RawLoanInputs {
    pub principal: f64,
    pub rate: f64,
    pub term: u32,
}

impl TryFrom<RawLoanInputs> for LoanInputs {
    type Error = AmortizationError;

    fn try_from(raw: RawLoanInputs) -> Result<Self> {
        Self::new(raw.principal, raw.rate, raw.term)
    }
}
