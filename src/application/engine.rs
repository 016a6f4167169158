use crate::domain::amortization::{Amortization, MonthlyRow, PaymentSummary, PeriodSnapshot};
use crate::domain::loan::LoanInputs;
use crate::error::Result;
use tracing::debug;

/// Validates raw scalars and computes the full amortization in one call.
pub fn compute(principal: f64, annual_rate_percent: f64, term_years: u32) -> Result<Amortization> {
    let inputs = LoanInputs::new(principal, annual_rate_percent, term_years)?;
    Ok(compute_amortization(&inputs))
}

/// Summary figures plus the yearly schedule for `inputs`.
///
/// Pure and deterministic: identical inputs always produce bit-identical output,
/// and nothing is carried over between calls.
pub fn compute_amortization(inputs: &LoanInputs) -> Amortization {
    let summary = payment_summary(inputs);
    let schedule = yearly_snapshots(MonthlySimulation::new(inputs, summary.monthly_payment));

    debug!(
        principal = inputs.principal(),
        annual_rate_percent = inputs.annual_rate_percent(),
        total_months = inputs.total_months(),
        monthly_payment = summary.monthly_payment,
        "computed amortization"
    );

    Amortization { summary, schedule }
}

pub fn payment_summary(inputs: &LoanInputs) -> PaymentSummary {
    let monthly_payment = monthly_payment(inputs);
    let total_payment = monthly_payment * f64::from(inputs.total_months());

    PaymentSummary {
        monthly_payment,
        total_payment,
        total_interest: total_payment - inputs.principal(),
    }
}

/// One snapshot per elapsed year, in chronological order.
pub fn yearly_schedule(inputs: &LoanInputs) -> Vec<PeriodSnapshot> {
    yearly_snapshots(MonthlySimulation::new(inputs, monthly_payment(inputs)))
}

/// Every month of the loan, in chronological order.
pub fn monthly_schedule(inputs: &LoanInputs) -> Vec<MonthlyRow> {
    MonthlySimulation::new(inputs, monthly_payment(inputs)).collect()
}

/// Fixed payment that fully amortizes the loan over its term.
///
/// Falls back to straight-line repayment when the periodic rate is zero, or too
/// small to move `1 + r` off 1.0 in floating point.
fn monthly_payment(inputs: &LoanInputs) -> f64 {
    let rate = inputs.monthly_rate();
    let months = inputs.total_months();
    let growth = (1.0 + rate).powi(months as i32);

    if growth == 1.0 {
        inputs.principal() / f64::from(months)
    } else {
        inputs.principal() * growth * rate / (growth - 1.0)
    }
}

fn yearly_snapshots(simulation: MonthlySimulation) -> Vec<PeriodSnapshot> {
    simulation
        .filter(|row| row.month % 12 == 0)
        .map(|row| PeriodSnapshot {
            year: row.month / 12,
            remaining_balance: row.balance,
            total_interest_paid: row.total_interest_paid,
            total_principal_paid: row.total_principal_paid,
        })
        .collect()
}

/// Month-by-month replay of a fixed-payment loan.
///
/// Both projections are built on this iterator so the yearly and monthly views
/// always agree on every running total.
///
/// Interest and principal are split from the previous balance each month; the
/// balance after month `k` is the closed-form annuity balance
/// `P * (x^n - g^k) / (x^n - 1)`, which is exactly zero at `k == n`.
struct MonthlySimulation {
    principal: f64,
    monthly_rate: f64,
    monthly_payment: f64,
    /// `(1 + r)^n`; 1.0 means the loan repays straight-line.
    growth: f64,
    total_months: u32,
    month: u32,
    balance: f64,
    total_interest_paid: f64,
    total_principal_paid: f64,
}

impl MonthlySimulation {
    fn new(inputs: &LoanInputs, monthly_payment: f64) -> Self {
        let monthly_rate = inputs.monthly_rate();
        let total_months = inputs.total_months();
        Self {
            principal: inputs.principal(),
            monthly_rate,
            monthly_payment,
            growth: (1.0 + monthly_rate).powi(total_months as i32),
            total_months,
            month: 0,
            balance: inputs.principal(),
            total_interest_paid: 0.0,
            total_principal_paid: 0.0,
        }
    }

    /// Outstanding balance once `month` payments have been made.
    fn balance_after(&self, month: u32) -> f64 {
        if self.growth == 1.0 {
            return self.principal * f64::from(self.total_months - month)
                / f64::from(self.total_months);
        }
        let paid_growth = (1.0 + self.monthly_rate).powi(month as i32);
        self.principal * (self.growth - paid_growth) / (self.growth - 1.0)
    }
}

impl Iterator for MonthlySimulation {
    type Item = MonthlyRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.month >= self.total_months {
            return None;
        }
        self.month += 1;

        let interest_payment = self.balance * self.monthly_rate;
        let principal_payment = self.monthly_payment - interest_payment;
        self.balance = self.balance_after(self.month);
        self.total_interest_paid += interest_payment;
        self.total_principal_paid += principal_payment;

        Some(MonthlyRow {
            month: self.month,
            year: self.month.div_ceil(12),
            payment: self.monthly_payment,
            principal_payment,
            interest_payment,
            total_interest_paid: self.total_interest_paid,
            total_principal_paid: self.total_principal_paid,
            balance: self.balance.max(0.0),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_months - self.month) as usize;
        (remaining, Some(remaining))
    }
}
