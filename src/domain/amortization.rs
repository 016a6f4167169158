use serde::Serialize;

/// Headline figures for a loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Loan state at the end of a full year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSnapshot {
    pub year: u32,
    /// Clamped at zero so rounding residue never shows a negative balance.
    pub remaining_balance: f64,
    pub total_interest_paid: f64,
    pub total_principal_paid: f64,
}

/// A single month of the detailed table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRow {
    pub month: u32,
    pub year: u32,
    pub payment: f64,
    pub principal_payment: f64,
    pub interest_payment: f64,
    pub total_interest_paid: f64,
    pub total_principal_paid: f64,
    pub balance: f64,
}

/// Full engine output: the summary plus the chronological yearly schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Amortization {
    #[serde(flatten)]
    pub summary: PaymentSummary,
    pub schedule: Vec<PeriodSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amortization_serializes_with_camel_case_keys() {
        let amortization = Amortization {
            summary: PaymentSummary {
                monthly_payment: 10.0,
                total_payment: 120.0,
                total_interest: 0.0,
            },
            schedule: vec![PeriodSnapshot {
                year: 1,
                remaining_balance: 0.0,
                total_interest_paid: 0.0,
                total_principal_paid: 120.0,
            }],
        };

        let json = serde_json::to_value(&amortization).unwrap();
        assert_eq!(json["monthlyPayment"], 10.0);
        assert_eq!(json["totalPayment"], 120.0);
        assert_eq!(json["totalInterest"], 0.0);
        assert_eq!(json["schedule"][0]["year"], 1);
        assert_eq!(json["schedule"][0]["totalPrincipalPaid"], 120.0);
        assert!(json.get("summary").is_none());
    }
}
