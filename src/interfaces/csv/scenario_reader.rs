use crate::domain::loan::{LoanInputs, RawLoanInputs};
use crate::error::{AmortizationError, Result};
use std::io::Read;

/// Reads loan scenarios from a CSV source with a `principal,rate,term` header.
///
/// Each row is validated into [`LoanInputs`]; a row that fails to parse or
/// validate yields an error without stopping the rest of the stream.
pub struct ScenarioReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScenarioReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn scenarios(self) -> impl Iterator<Item = Result<LoanInputs>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(AmortizationError::from)
                .and_then(|raw: RawLoanInputs| LoanInputs::try_from(raw))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "principal, rate, term\n250000, 4.5, 30\n12000, 12, 1";
        let reader = ScenarioReader::new(data.as_bytes());
        let results: Vec<Result<LoanInputs>> = reader.scenarios().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.principal(), 250_000.0);
        assert_eq!(first.annual_rate_percent(), 4.5);
        assert_eq!(first.term_years(), 30);
        assert_eq!(results[1].as_ref().unwrap().term_years(), 1);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "principal, rate, term\nlots, 4.5, 30\n1000, 3, 5";
        let reader = ScenarioReader::new(data.as_bytes());
        let results: Vec<Result<LoanInputs>> = reader.scenarios().collect();

        assert!(matches!(results[0], Err(AmortizationError::CsvError(_))));
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_reader_rejects_out_of_domain_values() {
        let data = "principal, rate, term\n1000, -2, 5\n1000, 3, 0";
        let reader = ScenarioReader::new(data.as_bytes());
        let results: Vec<Result<LoanInputs>> = reader.scenarios().collect();

        assert!(matches!(results[0], Err(AmortizationError::InvalidInput(_))));
        assert!(matches!(results[1], Err(AmortizationError::InvalidInput(_))));
    }
}
