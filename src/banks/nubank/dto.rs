use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::NubankDate;
use crate::errors::AnalysisError;
use crate::types::RawRecord;

/// Linha do extrato do Nubank já coagida para valores tipados, mas ainda
/// sem categoria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NubankRecord {
    pub date: NaiveDate,
    pub title: String,
    pub amount: Decimal,
}

impl TryFrom<RawRecord> for NubankRecord {
    type Error = AnalysisError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let date: NaiveDate = NubankDate::from(raw.date).try_into()?;

        let amount = raw
            .amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| AnalysisError::MalformedAmount(raw.amount))?;

        Ok(NubankRecord {
            date,
            title: raw.title,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_record_from_raw() {
        let raw = RawRecord {
            title: "Mercado Bom".to_string(),
            date: "2024-01-02".to_string(),
            amount: "-50.00".to_string(),
        };

        let record: NubankRecord = raw.try_into().unwrap();
        assert_eq!(record.title, "Mercado Bom");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(record.amount, Decimal::from_str("-50.00").unwrap());
    }

    #[rstest]
    #[case("  -50.00  ", "-50.00")]
    #[case("500", "500")]
    #[case("-0.01", "-0.01")]
    fn test_record_amount_coercion(#[case] input: &str, #[case] expected: &str) {
        let raw = RawRecord {
            title: "Ifood".to_string(),
            date: "2024-01-03".to_string(),
            amount: input.to_string(),
        };

        let record: NubankRecord = raw.try_into().unwrap();
        assert_eq!(record.amount, Decimal::from_str(expected).unwrap());
    }

    #[test]
    fn test_record_malformed_date() {
        let raw = RawRecord {
            title: "Ifood".to_string(),
            date: "03/01/2024".to_string(),
            amount: "-30.00".to_string(),
        };

        let result: Result<NubankRecord, _> = raw.try_into();
        assert!(matches!(result, Err(AnalysisError::MalformedDate(_))));
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1,50")] // separador decimal brasileiro não é aceito aqui
    fn test_record_malformed_amount(#[case] amount: &str) {
        let raw = RawRecord {
            title: "Ifood".to_string(),
            date: "2024-01-03".to_string(),
            amount: amount.to_string(),
        };

        let result: Result<NubankRecord, _> = raw.try_into();
        match result {
            Err(AnalysisError::MalformedAmount(raw_amount)) => assert_eq!(raw_amount, amount),
            other => panic!("expected MalformedAmount, got {:?}", other),
        }
    }
}
