use super::dto::NubankRecord;
use crate::banks::traits::Normalizer;
use crate::errors::AnalysisResult;
use crate::rules::RuleTable;
use crate::types::{RawRecord, Transaction};

/// Título usado pelo Nubank nas confirmações de pagamento da fatura.
/// Essas linhas não são gastos e invertem os totais se analisadas.
const PAYMENT_RECEIVED_TITLE: &str = "Pagamento recebido";

pub struct NubankNormalizer;

impl Normalizer for NubankNormalizer {
    fn is_excluded(record: &RawRecord) -> bool {
        record.title == PAYMENT_RECEIVED_TITLE
    }

    /// Uma data ou valor malformado falha o lote inteiro: nenhuma
    /// transação parcial é entregue ao agregador.
    fn normalize(records: Vec<RawRecord>) -> AnalysisResult<Vec<Transaction>> {
        let rules = RuleTable::nubank();

        records
            .into_iter()
            .filter(|record| !Self::is_excluded(record))
            .map(|record| {
                let record: NubankRecord = record.try_into()?;
                let category = rules.categorize(&record.title).to_string();
                Ok(Transaction {
                    date: record.date,
                    title: record.title,
                    amount: record.amount,
                    category,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalysisError;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn raw(title: &str, date: &str, amount: &str) -> RawRecord {
        RawRecord {
            title: title.to_string(),
            date: date.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_normalize_assigns_categories() {
        let records = vec![
            raw("Mercado Bom", "2024-01-02", "-50.00"),
            raw("Ifood", "2024-01-03", "-30.00"),
            raw("Farmácia Popular", "2024-01-04", "-15.00"),
        ];

        let transactions = NubankNormalizer::normalize(records).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].category, "Supermercado");
        assert_eq!(transactions[1].category, "Delivery");
        assert_eq!(transactions[2].category, "Outros");
        assert_eq!(transactions[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(transactions[0].amount, Decimal::from_str("-50.00").unwrap());
    }

    #[test]
    fn test_normalize_excludes_payment_received() {
        let records = vec![
            raw("Mercado Bom", "2024-01-02", "-50.00"),
            raw("Pagamento recebido", "2024-01-03", "500.00"),
        ];

        let transactions = NubankNormalizer::normalize(records).unwrap();
        assert_eq!(transactions.len(), 1);
        assert!(transactions.iter().all(|t| t.title != "Pagamento recebido"));
    }

    #[rstest]
    #[case("pagamento recebido")] // exclusão é por igualdade exata, não case-insensitive
    #[case("Pagamento recebido em conta")]
    fn test_normalize_keeps_near_miss_titles(#[case] title: &str) {
        let records = vec![raw(title, "2024-01-02", "10.00")];
        let transactions = NubankNormalizer::normalize(records).unwrap();
        assert_eq!(transactions.len(), 1);
    }

    #[test]
    fn test_normalize_malformed_date_fails_batch() {
        let records = vec![
            raw("Mercado Bom", "2024-01-02", "-50.00"),
            raw("Ifood", "not-a-date", "-30.00"),
        ];

        let result = NubankNormalizer::normalize(records);
        assert!(matches!(result, Err(AnalysisError::MalformedDate(_))));
    }

    #[test]
    fn test_normalize_malformed_amount_fails_batch() {
        let records = vec![raw("Ifood", "2024-01-03", "trinta")];
        let result = NubankNormalizer::normalize(records);
        assert!(matches!(result, Err(AnalysisError::MalformedAmount(_))));
    }

    #[test]
    fn test_normalize_excluded_row_never_validated() {
        // A linha excluída sai antes da coerção; um valor malformado nela
        // não falha o lote.
        let records = vec![
            raw("Pagamento recebido", "data-invalida", "n/a"),
            raw("Mercado Bom", "2024-01-02", "-50.00"),
        ];

        let transactions = NubankNormalizer::normalize(records).unwrap();
        assert_eq!(transactions.len(), 1);
    }

    #[test]
    fn test_normalize_empty_input() {
        let transactions = NubankNormalizer::normalize(Vec::new()).unwrap();
        assert!(transactions.is_empty());
    }
}
