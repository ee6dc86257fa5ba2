pub mod nubank;
pub mod traits;

pub mod prelude {
    pub use super::Bank;
    pub use super::nubank::prelude::*;
    pub use super::traits::Normalizer;
}

use serde::{Deserialize, Serialize};

use crate::banks::nubank::NubankNormalizer;
use crate::banks::traits::Normalizer;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::rules::RuleTable;
use crate::types::{RawRecord, Transaction};

/// Banco de origem do extrato, escolhido pelo chamador (p.ex. um selectbox
/// na camada de apresentação). Só o Nubank tem adaptador por enquanto; os
/// demais retornam [`AnalysisError::UnsupportedBank`] em vez de analisar
/// dados com o adaptador errado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bank {
    #[serde(rename = "nubank")]
    Nubank,
    #[serde(rename = "banco-do-brasil")]
    BancoDoBrasil,
    #[serde(rename = "caixa-economica")]
    CaixaEconomica,
    #[serde(rename = "sicoob")]
    Sicoob,
}

impl Bank {
    pub fn name(&self) -> &'static str {
        match self {
            Bank::Nubank => "Nubank",
            Bank::BancoDoBrasil => "Banco do Brasil",
            Bank::CaixaEconomica => "Caixa Economica",
            Bank::Sicoob => "Sicoob",
        }
    }

    /// Normaliza as linhas brutas com o adaptador deste banco.
    pub fn normalize(&self, records: Vec<RawRecord>) -> AnalysisResult<Vec<Transaction>> {
        match self {
            Bank::Nubank => NubankNormalizer::normalize(records),
            unsupported => Err(AnalysisError::UnsupportedBank(unsupported.name().to_string())),
        }
    }

    /// Tabela de regras de categorização deste banco.
    pub fn rule_table(&self) -> AnalysisResult<RuleTable> {
        match self {
            Bank::Nubank => Ok(RuleTable::nubank()),
            unsupported => Err(AnalysisError::UnsupportedBank(unsupported.name().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_records() -> Vec<RawRecord> {
        vec![RawRecord {
            title: "Mercado Bom".to_string(),
            date: "2024-01-02".to_string(),
            amount: "-50.00".to_string(),
        }]
    }

    #[test]
    fn test_nubank_normalize_dispatch() {
        let transactions = Bank::Nubank.normalize(sample_records()).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].category, "Supermercado");
    }

    #[rstest]
    #[case(Bank::BancoDoBrasil, "Banco do Brasil")]
    #[case(Bank::CaixaEconomica, "Caixa Economica")]
    #[case(Bank::Sicoob, "Sicoob")]
    fn test_unsupported_banks(#[case] bank: Bank, #[case] name: &str) {
        let result = bank.normalize(sample_records());
        match result {
            Err(AnalysisError::UnsupportedBank(reported)) => assert_eq!(reported, name),
            other => panic!("expected UnsupportedBank, got {:?}", other.map(|t| t.len())),
        }

        assert!(matches!(
            bank.rule_table(),
            Err(AnalysisError::UnsupportedBank(_))
        ));
    }

    #[test]
    fn test_bank_serialization() {
        let json = serde_json::to_string(&Bank::Nubank).unwrap();
        assert!(json.contains("nubank"));

        let deserialized: Bank = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Bank::Nubank);
    }
}
