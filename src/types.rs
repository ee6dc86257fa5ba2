use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, AnalysisResult};

/// Linha bruta do extrato, como entregue pelo parser tabular da camada de
/// upload. Os campos ainda são texto; a coerção é responsabilidade do
/// adaptador do banco selecionado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub title: String,
    pub date: String,
    pub amount: String,
}

impl RawRecord {
    /// Deserializa o conteúdo CSV de um extrato em linhas brutas.
    ///
    /// O cabeçalho precisa conter as colunas `title`, `date` e `amount`;
    /// colunas extras são ignoradas.
    pub fn from_csv(content: &str) -> AnalysisResult<Vec<RawRecord>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let mut records = Vec::new();

        for result in reader.deserialize::<RawRecord>() {
            let record =
                result.map_err(|e| AnalysisError::ParseFailed(format!("CSV deserialize error: {}", e)))?;
            records.push(record);
        }

        Ok(records)
    }
}

/// Transação canônica, pós-normalização. Toda transação que chega ao
/// agregador tem título e categoria não vazios e uma data válida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
}
