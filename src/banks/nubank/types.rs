use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Representa a data de uma linha do extrato do Nubank.
///
/// O export traz a data como `YYYY-MM-DD`, às vezes acompanhada de um
/// horário que é descartado na análise (a semântica é só de dia). Este
/// wrapper centraliza o parsing e a validação.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NubankDate(String);

impl NubankDate {
    /// Tenta converter a string de data para `NaiveDate`, truncando
    /// qualquer componente de horário.
    pub fn parse(&self) -> Result<NaiveDate, AnalysisError> {
        let s = self.0.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Ok(datetime.date());
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(datetime.date());
        }

        Err(AnalysisError::MalformedDate(self.0.clone()))
    }
}

impl From<String> for NubankDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NubankDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<NubankDate> for NaiveDate {
    type Error = AnalysisError;

    fn try_from(date: NubankDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}
