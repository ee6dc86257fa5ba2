use std::fs;

use crate::aggregate::{Report, View};
use crate::banks::Bank;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::types::{RawRecord, Transaction};

/// Ponto de entrada da análise: recebe as linhas do extrato (já parseadas
/// ou como CSV cru), o banco de origem escolhido pelo chamador, e entrega
/// transações normalizadas ou uma visão agregada.
#[derive(Default)]
pub struct AnalysisBuilder {
    rows: Option<Vec<RawRecord>>,
    content: Option<String>,
    filepath: Option<String>,
    bank: Option<Bank>,
}

impl AnalysisBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linhas já parseadas pelo colaborador de upload.
    pub fn rows(mut self, rows: Vec<RawRecord>) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Conteúdo CSV cru do extrato.
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn bank(mut self, bank: Bank) -> Self {
        self.bank = Some(bank);
        self
    }

    /// Normaliza e categoriza com o adaptador do banco selecionado.
    pub fn normalize(self) -> AnalysisResult<Vec<Transaction>> {
        let bank = self.bank.ok_or(AnalysisError::MissingBank)?;

        let rows = match (self.rows, self.content, self.filepath) {
            (Some(rows), _, _) => rows,
            (None, Some(content), _) => RawRecord::from_csv(&content)?,
            (None, None, Some(path)) => {
                let content = fs::read_to_string(path)?;
                RawRecord::from_csv(&content)?
            }
            (None, None, None) => return Err(AnalysisError::MissingContentAndFilepath),
        };

        bank.normalize(rows)
    }

    /// Pipeline completo: normaliza e computa a visão pedida.
    pub fn report(self, view: View) -> AnalysisResult<Report> {
        let transactions = self.normalize()?;
        view.run(&transactions)
    }
}
