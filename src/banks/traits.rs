use crate::errors::AnalysisResult;
use crate::types::{RawRecord, Transaction};

/// Adaptador de normalização de um banco: filtra as linhas que não são
/// gastos, coage os campos para a forma canônica e atribui a categoria
/// pela tabela de regras do banco.
pub trait Normalizer {
    fn normalize(records: Vec<RawRecord>) -> AnalysisResult<Vec<Transaction>>;

    /// Linhas que não devem entrar na análise (p.ex. confirmações de
    /// pagamento, que não são eventos de gasto).
    fn is_excluded(record: &RawRecord) -> bool;
}
