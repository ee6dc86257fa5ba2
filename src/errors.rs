use thiserror::Error;

/// Erros possíveis durante a análise de extratos bancários
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Falha genérica durante o parsing das linhas do extrato (detalhe na mensagem)
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    /// O banco selecionado ainda não possui um adaptador de normalização
    #[error("Unsupported bank: {0}")]
    UnsupportedBank(String),

    /// O builder foi chamado sem informar o banco de origem
    #[error("Bank is required")]
    MissingBank,

    /// Erro ao ler o conteúdo do arquivo do disco
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// O builder foi chamado sem fornecer linhas, conteúdo nem caminho de arquivo
    #[error("Rows, content or filepath is required")]
    MissingContentAndFilepath,

    // ── Erros específicos da normalização ───────────────────────────────────────

    /// Data de uma linha inválida ou em formato não reconhecido pelo adaptador
    #[error("Malformed date: {0:?}")]
    MalformedDate(String),

    /// Valor de uma linha não é um número decimal válido
    #[error("Malformed amount: {0:?}")]
    MalformedAmount(String),

    // ── Erros específicos da agregação ──────────────────────────────────────────

    /// Transação com campo fora do formato esperado pelo agregador
    /// (normalmente dados normalizados pelo adaptador errado)
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type AnalysisResult<T> = Result<T, AnalysisError>;
