//! Tabela de regras de categorização por palavras-chave.
//!
//! Cada banco fornece sua própria tabela; o casamento é sempre o mesmo:
//! substring case-insensitive sobre o título, primeira regra declarada vence.

use serde::{Deserialize, Serialize};

/// Categoria sentinela atribuída quando nenhuma regra casa com o título.
pub const FALLBACK_CATEGORY: &str = "Outros";

/// Uma categoria e as palavras-chave que a identificam num título.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Keywords são armazenadas em minúsculas; o casamento lida só com o título.
    pub fn new(category: &str, keywords: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, title_lower: &str) -> bool {
        self.keywords.iter().any(|keyword| title_lower.contains(keyword.as_str()))
    }
}

/// Sequência ordenada de regras. A ordem de declaração é o desempate:
/// se duas regras casam com o mesmo título, a primeira declarada vence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<CategoryRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Tabela do extrato de cartão do Nubank.
    pub fn nubank() -> Self {
        Self::new(vec![
            CategoryRule::new(
                "Supermercado",
                &["mercado", "supermercado", "hortifruti", "atacado", "atacadista"],
            ),
            CategoryRule::new("Delivery", &["ifood", "delivery", "ifd"]),
            CategoryRule::new("Serviços", &["conta", "energia", "água", "internet", "telefone"]),
        ])
    }

    /// Regras na ordem de declaração.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Decide a categoria de um título: minúsculas, varre as regras em ordem,
    /// uma regra casa se qualquer keyword for substring do título; sem casamento
    /// retorna [`FALLBACK_CATEGORY`]. Função pura, sem estado escondido.
    pub fn categorize(&self, title: &str) -> &str {
        let title_lower = title.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&title_lower))
            .map(|rule| rule.category.as_str())
            .unwrap_or(FALLBACK_CATEGORY)
    }
}
