//! Visões agregadas sobre as transações normalizadas.
//!
//! As três funções são puras e totais sobre qualquer sequência de
//! transações: agrupamento por acumulação em mapa (uma passada), somas
//! decimais exatas, entrada vazia produz saída vazia.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, AnalysisResult};
use crate::types::Transaction;

/// Total de um dia e o acumulado até ele, em ordem ascendente de data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub amount_sum: Decimal,
    pub cumulative_sum: Decimal,
}

/// Total por par (categoria, título).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub title: String,
    pub amount_sum: Decimal,
}

/// Total por tripla (data, título, categoria) — a visão mais fina,
/// usada para exibição tabular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedRow {
    pub date: NaiveDate,
    pub title: String,
    pub category: String,
    pub amount_sum: Decimal,
}

/// Visão escolhida pelo chamador (o menu da camada de apresentação).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    #[serde(rename = "daily-series")]
    DailySeries,
    #[serde(rename = "category-breakdown")]
    CategoryBreakdown,
    #[serde(rename = "grouped-table")]
    GroupedTable,
}

/// Saída da visão correspondente, já estruturada para a apresentação.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Report {
    DailySeries(Vec<DailyAggregate>),
    CategoryBreakdown(Vec<CategoryAggregate>),
    GroupedTable(Vec<GroupedRow>),
}

impl View {
    pub fn run(&self, transactions: &[Transaction]) -> AnalysisResult<Report> {
        match self {
            View::DailySeries => daily_series(transactions).map(Report::DailySeries),
            View::CategoryBreakdown => {
                category_breakdown(transactions).map(Report::CategoryBreakdown)
            }
            View::GroupedTable => grouped_table(transactions).map(Report::GroupedTable),
        }
    }
}

/// O agregador depende de título e categoria não vazios; uma violação
/// normalmente significa dados normalizados pelo adaptador errado e vira
/// um erro tipado em vez de números silenciosamente errados.
fn check_schema(transactions: &[Transaction]) -> AnalysisResult<()> {
    for transaction in transactions {
        if transaction.title.trim().is_empty() {
            return Err(AnalysisError::SchemaMismatch(
                "transaction with empty title".to_string(),
            ));
        }
        if transaction.category.trim().is_empty() {
            return Err(AnalysisError::SchemaMismatch(format!(
                "transaction {:?} has no category",
                transaction.title
            )));
        }
    }
    Ok(())
}

/// Total por dia com soma acumulada na mesma ordem de datas.
pub fn daily_series(transactions: &[Transaction]) -> AnalysisResult<Vec<DailyAggregate>> {
    check_schema(transactions)?;

    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for transaction in transactions {
        *totals.entry(transaction.date).or_default() += transaction.amount;
    }

    let mut cumulative = Decimal::ZERO;
    let series = totals
        .into_iter()
        .map(|(date, amount_sum)| {
            cumulative += amount_sum;
            DailyAggregate {
                date,
                amount_sum,
                cumulative_sum: cumulative,
            }
        })
        .collect();

    Ok(series)
}

/// Total por (categoria, título), em ordem determinística de chaves.
pub fn category_breakdown(transactions: &[Transaction]) -> AnalysisResult<Vec<CategoryAggregate>> {
    check_schema(transactions)?;

    let mut totals: BTreeMap<(String, String), Decimal> = BTreeMap::new();
    for transaction in transactions {
        let key = (transaction.category.clone(), transaction.title.clone());
        *totals.entry(key).or_default() += transaction.amount;
    }

    let breakdown = totals
        .into_iter()
        .map(|((category, title), amount_sum)| CategoryAggregate {
            category,
            title,
            amount_sum,
        })
        .collect();

    Ok(breakdown)
}

/// Total por (data, título, categoria), ascendente por data e título.
pub fn grouped_table(transactions: &[Transaction]) -> AnalysisResult<Vec<GroupedRow>> {
    check_schema(transactions)?;

    let mut totals: BTreeMap<(NaiveDate, String, String), Decimal> = BTreeMap::new();
    for transaction in transactions {
        let key = (
            transaction.date,
            transaction.title.clone(),
            transaction.category.clone(),
        );
        *totals.entry(key).or_default() += transaction.amount;
    }

    let rows = totals
        .into_iter()
        .map(|((date, title, category), amount_sum)| GroupedRow {
            date,
            title,
            category,
            amount_sum,
        })
        .collect();

    Ok(rows)
}
