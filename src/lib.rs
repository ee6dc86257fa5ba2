//! Normalize, categorize and aggregate bank statement transaction exports.
//!
//! ```rust,ignore
//! use statement_analysis_rs::{AnalysisBuilder, Bank, View};
//!
//! let report = AnalysisBuilder::new()
//!     .content(&file_content)
//!     .bank(Bank::Nubank)
//!     .report(View::DailySeries)?;
//! ```

mod builder;
mod types;

pub mod aggregate;
pub mod banks;
pub mod errors;
pub mod rules;

pub use aggregate::{CategoryAggregate, DailyAggregate, GroupedRow, Report, View};
pub use banks::prelude::*;
pub use builder::AnalysisBuilder;
pub use rules::{CategoryRule, FALLBACK_CATEGORY, RuleTable};
pub use types::{RawRecord, Transaction};
