use chrono::Utc;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{Budget, Debt, Goal, Settings, Transaction};
use crate::storage::RecordStore;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    date: String,
    #[serde(rename = "type")]
    kind: &'static str,
    category: &'a str,
    subcategory: &'a str,
    amount_cents: i64,
    description: &'a str,
    tags: String,
    recurring: bool,
}

/// Render transactions as CSV, one row per record. Tags are joined with `;`.
pub fn transactions_to_csv(transactions: &[Transaction]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for tx in transactions {
        writer.serialize(CsvRow {
            id: &tx.id,
            date: tx.date.format("%Y-%m-%d").to_string(),
            kind: tx.kind.as_str(),
            category: &tx.category,
            subcategory: tx.subcategory.as_deref().unwrap_or(""),
            amount_cents: tx.amount_cents,
            description: &tx.description,
            tags: tx.tags.join(";"),
            recurring: tx.recurring,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV encoding error: {}", e)))
}

/// Full backup of everything the store holds, timestamped.
#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub transactions: Vec<Transaction>,
    pub debts: Vec<Debt>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub settings: Settings,
    pub export_date: String,
}

impl ExportData {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn export_all<S: RecordStore>(store: &S) -> AppResult<ExportData> {
    Ok(ExportData {
        transactions: store.get_transactions()?,
        debts: store.get_debts()?,
        budgets: store.get_budgets()?,
        goals: store.get_goals()?,
        settings: store.get_settings()?,
        export_date: Utc::now().to_rfc3339(),
    })
}
