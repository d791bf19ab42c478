use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringInterval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A single income or expense record. `amount_cents` is always positive;
/// direction is carried by `kind`, never by sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount_cents: i64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurringInterval>,
}

impl Transaction {
    /// Amount with direction applied: income adds, expense subtracts.
    pub fn signed_amount_cents(&self) -> i64 {
        match self.kind {
            TransactionType::Income => self.amount_cents,
            TransactionType::Expense => -self.amount_cents,
        }
    }

    pub fn amount_display(&self) -> String {
        format_cents(self.amount_cents)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    pub amount_cents: i64,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub recurring_interval: Option<RecurringInterval>,
}

impl NewTransaction {
    pub fn validate(&self) -> AppResult<()> {
        if self.amount_cents <= 0 {
            return Err(AppError::Validation(
                "Transaction amount must be positive".into(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(AppError::Validation(
                "Transaction category must not be empty".into(),
            ));
        }
        Ok(())
    }
}

pub fn format_cents(cents: i64) -> String {
    let is_negative = cents < 0;
    let abs_cents = cents.abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;

    if is_negative {
        format!("-{}.{:02}", units, remainder)
    } else {
        format!("{}.{:02}", units, remainder)
    }
}
