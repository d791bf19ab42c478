use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    Active,
    Paid,
    Overdue,
}

/// An outstanding obligation. Only `Active` debts count towards total debt
/// and net worth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub lender_name: String,
    /// Original principal, always positive.
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_payment_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_balance_cents: Option<i64>,
    pub status: DebtStatus,
}

impl Debt {
    /// Outstanding balance, falling back to the original principal when no
    /// balance has been recorded. This is the single defaulting site for the
    /// optional field.
    pub fn balance_cents(&self) -> i64 {
        self.current_balance_cents.unwrap_or(self.amount_cents)
    }

    /// Fill in the balance default eagerly so downstream readers can rely on
    /// the field being present.
    pub fn normalized(mut self) -> Self {
        if self.current_balance_cents.is_none() {
            self.current_balance_cents = Some(self.amount_cents);
        }
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDebt {
    pub lender_name: String,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    pub description: String,
    #[serde(default)]
    pub minimum_payment_cents: Option<i64>,
    #[serde(default)]
    pub current_balance_cents: Option<i64>,
}

impl NewDebt {
    pub fn validate(&self) -> AppResult<()> {
        if self.amount_cents <= 0 {
            return Err(AppError::Validation("Debt amount must be positive".into()));
        }
        if self.lender_name.trim().is_empty() {
            return Err(AppError::Validation(
                "Debt lender name must not be empty".into(),
            ));
        }
        if let Some(rate) = self.interest_rate {
            if !(0.0..=100.0).contains(&rate) {
                return Err(AppError::Validation(
                    "Interest rate must be between 0 and 100".into(),
                ));
            }
        }
        Ok(())
    }
}
