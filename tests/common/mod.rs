#![allow(dead_code)]

use chrono::NaiveDate;

use wealthwatch::models::{Debt, DebtStatus, Transaction, TransactionType};
use wealthwatch::services::FinancialAnalytics;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn income(amount_cents: i64, category: &str, on: NaiveDate) -> Transaction {
    transaction(amount_cents, TransactionType::Income, category, None, on)
}

pub fn expense(amount_cents: i64, category: &str, on: NaiveDate) -> Transaction {
    transaction(amount_cents, TransactionType::Expense, category, None, on)
}

pub fn expense_with_sub(
    amount_cents: i64,
    category: &str,
    subcategory: &str,
    on: NaiveDate,
) -> Transaction {
    transaction(
        amount_cents,
        TransactionType::Expense,
        category,
        Some(subcategory),
        on,
    )
}

fn transaction(
    amount_cents: i64,
    kind: TransactionType,
    category: &str,
    subcategory: Option<&str>,
    on: NaiveDate,
) -> Transaction {
    Transaction {
        id: format!("tx-{}-{}-{}", category, amount_cents, on),
        amount_cents,
        category: category.into(),
        subcategory: subcategory.map(Into::into),
        kind,
        date: on,
        description: String::new(),
        tags: Vec::new(),
        recurring: false,
        recurring_interval: None,
    }
}

pub fn debt(amount_cents: i64, current_balance_cents: Option<i64>, status: DebtStatus) -> Debt {
    Debt {
        id: format!("debt-{}", amount_cents),
        lender_name: "Bank".into(),
        amount_cents,
        due_date: date(2025, 1, 1),
        interest_rate: None,
        description: String::new(),
        minimum_payment_cents: None,
        current_balance_cents,
        status,
    }
}

/// Engine pinned to a fixed reference date so windowed queries are
/// deterministic.
pub fn engine_at(
    today: NaiveDate,
    transactions: Vec<Transaction>,
    debts: Vec<Debt>,
) -> FinancialAnalytics {
    FinancialAnalytics::with_reference_date(transactions, debts, today)
}
