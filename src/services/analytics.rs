use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use crate::date_utils::{month_window, DateRange};
use crate::error::{AppError, AppResult};
use crate::models::{
    CashFlowData, CategoryInsight, Debt, FinancialHealth, FinancialSummary, PredictiveInsight,
    SpendingPattern, SubcategorySpend, Transaction, TransactionType,
};
use crate::services::trend::{classify, percent_change};
use crate::services::{health, insights};

/// Default reporting horizons, in months.
pub const DEFAULT_SUMMARY_MONTHS: u32 = 12;
pub const DEFAULT_PATTERN_MONTHS: u32 = 6;
pub const DEFAULT_CASH_FLOW_MONTHS: u32 = 12;

/// Read-only analytics over a snapshot of transactions and debts.
///
/// The engine holds no mutable state and performs no I/O: every query
/// recomputes from the snapshot passed at construction. Callers reconstruct
/// the engine whenever the underlying collections change.
pub struct FinancialAnalytics {
    transactions: Vec<Transaction>,
    debts: Vec<Debt>,
    today: NaiveDate,
}

impl FinancialAnalytics {
    pub fn new(transactions: Vec<Transaction>, debts: Vec<Debt>) -> Self {
        Self::with_reference_date(transactions, debts, Local::now().date_naive())
    }

    /// Construct with a pinned "today", making windowed queries
    /// deterministic. Debts are normalized once at this boundary so the
    /// balance default is never recomputed downstream.
    pub fn with_reference_date(
        transactions: Vec<Transaction>,
        debts: Vec<Debt>,
        today: NaiveDate,
    ) -> Self {
        let debts: Vec<Debt> = debts.into_iter().map(Debt::normalized).collect();
        tracing::debug!(
            transactions = transactions.len(),
            debts = debts.len(),
            reference_date = %today,
            "Analytics snapshot loaded"
        );
        Self {
            transactions,
            debts,
            today,
        }
    }

    // Core financial metrics

    pub fn total_income(&self, months: u32) -> AppResult<i64> {
        let window = self.checked_window(months)?;
        Ok(self.sum_type(TransactionType::Income, window))
    }

    pub fn total_expenses(&self, months: u32) -> AppResult<i64> {
        let window = self.checked_window(months)?;
        Ok(self.sum_type(TransactionType::Expense, window))
    }

    /// Lifetime signed balance over all transactions, deliberately
    /// unwindowed: net worth reflects all-time history.
    pub fn current_balance(&self) -> i64 {
        self.transactions
            .iter()
            .map(Transaction::signed_amount_cents)
            .sum()
    }

    /// Sum of outstanding balances over active debts only.
    pub fn total_debt(&self) -> i64 {
        self.debts
            .iter()
            .filter(|d| d.is_active())
            .map(Debt::balance_cents)
            .sum()
    }

    pub fn net_worth(&self) -> i64 {
        self.current_balance() - self.total_debt()
    }

    /// `(income - expenses) / income` over the window, 0.0 when there is no
    /// income.
    pub fn savings_rate(&self, months: u32) -> AppResult<f64> {
        self.checked_window(months)?;
        Ok(self.savings_rate_months(months))
    }

    pub fn monthly_average_savings(&self, months: u32) -> AppResult<i64> {
        let window = self.checked_window(months)?;
        let income = self.sum_type(TransactionType::Income, window);
        let expenses = self.sum_type(TransactionType::Expense, window);
        Ok((income - expenses) / months as i64)
    }

    pub fn summary(&self, months: u32) -> AppResult<FinancialSummary> {
        Ok(FinancialSummary {
            total_income_cents: self.total_income(months)?,
            total_expenses_cents: self.total_expenses(months)?,
            current_balance_cents: self.current_balance(),
            total_debt_cents: self.total_debt(),
            net_worth_cents: self.net_worth(),
            savings_rate: self.savings_rate(months)?,
            monthly_average_savings_cents: self.monthly_average_savings(months)?,
        })
    }

    // Spending analysis

    /// Per-category expense totals for the window, with trend classified
    /// against the immediately preceding equal-length window. Categories with
    /// no transactions in the current window are omitted entirely.
    pub fn spending_patterns(&self, months: u32) -> AppResult<Vec<SpendingPattern>> {
        self.checked_window(months)?;
        Ok(self.spending_patterns_months(months))
    }

    pub fn category_insights(&self, months: u32) -> AppResult<Vec<CategoryInsight>> {
        let window = self.checked_window(months)?;
        let previous_window = month_window(self.today, months, months);

        let mut groups: HashMap<&str, Vec<&Transaction>> = HashMap::new();
        for tx in self.expenses_in(window) {
            groups.entry(tx.category.as_str()).or_default().push(tx);
        }

        let mut result: Vec<CategoryInsight> = groups
            .into_iter()
            .map(|(category, transactions)| {
                let total_spent: i64 = transactions.iter().map(|t| t.amount_cents).sum();
                let count = transactions.len();

                let mut subcategories: HashMap<&str, i64> = HashMap::new();
                for tx in &transactions {
                    let sub = tx.subcategory.as_deref().unwrap_or("Other");
                    *subcategories.entry(sub).or_insert(0) += tx.amount_cents;
                }
                let mut top: Vec<(&str, i64)> = subcategories.into_iter().collect();
                top.sort_by(|a, b| b.1.cmp(&a.1));
                top.truncate(3);
                let top_subcategories = top
                    .into_iter()
                    .map(|(name, amount)| SubcategorySpend {
                        name: name.to_string(),
                        amount_cents: amount,
                        percentage: if total_spent > 0 {
                            amount as f64 / total_spent as f64
                        } else {
                            0.0
                        },
                    })
                    .collect();

                let previous_spent: i64 = self
                    .expenses_in(previous_window)
                    .filter(|t| t.category == category)
                    .map(|t| t.amount_cents)
                    .sum();

                CategoryInsight {
                    category: category.to_string(),
                    total_spent_cents: total_spent,
                    transaction_count: count,
                    average_transaction_cents: total_spent / count as i64,
                    trend: percent_change(total_spent as f64, previous_spent as f64),
                    top_subcategories,
                }
            })
            .collect();

        result.sort_by(|a, b| b.total_spent_cents.cmp(&a.total_spent_cents));
        Ok(result)
    }

    // Cash flow analysis

    /// Month-by-month series from oldest to newest. The running balance
    /// accumulates net flow from zero at the start of the series, so it shows
    /// relative growth over the window rather than the lifetime balance.
    pub fn cash_flow_data(&self, months: u32) -> AppResult<Vec<CashFlowData>> {
        self.checked_window(months)?;

        let mut data = Vec::with_capacity(months as usize);
        let mut running_balance = 0i64;

        for offset in (0..months).rev() {
            let window = month_window(self.today, 1, offset);
            let income = self.sum_type(TransactionType::Income, window);
            let expenses = self.sum_type(TransactionType::Expense, window);
            let net_flow = income - expenses;
            running_balance += net_flow;

            data.push(CashFlowData {
                date: window.start.format("%b %Y").to_string(),
                income_cents: income,
                expenses_cents: expenses,
                balance_cents: running_balance,
                net_flow_cents: net_flow,
            });
        }

        Ok(data)
    }

    // Composite views

    pub fn financial_health(&self) -> FinancialHealth {
        health::calculate_financial_health(self)
    }

    pub fn predictive_insights(&self) -> Vec<PredictiveInsight> {
        insights::predictive_insights(self)
    }

    // Internal helpers. The `_months` variants skip the zero-months check and
    // exist for the scorer and narrator, which only use fixed horizons.

    fn checked_window(&self, months: u32) -> AppResult<DateRange> {
        if months == 0 {
            return Err(AppError::Validation(
                "Reporting horizon must be at least one month".into(),
            ));
        }
        Ok(month_window(self.today, months, 0))
    }

    fn sum_type(&self, kind: TransactionType, window: DateRange) -> i64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind && window.contains(t.date))
            .map(|t| t.amount_cents)
            .sum()
    }

    fn expenses_in(&self, window: DateRange) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |t| t.kind == TransactionType::Expense && window.contains(t.date))
    }

    fn expense_totals_by_category(&self, window: DateRange) -> HashMap<String, i64> {
        let mut totals: HashMap<String, i64> = HashMap::new();
        for tx in self.expenses_in(window) {
            *totals.entry(tx.category.clone()).or_insert(0) += tx.amount_cents;
        }
        totals
    }

    pub(crate) fn income_in_months(&self, months: u32) -> i64 {
        self.sum_type(TransactionType::Income, month_window(self.today, months, 0))
    }

    pub(crate) fn expenses_in_months(&self, months: u32) -> i64 {
        self.sum_type(
            TransactionType::Expense,
            month_window(self.today, months, 0),
        )
    }

    /// Total expenses for the single month `offset_months` before the current
    /// one.
    pub(crate) fn expenses_for_month(&self, offset_months: u32) -> i64 {
        self.sum_type(
            TransactionType::Expense,
            month_window(self.today, 1, offset_months),
        )
    }

    pub(crate) fn savings_rate_months(&self, months: u32) -> f64 {
        let income = self.income_in_months(months);
        if income == 0 {
            return 0.0;
        }
        let expenses = self.expenses_in_months(months);
        (income - expenses) as f64 / income as f64
    }

    /// Number of distinct categories that income arrives under, over the
    /// whole history.
    pub(crate) fn income_source_count(&self) -> usize {
        let mut categories: Vec<&str> = self
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Income)
            .map(|t| t.category.as_str())
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories.len()
    }

    pub(crate) fn has_active_debts(&self) -> bool {
        self.debts.iter().any(|d| d.is_active())
    }

    pub(crate) fn spending_patterns_months(&self, months: u32) -> Vec<SpendingPattern> {
        let window = month_window(self.today, months, 0);
        let previous_window = month_window(self.today, months, months);

        let category_totals = self.expense_totals_by_category(window);
        let previous_totals = self.expense_totals_by_category(previous_window);
        let total_expenses: i64 = category_totals.values().sum();

        let mut result: Vec<SpendingPattern> = category_totals
            .into_iter()
            .map(|(category, amount)| {
                let previous = previous_totals.get(&category).copied().unwrap_or(0);
                SpendingPattern {
                    percentage: if total_expenses > 0 {
                        amount as f64 / total_expenses as f64
                    } else {
                        0.0
                    },
                    trend: classify(percent_change(amount as f64, previous as f64)),
                    monthly_average_cents: amount / months as i64,
                    category,
                    amount_cents: amount,
                }
            })
            .collect();

        result.sort_by(|a, b| b.amount_cents.cmp(&a.amount_cents));
        result
    }
}
