//! Derived aggregate types. These are pure functions of a transaction/debt
//! snapshot and a reporting window; they are computed on demand and never
//! persisted.

use serde::{Deserialize, Serialize};

use crate::services::trend::TrendDirection;

/// Headline totals for a reporting window. `current_balance_cents`,
/// `total_debt_cents`, and `net_worth_cents` are lifetime figures; the rest
/// are windowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income_cents: i64,
    pub total_expenses_cents: i64,
    pub current_balance_cents: i64,
    pub total_debt_cents: i64,
    pub net_worth_cents: i64,
    pub savings_rate: f64,
    pub monthly_average_savings_cents: i64,
}

/// Per-category spending for the current window compared with the preceding
/// equal-length window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingPattern {
    pub category: String,
    pub amount_cents: i64,
    /// Share of total windowed expenses, 0.0 - 1.0.
    pub percentage: f64,
    pub trend: TrendDirection,
    pub monthly_average_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategorySpend {
    pub name: String,
    pub amount_cents: i64,
    /// Share of the parent category's total, 0.0 - 1.0.
    pub percentage: f64,
}

/// Deep-dive figures for one expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInsight {
    pub category: String,
    pub total_spent_cents: i64,
    pub transaction_count: usize,
    pub average_transaction_cents: i64,
    /// Raw percent change versus the prior window, unclassified.
    pub trend: f64,
    pub top_subcategories: Vec<SubcategorySpend>,
}

/// One month in the rolling cash-flow series. `balance_cents` is a running
/// total of net flow that starts at zero at the beginning of the series, not
/// the lifetime account balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowData {
    /// Human month label, e.g. "Jun 2024".
    pub date: String,
    pub income_cents: i64,
    pub expenses_cents: i64,
    pub balance_cents: i64,
    pub net_flow_cents: i64,
}

/// Normalized 0-100 factor scores feeding the composite health score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthFactors {
    pub savings_rate: f64,
    pub debt_to_income: f64,
    pub expense_stability: f64,
    pub emergency_fund: f64,
    pub diversification: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: i64) -> Self {
        if score >= 70 {
            RiskLevel::Low
        } else if score >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialHealth {
    /// Weighted composite, 0-100, rounded to the nearest integer.
    pub score: i64,
    pub factors: HealthFactors,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    SavingsProjection,
    SpendingAlert,
    DebtPayoff,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::SavingsProjection => "savings_projection",
            InsightKind::SpendingAlert => "spending_alert",
            InsightKind::DebtPayoff => "debt_payoff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightImpact {
    Positive,
    Warning,
}

/// A short rule-based narrative message derived from the aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub impact: InsightImpact,
}
