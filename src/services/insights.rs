//! Rule-based narrative insights.
//!
//! Deterministic heuristics over the aggregates, not a model: each insight
//! has a trigger condition and a parameterized message. Absent triggers
//! simply omit the insight.

use crate::models::{format_cents, InsightImpact, InsightKind, PredictiveInsight};
use crate::services::trend::TrendDirection;

use super::analytics::{FinancialAnalytics, DEFAULT_PATTERN_MONTHS};

/// Recent-behavior horizon: projections extrapolate from the last three
/// months.
const PROJECTION_MONTHS: u32 = 3;
/// A rising category only warrants an alert once it is a meaningful share of
/// spending.
const ALERT_MIN_SHARE: f64 = 0.10;
/// At most this many categories are named in a rising-expenses alert.
const ALERT_MAX_CATEGORIES: usize = 2;

pub fn predictive_insights(analytics: &FinancialAnalytics) -> Vec<PredictiveInsight> {
    let monthly_income =
        analytics.income_in_months(PROJECTION_MONTHS) as f64 / PROJECTION_MONTHS as f64;
    let savings_rate = analytics.savings_rate_months(PROJECTION_MONTHS);

    let mut insights = Vec::new();

    // Savings projection
    if savings_rate > 0.0 {
        let monthly_savings = monthly_income * savings_rate;
        let yearly_projection = (monthly_savings * 12.0).round() as i64;
        insights.push(PredictiveInsight {
            kind: InsightKind::SavingsProjection,
            title: "Savings Projection".into(),
            message: format!(
                "At your current savings rate of {:.1}%, you'll save approximately ${} this year.",
                savings_rate * 100.0,
                format_cents(yearly_projection)
            ),
            impact: InsightImpact::Positive,
        });
    }

    // Rising expense categories
    let patterns = analytics.spending_patterns_months(DEFAULT_PATTERN_MONTHS);
    let rising: Vec<&str> = patterns
        .iter()
        .filter(|p| p.trend == TrendDirection::Increasing && p.percentage > ALERT_MIN_SHARE)
        .take(ALERT_MAX_CATEGORIES)
        .map(|p| p.category.as_str())
        .collect();

    if !rising.is_empty() {
        insights.push(PredictiveInsight {
            kind: InsightKind::SpendingAlert,
            title: "Rising Expenses".into(),
            message: format!(
                "Your spending on {} has increased recently. Consider reviewing these categories.",
                rising.join(" and ")
            ),
            impact: InsightImpact::Warning,
        });
    }

    // Debt payoff timeline
    if analytics.has_active_debts() && savings_rate > 0.0 {
        let total_debt = analytics.total_debt() as f64;
        let monthly_savings = monthly_income * savings_rate;
        let months_to_payoff = (total_debt / monthly_savings).ceil() as i64;

        insights.push(PredictiveInsight {
            kind: InsightKind::DebtPayoff,
            title: "Debt Freedom Timeline".into(),
            message: format!(
                "If you allocate your monthly savings to debt repayment, you could be \
                 debt-free in approximately {} months.",
                months_to_payoff
            ),
            impact: InsightImpact::Positive,
        });
    }

    insights
}
