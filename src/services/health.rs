//! Weighted financial-health scoring.
//!
//! Five factors are normalized to a 0-100 scale, combined with fixed weights
//! into a single score, and independently checked against per-factor
//! thresholds to produce recommendations.

use crate::models::{FinancialHealth, HealthFactors, RiskLevel};

use super::analytics::{FinancialAnalytics, DEFAULT_SUMMARY_MONTHS};

const WEIGHT_SAVINGS_RATE: f64 = 0.25;
const WEIGHT_DEBT_TO_INCOME: f64 = 0.25;
const WEIGHT_EXPENSE_STABILITY: f64 = 0.20;
const WEIGHT_EMERGENCY_FUND: f64 = 0.20;
const WEIGHT_DIVERSIFICATION: f64 = 0.10;

/// Number of trailing single-month samples for the stability factor.
const STABILITY_SAMPLE_MONTHS: u32 = 6;
/// Horizon for the average monthly expenses behind the emergency-fund factor.
const EMERGENCY_FUND_HORIZON_MONTHS: u32 = 3;
/// Points awarded per month of expenses covered; saturates at ten months.
const EMERGENCY_FUND_POINTS_PER_MONTH: f64 = 10.0;
/// Points per distinct income category; saturates at four sources.
const DIVERSIFICATION_POINTS_PER_SOURCE: f64 = 25.0;

pub fn calculate_financial_health(analytics: &FinancialAnalytics) -> FinancialHealth {
    let savings_rate = analytics.savings_rate_months(DEFAULT_SUMMARY_MONTHS);
    let total_income = analytics.income_in_months(DEFAULT_SUMMARY_MONTHS);
    let total_debt = analytics.total_debt();

    let factors = HealthFactors {
        savings_rate: (savings_rate * 100.0).clamp(0.0, 100.0),
        debt_to_income: (100.0 - total_debt as f64 / total_income.max(1) as f64 * 100.0)
            .clamp(0.0, 100.0),
        expense_stability: expense_stability(analytics),
        emergency_fund: emergency_fund(analytics),
        diversification: (analytics.income_source_count() as f64
            * DIVERSIFICATION_POINTS_PER_SOURCE)
            .min(100.0),
    };

    let score = (factors.savings_rate * WEIGHT_SAVINGS_RATE
        + factors.debt_to_income * WEIGHT_DEBT_TO_INCOME
        + factors.expense_stability * WEIGHT_EXPENSE_STABILITY
        + factors.emergency_fund * WEIGHT_EMERGENCY_FUND
        + factors.diversification * WEIGHT_DIVERSIFICATION)
        .round() as i64;

    FinancialHealth {
        score,
        recommendations: recommendations(&factors),
        risk_level: RiskLevel::from_score(score),
        factors,
    }
}

/// Stability of monthly spending, via the coefficient of variation of the
/// most recent single-month expense totals. A flat spending history scores
/// 100; wildly varying months drive the factor towards 0.
fn expense_stability(analytics: &FinancialAnalytics) -> f64 {
    let monthly_totals: Vec<i64> = (0..STABILITY_SAMPLE_MONTHS)
        .map(|offset| analytics.expenses_for_month(offset))
        .collect();

    if monthly_totals.len() < 2 {
        return 50.0;
    }

    let mean = monthly_totals.iter().sum::<i64>() as f64 / monthly_totals.len() as f64;
    if mean == 0.0 {
        return 100.0;
    }

    // Population variance, matching the fixed six-sample window.
    let variance = monthly_totals
        .iter()
        .map(|&total| {
            let diff = total as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / monthly_totals.len() as f64;
    let coefficient_of_variation = variance.sqrt() / mean;

    (100.0 - coefficient_of_variation * 100.0).clamp(0.0, 100.0)
}

/// Months of average expenses covered by the lifetime balance, at ten points
/// per month. A household with no recorded expenses scores 100 if it holds
/// any balance at all and 0 otherwise.
fn emergency_fund(analytics: &FinancialAnalytics) -> f64 {
    let monthly_expenses = analytics.expenses_in_months(EMERGENCY_FUND_HORIZON_MONTHS) as f64
        / EMERGENCY_FUND_HORIZON_MONTHS as f64;
    let balance = analytics.current_balance() as f64;

    if monthly_expenses == 0.0 {
        return if balance > 0.0 { 100.0 } else { 0.0 };
    }

    (balance / monthly_expenses * EMERGENCY_FUND_POINTS_PER_MONTH).clamp(0.0, 100.0)
}

/// Threshold-triggered advisory strings, in factor-declaration order.
/// Several may trigger at once; none trigger when all factors are healthy.
fn recommendations(factors: &HealthFactors) -> Vec<String> {
    let mut recommendations = Vec::new();

    if factors.savings_rate < 50.0 {
        recommendations
            .push("Consider increasing your savings rate to at least 20% of your income.".into());
    }
    if factors.debt_to_income < 60.0 {
        recommendations.push(
            "Work on reducing your debt-to-income ratio by paying down high-interest debts first."
                .into(),
        );
    }
    if factors.emergency_fund < 50.0 {
        recommendations.push(
            "Build an emergency fund covering 3-6 months of expenses for financial security."
                .into(),
        );
    }
    if factors.expense_stability < 60.0 {
        recommendations.push(
            "Try to stabilize your monthly expenses by creating and sticking to a budget.".into(),
        );
    }
    if factors.diversification < 50.0 {
        recommendations
            .push("Consider diversifying your income sources to reduce financial risk.".into());
    }

    recommendations
}
