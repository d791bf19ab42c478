use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Yearly,
}

/// A spending limit for a category. Shares the category/period vocabulary
/// with the analytics engine but is not consumed by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub limit_cents: i64,
    pub spent_cents: i64,
    pub period: BudgetPeriod,
    /// Alert when spending passes this share of the limit (0.0 - 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Budget {
    pub fn percentage_used(&self) -> f64 {
        if self.limit_cents <= 0 {
            return 0.0;
        }
        self.spent_cents as f64 / self.limit_cents as f64
    }

    pub fn is_over_threshold(&self) -> bool {
        match self.alert_threshold {
            Some(threshold) => self.percentage_used() >= threshold,
            None => false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBudget {
    pub category: String,
    pub limit_cents: i64,
    pub period: BudgetPeriod,
    #[serde(default)]
    pub alert_threshold: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_used_guards_zero_limit() {
        let budget = Budget {
            id: "b1".into(),
            category: "Food".into(),
            limit_cents: 0,
            spent_cents: 5_000,
            period: BudgetPeriod::Monthly,
            alert_threshold: None,
            color: None,
        };
        assert_eq!(budget.percentage_used(), 0.0);
    }

    #[test]
    fn test_threshold_alert() {
        let budget = Budget {
            id: "b1".into(),
            category: "Food".into(),
            limit_cents: 10_000,
            spent_cents: 8_500,
            period: BudgetPeriod::Monthly,
            alert_threshold: Some(0.8),
            color: None,
        };
        assert!(budget.is_over_threshold());
    }
}
