use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Emergency,
    Investment,
    Purchase,
    Travel,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount_cents: i64,
    pub current_amount_cents: i64,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: GoalStatus,
}

impl Goal {
    /// Fraction of the target reached, 0.0 when the target is unset.
    pub fn progress(&self) -> f64 {
        if self.target_amount_cents <= 0 {
            return 0.0;
        }
        self.current_amount_cents as f64 / self.target_amount_cents as f64
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewGoal {
    pub name: String,
    pub target_amount_cents: i64,
    #[serde(default)]
    pub current_amount_cents: i64,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_guards_zero_target() {
        let goal = Goal {
            id: "g1".into(),
            name: "Emergency fund".into(),
            target_amount_cents: 0,
            current_amount_cents: 10_000,
            target_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            category: GoalCategory::Emergency,
            description: None,
            priority: Priority::High,
            status: GoalStatus::Active,
        };
        assert_eq!(goal.progress(), 0.0);
    }
}
