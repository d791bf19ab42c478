pub mod analytics;
pub mod budget;
pub mod debt;
pub mod goal;
pub mod settings;
pub mod transaction;

pub use analytics::{
    CashFlowData, CategoryInsight, FinancialHealth, FinancialSummary, HealthFactors, InsightImpact,
    InsightKind, PredictiveInsight, RiskLevel, SpendingPattern, SubcategorySpend,
};
pub use budget::{Budget, BudgetPeriod, NewBudget};
pub use debt::{Debt, DebtStatus, NewDebt};
pub use goal::{Goal, GoalCategory, GoalStatus, NewGoal, Priority};
pub use settings::{Settings, Theme};
pub use transaction::{
    format_cents, NewTransaction, RecurringInterval, Transaction, TransactionType,
};
