//! Persistence collaborator: a simple record store keyed by entity type.
//!
//! The analytics engine never calls into storage; callers fetch whole
//! snapshots from a [`RecordStore`] and hand them to
//! [`crate::services::FinancialAnalytics`]. Any implementation can substitute
//! the JSON file store without touching the core.

pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{
    Budget, Debt, DebtStatus, Goal, GoalStatus, NewBudget, NewDebt, NewGoal, NewTransaction,
    Settings, Transaction,
};

/// Everything the store holds, as one snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct StoreData {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub settings: Option<Settings>,
}

/// Synchronous whole-snapshot persistence per entity type, with CRUD
/// provided on top. Creation defaults live here, not in readers: a new debt
/// gets its balance filled from the principal and an active status, a new
/// budget starts with nothing spent, a new goal starts active.
pub trait RecordStore {
    fn get_transactions(&self) -> AppResult<Vec<Transaction>>;
    fn save_transactions(&self, transactions: &[Transaction]) -> AppResult<()>;

    fn get_debts(&self) -> AppResult<Vec<Debt>>;
    fn save_debts(&self, debts: &[Debt]) -> AppResult<()>;

    fn get_budgets(&self) -> AppResult<Vec<Budget>>;
    fn save_budgets(&self, budgets: &[Budget]) -> AppResult<()>;

    fn get_goals(&self) -> AppResult<Vec<Goal>>;
    fn save_goals(&self, goals: &[Goal]) -> AppResult<()>;

    fn get_settings(&self) -> AppResult<Settings>;
    fn save_settings(&self, settings: &Settings) -> AppResult<()>;

    /// Remove every stored record and reset settings to defaults.
    fn clear_all(&self) -> AppResult<()>;

    fn add_transaction(&self, new: NewTransaction) -> AppResult<Transaction> {
        new.validate()?;
        let mut transactions = self.get_transactions()?;
        let transaction = Transaction {
            id: new_id(),
            amount_cents: new.amount_cents,
            category: new.category,
            subcategory: new.subcategory,
            kind: new.kind,
            date: new.date,
            description: new.description,
            tags: new.tags,
            recurring: new.recurring,
            recurring_interval: new.recurring_interval,
        };
        transactions.push(transaction.clone());
        self.save_transactions(&transactions)?;
        Ok(transaction)
    }

    fn update_transaction(&self, updated: Transaction) -> AppResult<()> {
        let mut transactions = self.get_transactions()?;
        let slot = transactions
            .iter_mut()
            .find(|t| t.id == updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Transaction {}", updated.id)))?;
        *slot = updated;
        self.save_transactions(&transactions)
    }

    fn delete_transaction(&self, id: &str) -> AppResult<()> {
        let mut transactions = self.get_transactions()?;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            return Err(AppError::NotFound(format!("Transaction {}", id)));
        }
        self.save_transactions(&transactions)
    }

    fn add_debt(&self, new: NewDebt) -> AppResult<Debt> {
        new.validate()?;
        let mut debts = self.get_debts()?;
        let debt = Debt {
            id: new_id(),
            lender_name: new.lender_name,
            amount_cents: new.amount_cents,
            due_date: new.due_date,
            interest_rate: new.interest_rate,
            description: new.description,
            minimum_payment_cents: new.minimum_payment_cents,
            current_balance_cents: new.current_balance_cents,
            status: DebtStatus::Active,
        }
        .normalized();
        debts.push(debt.clone());
        self.save_debts(&debts)?;
        Ok(debt)
    }

    fn update_debt(&self, updated: Debt) -> AppResult<()> {
        let mut debts = self.get_debts()?;
        let slot = debts
            .iter_mut()
            .find(|d| d.id == updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Debt {}", updated.id)))?;
        *slot = updated;
        self.save_debts(&debts)
    }

    fn delete_debt(&self, id: &str) -> AppResult<()> {
        let mut debts = self.get_debts()?;
        let before = debts.len();
        debts.retain(|d| d.id != id);
        if debts.len() == before {
            return Err(AppError::NotFound(format!("Debt {}", id)));
        }
        self.save_debts(&debts)
    }

    fn add_budget(&self, new: NewBudget) -> AppResult<Budget> {
        let mut budgets = self.get_budgets()?;
        let budget = Budget {
            id: new_id(),
            category: new.category,
            limit_cents: new.limit_cents,
            spent_cents: 0,
            period: new.period,
            alert_threshold: new.alert_threshold,
            color: new.color,
        };
        budgets.push(budget.clone());
        self.save_budgets(&budgets)?;
        Ok(budget)
    }

    fn update_budget(&self, updated: Budget) -> AppResult<()> {
        let mut budgets = self.get_budgets()?;
        let slot = budgets
            .iter_mut()
            .find(|b| b.id == updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Budget {}", updated.id)))?;
        *slot = updated;
        self.save_budgets(&budgets)
    }

    fn delete_budget(&self, id: &str) -> AppResult<()> {
        let mut budgets = self.get_budgets()?;
        let before = budgets.len();
        budgets.retain(|b| b.id != id);
        if budgets.len() == before {
            return Err(AppError::NotFound(format!("Budget {}", id)));
        }
        self.save_budgets(&budgets)
    }

    fn add_goal(&self, new: NewGoal) -> AppResult<Goal> {
        let mut goals = self.get_goals()?;
        let goal = Goal {
            id: new_id(),
            name: new.name,
            target_amount_cents: new.target_amount_cents,
            current_amount_cents: new.current_amount_cents,
            target_date: new.target_date,
            category: new.category,
            description: new.description,
            priority: new.priority,
            status: GoalStatus::Active,
        };
        goals.push(goal.clone());
        self.save_goals(&goals)?;
        Ok(goal)
    }

    fn update_goal(&self, updated: Goal) -> AppResult<()> {
        let mut goals = self.get_goals()?;
        let slot = goals
            .iter_mut()
            .find(|g| g.id == updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Goal {}", updated.id)))?;
        *slot = updated;
        self.save_goals(&goals)
    }

    fn delete_goal(&self, id: &str) -> AppResult<()> {
        let mut goals = self.get_goals()?;
        let before = goals.len();
        goals.retain(|g| g.id != id);
        if goals.len() == before {
            return Err(AppError::NotFound(format!("Goal {}", id)));
        }
        self.save_goals(&goals)
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
