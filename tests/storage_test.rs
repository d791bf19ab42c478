//! Integration tests for the record-store collaborator and export.

mod common;

use common::date;
use tempfile::tempdir;
use wealthwatch::error::AppError;
use wealthwatch::export::{export_all, transactions_to_csv};
use wealthwatch::models::{
    BudgetPeriod, DebtStatus, GoalCategory, NewBudget, NewDebt, NewGoal, NewTransaction, Priority,
    Settings, Theme, TransactionType,
};
use wealthwatch::storage::{JsonStore, MemoryStore, RecordStore};

fn new_transaction(amount_cents: i64) -> NewTransaction {
    NewTransaction {
        amount_cents,
        category: "Food".into(),
        subcategory: Some("Groceries".into()),
        kind: TransactionType::Expense,
        date: date(2024, 6, 1),
        description: "Weekly shop".into(),
        tags: vec!["essentials".into()],
        recurring: false,
        recurring_interval: None,
    }
}

fn new_debt(amount_cents: i64) -> NewDebt {
    NewDebt {
        lender_name: "Bank".into(),
        amount_cents,
        due_date: date(2025, 1, 1),
        interest_rate: Some(4.5),
        description: String::new(),
        minimum_payment_cents: None,
        current_balance_cents: None,
    }
}

#[test]
fn test_json_store_transaction_crud() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("wealthwatch.json"));

    let created = store.add_transaction(new_transaction(5_000)).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(store.get_transactions().unwrap().len(), 1);

    let mut updated = created.clone();
    updated.amount_cents = 7_500;
    store.update_transaction(updated).unwrap();
    assert_eq!(store.get_transactions().unwrap()[0].amount_cents, 7_500);

    store.delete_transaction(&created.id).unwrap();
    assert!(store.get_transactions().unwrap().is_empty());
}

/// Records survive a fresh store instance pointed at the same file.
#[test]
fn test_json_store_persists_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wealthwatch.json");

    let store = JsonStore::new(&path);
    store.add_transaction(new_transaction(5_000)).unwrap();

    let reopened = JsonStore::new(&path);
    let transactions = reopened.get_transactions().unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].category, "Food");
    assert_eq!(transactions[0].date, date(2024, 6, 1));
}

/// Creation defaults are applied when a debt enters the store, not at read
/// time.
#[test]
fn test_add_debt_applies_creation_defaults() {
    let store = MemoryStore::new();
    let debt = store.add_debt(new_debt(100_000)).unwrap();

    assert_eq!(debt.status, DebtStatus::Active);
    assert_eq!(debt.current_balance_cents, Some(100_000));

    let stored = store.get_debts().unwrap();
    assert_eq!(stored[0].current_balance_cents, Some(100_000));
}

#[test]
fn test_add_budget_starts_unspent_and_goal_starts_active() {
    let store = MemoryStore::new();

    let budget = store
        .add_budget(NewBudget {
            category: "Food".into(),
            limit_cents: 50_000,
            period: BudgetPeriod::Monthly,
            alert_threshold: Some(0.8),
            color: None,
        })
        .unwrap();
    assert_eq!(budget.spent_cents, 0);

    let goal = store
        .add_goal(NewGoal {
            name: "Emergency fund".into(),
            target_amount_cents: 1_000_000,
            current_amount_cents: 0,
            target_date: date(2025, 6, 1),
            category: GoalCategory::Emergency,
            description: None,
            priority: Priority::High,
        })
        .unwrap();
    assert_eq!(goal.status, wealthwatch::models::GoalStatus::Active);
}

#[test]
fn test_unknown_ids_are_not_found() {
    let store = MemoryStore::new();

    assert!(matches!(
        store.delete_transaction("missing"),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.delete_debt("missing"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_validation_rejects_bad_records() {
    let store = MemoryStore::new();

    assert!(matches!(
        store.add_transaction(new_transaction(0)),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        store.add_debt(new_debt(-100)),
        Err(AppError::Validation(_))
    ));
    assert!(store.get_transactions().unwrap().is_empty());
}

#[test]
fn test_settings_default_and_round_trip() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("wealthwatch.json"));

    let settings = store.get_settings().unwrap();
    assert_eq!(settings.currency, "USD");
    assert_eq!(settings.theme, Theme::Light);
    assert!(settings.notifications);
    assert!(!settings.auto_backup);

    store
        .save_settings(&Settings {
            currency: "EUR".into(),
            theme: Theme::Dark,
            notifications: false,
            auto_backup: true,
        })
        .unwrap();
    assert_eq!(store.get_settings().unwrap().currency, "EUR");
}

#[test]
fn test_clear_all_empties_the_store() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("wealthwatch.json"));

    store.add_transaction(new_transaction(5_000)).unwrap();
    store.add_debt(new_debt(100_000)).unwrap();
    store.clear_all().unwrap();

    assert!(store.get_transactions().unwrap().is_empty());
    assert!(store.get_debts().unwrap().is_empty());
    assert_eq!(store.get_settings().unwrap().currency, "USD");
}

/// A corrupt data file reads as empty instead of failing every query.
#[test]
fn test_corrupt_file_reads_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wealthwatch.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonStore::new(&path);
    assert!(store.get_transactions().unwrap().is_empty());
    assert!(store.get_debts().unwrap().is_empty());
}

#[test]
fn test_export_all_and_csv() {
    let store = MemoryStore::new();
    store.add_transaction(new_transaction(5_000)).unwrap();
    store.add_debt(new_debt(100_000)).unwrap();

    let export = export_all(&store).unwrap();
    assert_eq!(export.transactions.len(), 1);
    assert_eq!(export.debts.len(), 1);
    assert!(!export.export_date.is_empty());

    let json: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();
    assert_eq!(json["transactions"][0]["type"], "expense");
    assert_eq!(json["debts"][0]["status"], "active");
    assert_eq!(json["settings"]["currency"], "USD");

    let csv = transactions_to_csv(&export.transactions).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,type,category,subcategory,amount_cents,description,tags,recurring"
    );
    let row = lines.next().unwrap();
    assert!(row.contains("Food"));
    assert!(row.contains("5000"));
    assert!(row.contains("essentials"));
}
