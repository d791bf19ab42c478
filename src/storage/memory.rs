use std::sync::{Mutex, MutexGuard};

use crate::error::{AppError, AppResult};
use crate::models::{Budget, Debt, Goal, Settings, Transaction};

use super::{RecordStore, StoreData};

/// In-memory record store for tests and embedding without a data file.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, StoreData>> {
        self.data
            .lock()
            .map_err(|_| AppError::Internal("Record store lock poisoned".into()))
    }
}

impl RecordStore for MemoryStore {
    fn get_transactions(&self) -> AppResult<Vec<Transaction>> {
        Ok(self.lock()?.transactions.clone())
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> AppResult<()> {
        self.lock()?.transactions = transactions.to_vec();
        Ok(())
    }

    fn get_debts(&self) -> AppResult<Vec<Debt>> {
        Ok(self.lock()?.debts.clone())
    }

    fn save_debts(&self, debts: &[Debt]) -> AppResult<()> {
        self.lock()?.debts = debts.to_vec();
        Ok(())
    }

    fn get_budgets(&self) -> AppResult<Vec<Budget>> {
        Ok(self.lock()?.budgets.clone())
    }

    fn save_budgets(&self, budgets: &[Budget]) -> AppResult<()> {
        self.lock()?.budgets = budgets.to_vec();
        Ok(())
    }

    fn get_goals(&self) -> AppResult<Vec<Goal>> {
        Ok(self.lock()?.goals.clone())
    }

    fn save_goals(&self, goals: &[Goal]) -> AppResult<()> {
        self.lock()?.goals = goals.to_vec();
        Ok(())
    }

    fn get_settings(&self) -> AppResult<Settings> {
        Ok(self.lock()?.settings.clone().unwrap_or_default())
    }

    fn save_settings(&self, settings: &Settings) -> AppResult<()> {
        self.lock()?.settings = Some(settings.clone());
        Ok(())
    }

    fn clear_all(&self) -> AppResult<()> {
        *self.lock()? = StoreData::default();
        Ok(())
    }
}
