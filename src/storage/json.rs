use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;
use crate::models::{Budget, Debt, Goal, Settings, Transaction};

use super::{RecordStore, StoreData};

/// File-backed record store: one JSON document holding every entity
/// collection plus settings. A missing file reads as an empty store; a
/// corrupt file is logged and read as empty rather than failing every query.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreData {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return StoreData::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt store file, starting empty");
                StoreData::default()
            }
        }
    }

    /// Write through a sibling temp file and rename, so a crash mid-write
    /// never leaves a truncated store behind.
    fn persist(&self, data: &StoreData) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_string_pretty(data)?)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn get_transactions(&self) -> AppResult<Vec<Transaction>> {
        Ok(self.load().transactions)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> AppResult<()> {
        let mut data = self.load();
        data.transactions = transactions.to_vec();
        self.persist(&data)
    }

    fn get_debts(&self) -> AppResult<Vec<Debt>> {
        Ok(self.load().debts)
    }

    fn save_debts(&self, debts: &[Debt]) -> AppResult<()> {
        let mut data = self.load();
        data.debts = debts.to_vec();
        self.persist(&data)
    }

    fn get_budgets(&self) -> AppResult<Vec<Budget>> {
        Ok(self.load().budgets)
    }

    fn save_budgets(&self, budgets: &[Budget]) -> AppResult<()> {
        let mut data = self.load();
        data.budgets = budgets.to_vec();
        self.persist(&data)
    }

    fn get_goals(&self) -> AppResult<Vec<Goal>> {
        Ok(self.load().goals)
    }

    fn save_goals(&self, goals: &[Goal]) -> AppResult<()> {
        let mut data = self.load();
        data.goals = goals.to_vec();
        self.persist(&data)
    }

    fn get_settings(&self) -> AppResult<Settings> {
        Ok(self.load().settings.unwrap_or_default())
    }

    fn save_settings(&self, settings: &Settings) -> AppResult<()> {
        let mut data = self.load();
        data.settings = Some(settings.clone());
        self.persist(&data)
    }

    fn clear_all(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Cleared all stored data");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
