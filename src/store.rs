// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Expense, ExpensePatch, User};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.mybank", "MyBank", "mybank"));

const USER_BLOB: &str = "user.json";
const EXPENSES_BLOB: &str = "expenses.json";

/// Errors raised at the deserialization boundary. Everything else in the
/// store is total: missing blobs mean empty state, missing ids are no-ops.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Malformed data in {path}: {source}")]
    MalformedBlob {
        path: String,
        source: serde_json::Error,
    },
    #[error("Import document is not valid JSON: {0}")]
    MalformedImport(#[from] serde_json::Error),
    #[error("Import document has no 'expenses' field")]
    MissingExpenses,
    #[error("Import 'expenses' field is not an array")]
    ExpensesNotArray,
}

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// Whole-application state: the active user and the expense collection,
/// loaded once at startup and written back after every mutation. Commands
/// receive this by reference; nothing reads the blobs ambiently.
pub struct AppState {
    dir: PathBuf,
    user: Option<User>,
    expenses: Vec<Expense>,
}

impl AppState {
    /// Loads both blobs from `dir`. A missing blob yields empty state; a
    /// blob that exists but fails to parse is an error, never a silent wipe.
    pub fn load(dir: &Path) -> Result<Self> {
        let user = read_blob::<User>(&dir.join(USER_BLOB))?;
        let expenses = read_blob::<Vec<Expense>>(&dir.join(EXPENSES_BLOB))?.unwrap_or_default();
        Ok(AppState {
            dir: dir.to_path_buf(),
            user,
            expenses,
        })
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Records the nominal credential. No password is checked; the display
    /// name is the local part of the email.
    pub fn login(&mut self, email: &str) -> Result<User> {
        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: "1".to_string(),
            name,
            email: email.to_string(),
        };
        write_blob(&self.dir.join(USER_BLOB), &user)?;
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<()> {
        let path = self.dir.join(USER_BLOB);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Remove user blob {}", path.display()))?;
        }
        self.user = None;
        Ok(())
    }

    /// All expenses owned by `owner_id`, in store order. Every query and
    /// aggregation goes through this scope.
    pub fn expenses_for(&self, owner_id: &str) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn next_id(&self) -> String {
        let max = self
            .expenses
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    pub fn append(&mut self, expense: Expense) -> Result<()> {
        self.expenses.push(expense);
        self.save_expenses()
    }

    /// Appends a whole batch and persists once. Used by import.
    pub fn append_all(&mut self, batch: Vec<Expense>) -> Result<()> {
        self.expenses.extend(batch);
        self.save_expenses()
    }

    /// Patches the record in place, preserving `id` and `owner_id`. A
    /// missing id is a no-op; the return value only tells the caller
    /// whether anything was touched.
    pub fn update(&mut self, id: &str, patch: &ExpensePatch) -> Result<bool> {
        let Some(e) = self.expenses.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        if let Some(amount) = patch.amount {
            e.amount = amount;
        }
        if let Some(ref description) = patch.description {
            e.description = description.clone();
        }
        if let Some(category) = patch.category {
            e.category = category;
        }
        if let Some(date) = patch.date {
            e.date = date;
        }
        self.save_expenses()?;
        Ok(true)
    }

    /// Unconditional delete; confirmation lives at the CLI boundary.
    /// Missing id is a no-op.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Ok(false);
        }
        self.save_expenses()?;
        Ok(true)
    }

    fn save_expenses(&self) -> Result<()> {
        write_blob(&self.dir.join(EXPENSES_BLOB), &self.expenses)
    }
}

fn read_blob<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).with_context(|| format!("Read {}", path.display()))?;
    let value = serde_json::from_str(&raw).map_err(|source| StoreError::MalformedBlob {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(value))
}

fn write_blob<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(path, raw).with_context(|| format!("Write {}", path.display()))?;
    Ok(())
}
