// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::models::Expense;
use crate::store::{AppState, StoreError};

use super::require_user;

pub fn handle(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    require_user(state)?;
    let path = sub.get_one::<String>("path").unwrap().trim();
    let raw = std::fs::read_to_string(path).with_context(|| format!("Open import {}", path))?;

    let batch = parse_document(&raw)?;
    let count = batch.len();
    state.append_all(batch)?;
    println!("Imported {} expenses from {}", count, path);
    Ok(())
}

/// Validates a whole export document before anything touches the store:
/// either every expense in the `expenses` array parses, or the import is
/// rejected with no state change.
pub fn parse_document(raw: &str) -> Result<Vec<Expense>, StoreError> {
    let doc: serde_json::Value = serde_json::from_str(raw)?;
    let expenses = doc.get("expenses").ok_or(StoreError::MissingExpenses)?;
    if !expenses.is_array() {
        return Err(StoreError::ExpensesNotArray);
    }
    Ok(serde_json::from_value(expenses.clone())?)
}
