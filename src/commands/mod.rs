// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod session;
pub mod expenses;
pub mod dashboard;
pub mod statistics;
pub mod importer;
pub mod exporter;

use anyhow::{Context, Result};

use crate::models::User;
use crate::store::AppState;

/// Every expense operation is scoped to the active user; without a session
/// there is nothing to scope to.
pub fn require_user(state: &AppState) -> Result<User> {
    state
        .user()
        .cloned()
        .context("No active session; run 'mybank login --email <address>' first")
}
