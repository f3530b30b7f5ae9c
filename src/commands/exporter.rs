// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{Expense, User};
use crate::store::AppState;

use super::require_user;

/// The JSON export document; `expenses` is already scoped to the exporting
/// user.
#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub user: User,
    pub expenses: Vec<Expense>,
    #[serde(rename = "exportDate")]
    pub export_date: String,
}

pub fn handle(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let user = require_user(state)?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let expenses = state.expenses_for(&user.id);

    match fmt.as_str() {
        "json" => {
            let doc = ExportDocument {
                user,
                expenses,
                export_date: chrono::Utc::now().to_rfc3339(),
            };
            std::fs::write(out, serde_json::to_string_pretty(&doc)?)
                .with_context(|| format!("Write export to {}", out))?;
        }
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Open CSV {}", out))?;
            wtr.write_record(["id", "date", "description", "category", "amount"])?;
            for e in &expenses {
                wtr.write_record([
                    e.id.as_str(),
                    &e.date.to_string(),
                    e.description.as_str(),
                    e.category.label(),
                    &e.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            eprintln!("Unknown format: {} (use json|csv)", fmt);
            return Ok(());
        }
    }
    println!("Exported expenses to {}", out);
    Ok(())
}
