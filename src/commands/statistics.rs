// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::stats::{
    average, average_per_day, category_breakdown, dominant_category, max_expense, min_expense,
    trailing_months,
};
use crate::store::AppState;
use crate::utils::{fmt_money, fmt_percent, pretty_table};

use super::require_user;

const TREND_MONTHS: u32 = 6;

pub fn handle(state: &AppState) -> Result<()> {
    let user = require_user(state)?;
    let expenses = state.expenses_for(&user.id);
    let today = chrono::Local::now().date_naive();

    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    let dominant = dominant_category(&expenses)
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    let extreme = |v: Option<Decimal>| v.map(|d| fmt_money(&d)).unwrap_or_else(|| "-".to_string());

    println!(
        "{}",
        pretty_table(
            &["Total", "Average", "Average/day", "Min", "Max", "Top category"],
            vec![vec![
                fmt_money(&total),
                fmt_money(&average(&expenses)),
                fmt_money(&average_per_day(&expenses, today)),
                extreme(min_expense(&expenses)),
                extreme(max_expense(&expenses)),
                dominant,
            ]],
        )
    );

    let trend = trailing_months(&expenses, today, TREND_MONTHS);
    let rows: Vec<Vec<String>> = trend
        .iter()
        .map(|m| {
            vec![
                m.label.clone(),
                fmt_money(&m.total),
                m.count.to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Spent", "Expenses"], rows));

    let breakdown = category_breakdown(&expenses);
    if !breakdown.is_empty() {
        let rows: Vec<Vec<String>> = breakdown
            .iter()
            .map(|s| {
                vec![
                    s.category.to_string(),
                    fmt_money(&s.total),
                    s.count.to_string(),
                    fmt_percent(&s.percentage),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Expenses", "Share"], rows)
        );
    }
    Ok(())
}
