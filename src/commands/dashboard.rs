// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Datelike;

use crate::query::most_recent;
use crate::stats::{
    average_per_day, category_breakdown, month_over_month_change, month_slice, monthly_total,
    previous_month,
};
use crate::store::AppState;
use crate::utils::{fmt_money, fmt_percent, pretty_table};

use super::require_user;

pub fn handle(state: &AppState) -> Result<()> {
    let user = require_user(state)?;
    let expenses = state.expenses_for(&user.id);
    let today = chrono::Local::now().date_naive();

    let (year, month) = (today.year(), today.month());
    let (prev_year, prev_month) = previous_month(year, month);
    let this_month = month_slice(&expenses, year, month);
    let total = monthly_total(&expenses, year, month);
    let previous = monthly_total(&expenses, prev_year, prev_month);
    let change = month_over_month_change(total, previous);

    println!("Dashboard for {}, {:04}-{:02}", user.name, year, month);
    println!(
        "{}",
        pretty_table(
            &["This month", "Expenses", "vs last month", "Average/day"],
            vec![vec![
                fmt_money(&total),
                this_month.len().to_string(),
                fmt_percent(&change),
                fmt_money(&average_per_day(&expenses, today)),
            ]],
        )
    );

    let breakdown = category_breakdown(&this_month);
    if breakdown.is_empty() {
        println!("No expenses this month");
    } else {
        let rows: Vec<Vec<String>> = breakdown
            .iter()
            .map(|s| {
                vec![
                    s.category.to_string(),
                    fmt_money(&s.total),
                    fmt_percent(&s.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }

    let recent = most_recent(&expenses, 5);
    if !recent.is_empty() {
        let rows: Vec<Vec<String>> = recent
            .iter()
            .map(|e| {
                vec![
                    e.date.to_string(),
                    e.description.clone(),
                    e.category.to_string(),
                    fmt_money(&e.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}
