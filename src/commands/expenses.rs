// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;

use crate::models::{Expense, ExpensePatch};
use crate::query::{ExpenseFilter, filter_and_sort};
use crate::store::AppState;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};

use super::require_user;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("edit", sub)) => edit(state, sub)?,
        Some(("rm", sub)) => rm(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let user = require_user(state)?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().trim();
    if description.is_empty() {
        return Err(anyhow!("Description must not be empty"));
    }
    let category = sub.get_one::<String>("category").unwrap().parse()?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let expense = Expense {
        id: state.next_id(),
        amount,
        description: description.to_string(),
        category,
        date,
        owner_id: user.id,
    };
    let line = format!(
        "Recorded {} for '{}' ({}) on {}",
        fmt_money(&expense.amount),
        expense.description,
        expense.category,
        expense.date
    );
    state.append(expense)?;
    println!("{}", line);
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let user = require_user(state)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let filter = ExpenseFilter {
        search: sub
            .get_one::<String>("search")
            .cloned()
            .unwrap_or_default(),
        category: sub
            .get_one::<String>("category")
            .map(|s| s.parse())
            .transpose()?,
        sort: sub.get_one::<String>("sort").unwrap().parse()?,
        order: sub.get_one::<String>("order").unwrap().parse()?,
    };

    let data = filter_and_sort(&state.expenses_for(&user.id), &filter);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let total: Decimal = data.iter().map(|e| e.amount).sum();
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.clone(),
                    e.date.to_string(),
                    e.description.clone(),
                    e.category.to_string(),
                    fmt_money(&e.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Description", "Category", "Amount"], rows)
        );
        println!("{} expenses, total {}", data.len(), fmt_money(&total));
    }
    Ok(())
}

fn edit(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    require_user(state)?;
    let id = sub.get_one::<String>("id").unwrap();
    let patch = ExpensePatch {
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_amount(s))
            .transpose()?,
        description: match sub.get_one::<String>("description") {
            Some(s) if s.trim().is_empty() => {
                return Err(anyhow!("Description must not be empty"));
            }
            other => other.map(|s| s.trim().to_string()),
        },
        category: sub
            .get_one::<String>("category")
            .map(|s| s.parse())
            .transpose()?,
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date(s))
            .transpose()?,
    };

    if state.update(id, &patch)? {
        println!("Updated expense {}", id);
    } else {
        println!("No expense with id {}", id);
    }
    Ok(())
}

// Delete is a two-step protocol: the prompt lives here, the store removal
// itself is unconditional.
fn rm(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    require_user(state)?;
    let id = sub.get_one::<String>("id").unwrap();
    let Some(expense) = state.find(id) else {
        println!("No expense with id {}", id);
        return Ok(());
    };

    if !sub.get_flag("yes") {
        print!(
            "Delete {} '{}' from {}? [y/N] ",
            fmt_money(&expense.amount),
            expense.description,
            expense.date
        );
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        let answer = answer.trim().to_ascii_lowercase();
        if answer != "y" && answer != "yes" {
            println!("Kept expense {}", id);
            return Ok(());
        }
    }

    state.remove(id)?;
    println!("Deleted expense {}", id);
    Ok(())
}
