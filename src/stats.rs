// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation over an owner-scoped expense collection. Every function is
//! pure and total: the reference date is supplied by the caller, and the
//! zero-division and empty-collection cases resolve to explicit guard
//! values rather than errors.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Expense};

/// One calendar month of the trailing series.
#[derive(Debug, Clone, Serialize)]
pub struct MonthStat {
    pub label: String, // YYYY-MM
    pub year: i32,
    pub month: u32,
    pub total: Decimal,
    pub count: usize,
}

/// Per-category aggregate over a collection.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStat {
    pub category: Category,
    pub total: Decimal,
    pub count: usize,
    pub percentage: Decimal,
}

/// The expenses dated in the given calendar month, in input order.
pub fn month_slice(expenses: &[Expense], year: i32, month: u32) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .cloned()
        .collect()
}

/// Sum of amounts dated in the given calendar month.
pub fn monthly_total(expenses: &[Expense], year: i32, month: u32) -> Decimal {
    expenses
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .map(|e| e.amount)
        .sum()
}

pub fn monthly_count(expenses: &[Expense], year: i32, month: u32) -> usize {
    expenses
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .count()
}

/// Month arithmetic that wraps the year boundary: January minus one is
/// December of the prior year.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn months_before(year: i32, month: u32, k: u32) -> (i32, u32) {
    let mut y = year;
    let mut m = month;
    for _ in 0..k {
        (y, m) = previous_month(y, m);
    }
    (y, m)
}

/// Percentage change between two period totals. Exactly zero when the
/// previous period's total is zero, whatever the current total is.
pub fn month_over_month_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    (current - previous) / previous * Decimal::ONE_HUNDRED
}

/// Totals and counts for the last `n` calendar months ending at the
/// reference month inclusive, oldest first.
pub fn trailing_months(expenses: &[Expense], reference: NaiveDate, n: u32) -> Vec<MonthStat> {
    (0..n)
        .rev()
        .map(|back| {
            let (year, month) = months_before(reference.year(), reference.month(), back);
            MonthStat {
                label: format!("{:04}-{:02}", year, month),
                year,
                month,
                total: monthly_total(expenses, year, month),
                count: monthly_count(expenses, year, month),
            }
        })
        .collect()
}

/// Per-category total, count, and share of the grand total, filtered to
/// categories actually spent on and sorted by total descending. Shares are
/// zero when the grand total is zero (the breakdown is then empty anyway,
/// since every category total is zero too).
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryStat> {
    let grand: Decimal = expenses.iter().map(|e| e.amount).sum();
    let mut stats: Vec<CategoryStat> = Category::ALL
        .iter()
        .map(|&category| {
            let matching: Vec<&Expense> =
                expenses.iter().filter(|e| e.category == category).collect();
            let total: Decimal = matching.iter().map(|e| e.amount).sum();
            let percentage = if grand.is_zero() {
                Decimal::ZERO
            } else {
                total / grand * Decimal::ONE_HUNDRED
            };
            CategoryStat {
                category,
                total,
                count: matching.len(),
                percentage,
            }
        })
        .filter(|s| !s.total.is_zero())
        .collect();
    stats.sort_by(|a, b| b.total.cmp(&a.total));
    stats
}

/// Mean amount per expense; zero for an empty collection.
pub fn average(expenses: &[Expense]) -> Decimal {
    if expenses.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    total / Decimal::from(expenses.len())
}

/// Reference-month total divided by the days elapsed in that month (the
/// reference day-of-month). One consistent day-count basis everywhere.
pub fn average_per_day(expenses: &[Expense], reference: NaiveDate) -> Decimal {
    let total = monthly_total(expenses, reference.year(), reference.month());
    total / Decimal::from(reference.day())
}

pub fn max_expense(expenses: &[Expense]) -> Option<Decimal> {
    expenses.iter().map(|e| e.amount).max()
}

pub fn min_expense(expenses: &[Expense]) -> Option<Decimal> {
    expenses.iter().map(|e| e.amount).min()
}

/// Heaviest-spend category, i.e. the head of the sorted breakdown.
pub fn dominant_category(expenses: &[Expense]) -> Option<Category> {
    category_breakdown(expenses).first().map(|s| s.category)
}
