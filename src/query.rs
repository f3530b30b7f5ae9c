// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;

use crate::models::{Category, Expense, SortField, SortOrder};

/// Listing criteria. An empty search pattern matches everything, as does an
/// unset category.
#[derive(Debug, Clone)]
pub struct ExpenseFilter {
    pub search: String,
    pub category: Option<Category>,
    pub sort: SortField,
    pub order: SortOrder,
}

impl Default for ExpenseFilter {
    fn default() -> Self {
        ExpenseFilter {
            search: String::new(),
            category: None,
            sort: SortField::Date,
            order: SortOrder::Desc,
        }
    }
}

/// Produces the ordered subsequence of `expenses` matching the filter.
/// Always a fresh view; the input order is never mutated. The sort is
/// stable, so records comparing equal keep their original relative order.
pub fn filter_and_sort(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    let pattern = filter.search.to_lowercase();
    let mut view: Vec<Expense> = expenses
        .iter()
        .filter(|e| pattern.is_empty() || e.description.to_lowercase().contains(&pattern))
        .filter(|e| filter.category.map_or(true, |c| e.category == c))
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        let ord = match filter.sort {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a.amount.cmp(&b.amount),
            SortField::Description => a
                .description
                .to_lowercase()
                .cmp(&b.description.to_lowercase()),
            SortField::Category => a.category.label().cmp(b.category.label()),
        };
        match filter.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    view
}

/// The `n` most recent expenses by date, newest first.
pub fn most_recent(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut view = expenses.to_vec();
    view.sort_by(|a, b| match b.date.cmp(&a.date) {
        Ordering::Equal => b.id.cmp(&a.id),
        ord => ord,
    });
    view.truncate(n);
    view
}
