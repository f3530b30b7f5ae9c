// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use mybank::models::{Category, Expense, SortField, SortOrder};
use mybank::query::{ExpenseFilter, filter_and_sort, most_recent};
use rust_decimal::Decimal;

fn exp(id: &str, amount: &str, description: &str, category: Category, date: &str) -> Expense {
    Expense {
        id: id.to_string(),
        amount: amount.parse::<Decimal>().unwrap(),
        description: description.to_string(),
        category,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        owner_id: "1".to_string(),
    }
}

fn sample() -> Vec<Expense> {
    vec![
        exp("1", "12.50", "Groceries at the market", Category::Food, "2025-03-02"),
        exp("2", "40.00", "Monthly metro pass", Category::Transport, "2025-03-01"),
        exp("3", "8.00", "Cinema ticket", Category::Leisure, "2025-02-20"),
        exp("4", "55.90", "New shoes", Category::Shopping, "2025-03-10"),
    ]
}

#[test]
fn empty_filter_keeps_every_record() {
    let data = sample();
    let view = filter_and_sort(&data, &ExpenseFilter::default());
    assert_eq!(view.len(), data.len());
    for e in &data {
        assert!(view.contains(e));
    }
    // default sort is newest first
    assert_eq!(view[0].id, "4");
    assert_eq!(view[3].id, "3");
}

#[test]
fn search_is_case_insensitive_substring() {
    let data = sample();
    let filter = ExpenseFilter {
        search: "MARKET".to_string(),
        ..ExpenseFilter::default()
    };
    let view = filter_and_sort(&data, &filter);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "1");
}

#[test]
fn category_constraint_is_exact() {
    let data = sample();
    let filter = ExpenseFilter {
        category: Some(Category::Transport),
        ..ExpenseFilter::default()
    };
    let view = filter_and_sort(&data, &filter);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "2");
}

#[test]
fn amount_asc_and_desc_are_exact_reverses() {
    let data = sample();
    let asc = filter_and_sort(
        &data,
        &ExpenseFilter {
            sort: SortField::Amount,
            order: SortOrder::Asc,
            ..ExpenseFilter::default()
        },
    );
    let mut desc = filter_and_sort(
        &data,
        &ExpenseFilter {
            sort: SortField::Amount,
            order: SortOrder::Desc,
            ..ExpenseFilter::default()
        },
    );
    desc.reverse();
    assert_eq!(asc, desc);
    let ids: Vec<&str> = asc.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2", "4"]);
}

#[test]
fn description_sort_ignores_case() {
    let data = vec![
        exp("1", "1", "zebra print", Category::Other, "2025-01-01"),
        exp("2", "1", "Apple pie", Category::Food, "2025-01-02"),
        exp("3", "1", "mango juice", Category::Food, "2025-01-03"),
    ];
    let view = filter_and_sort(
        &data,
        &ExpenseFilter {
            sort: SortField::Description,
            order: SortOrder::Asc,
            ..ExpenseFilter::default()
        },
    );
    let ids: Vec<&str> = view.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["2", "3", "1"]);
}

#[test]
fn equal_keys_keep_original_relative_order() {
    let data = vec![
        exp("a", "10", "first", Category::Food, "2025-05-05"),
        exp("b", "20", "second", Category::Food, "2025-05-05"),
        exp("c", "30", "third", Category::Food, "2025-05-05"),
    ];
    let view = filter_and_sort(
        &data,
        &ExpenseFilter {
            sort: SortField::Date,
            order: SortOrder::Asc,
            ..ExpenseFilter::default()
        },
    );
    let ids: Vec<&str> = view.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn empty_input_yields_empty_output() {
    let view = filter_and_sort(&[], &ExpenseFilter::default());
    assert!(view.is_empty());
}

#[test]
fn most_recent_takes_newest_first() {
    let data = sample();
    let recent = most_recent(&data, 2);
    let ids: Vec<&str> = recent.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["4", "1"]);
}
