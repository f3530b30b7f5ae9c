// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use mybank::models::{Category, Expense, ExpensePatch};
use mybank::store::AppState;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn exp(id: &str, owner: &str, amount: &str) -> Expense {
    Expense {
        id: id.to_string(),
        amount: amount.parse::<Decimal>().unwrap(),
        description: "coffee".to_string(),
        category: Category::Food,
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        owner_id: owner.to_string(),
    }
}

#[test]
fn append_round_trips_through_the_blob() {
    let dir = tempdir().unwrap();
    let mut state = AppState::load(dir.path()).unwrap();
    state.append(exp("1", "1", "4.20")).unwrap();
    state.append(exp("2", "1", "9.99")).unwrap();

    let reloaded = AppState::load(dir.path()).unwrap();
    let expenses = reloaded.expenses_for("1");
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].id, "1");
    assert_eq!(expenses[1].amount, "9.99".parse::<Decimal>().unwrap());
}

#[test]
fn update_patches_in_place_and_preserves_identity() {
    let dir = tempdir().unwrap();
    let mut state = AppState::load(dir.path()).unwrap();
    state.append(exp("7", "1", "5")).unwrap();

    let patch = ExpensePatch {
        amount: Some("6.50".parse().unwrap()),
        category: Some(Category::Leisure),
        ..ExpensePatch::default()
    };
    assert!(state.update("7", &patch).unwrap());

    let reloaded = AppState::load(dir.path()).unwrap();
    let e = &reloaded.expenses_for("1")[0];
    assert_eq!(e.id, "7");
    assert_eq!(e.owner_id, "1");
    assert_eq!(e.amount, "6.50".parse::<Decimal>().unwrap());
    assert_eq!(e.category, Category::Leisure);
    assert_eq!(e.description, "coffee");
}

#[test]
fn update_and_remove_on_missing_id_are_no_ops() {
    let dir = tempdir().unwrap();
    let mut state = AppState::load(dir.path()).unwrap();
    state.append(exp("1", "1", "5")).unwrap();

    assert!(!state.update("999", &ExpensePatch::default()).unwrap());
    assert!(!state.remove("999").unwrap());

    let reloaded = AppState::load(dir.path()).unwrap();
    assert_eq!(reloaded.expenses_for("1").len(), 1);
}

#[test]
fn remove_deletes_and_persists() {
    let dir = tempdir().unwrap();
    let mut state = AppState::load(dir.path()).unwrap();
    state.append(exp("1", "1", "5")).unwrap();
    state.append(exp("2", "1", "6")).unwrap();

    assert!(state.remove("1").unwrap());
    let reloaded = AppState::load(dir.path()).unwrap();
    let expenses = reloaded.expenses_for("1");
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].id, "2");
}

#[test]
fn queries_are_owner_scoped() {
    let dir = tempdir().unwrap();
    let mut state = AppState::load(dir.path()).unwrap();
    state.append(exp("1", "1", "5")).unwrap();
    state.append(exp("2", "2", "100")).unwrap();

    let mine = state.expenses_for("1");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, "1");
    assert!(state.expenses_for("3").is_empty());
}

#[test]
fn next_id_advances_past_the_highest_numeric_id() {
    let dir = tempdir().unwrap();
    let mut state = AppState::load(dir.path()).unwrap();
    assert_eq!(state.next_id(), "1");
    state.append(exp("41", "1", "5")).unwrap();
    assert_eq!(state.next_id(), "42");
}

#[test]
fn login_and_logout_round_trip_the_user_blob() {
    let dir = tempdir().unwrap();
    let mut state = AppState::load(dir.path()).unwrap();
    state.login("ada@example.com").unwrap();

    let reloaded = AppState::load(dir.path()).unwrap();
    let user = reloaded.user().unwrap();
    assert_eq!(user.name, "ada");
    assert_eq!(user.email, "ada@example.com");

    let mut state = reloaded;
    state.logout().unwrap();
    assert!(AppState::load(dir.path()).unwrap().user().is_none());
}

#[test]
fn malformed_expense_blob_is_an_error_not_a_wipe() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("expenses.json"), "{not json").unwrap();
    assert!(AppState::load(dir.path()).is_err());
}
