// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::anyhow;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A single expense entry. `id` and `owner_id` are assigned at creation and
/// never change; edits only touch the remaining fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
}

/// Closed category set; not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Leisure,
    Health,
    Shopping,
    Housing,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Leisure,
        Category::Health,
        Category::Shopping,
        Category::Housing,
        Category::Education,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Leisure => "Leisure",
            Category::Health => "Health",
            Category::Shopping => "Shopping",
            Category::Housing => "Housing",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("Unknown category '{}'", s))
    }
}

/// Sort key for expense listings. Closed set; the CLI boundary rejects
/// anything else, so there is no "unknown field" fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Amount,
    Description,
    Category,
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "amount" => Ok(SortField::Amount),
            "description" => Ok(SortField::Description),
            "category" => Ok(SortField::Category),
            other => Err(anyhow!(
                "Unknown sort field '{}' (use date|amount|description|category)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(anyhow!("Unknown sort order '{}' (use asc|desc)", other)),
        }
    }
}

/// Partial edit applied by `AppState::update`; `None` fields keep their
/// current value. `id` and `owner_id` are deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}
