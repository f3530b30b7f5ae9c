// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

/// Display currency. Amounts are stored as plain decimals; the currency is
/// presentation only.
pub const CURRENCY: &str = "EUR";

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Amount as entered on a form: numeric and non-negative. Anything else is
/// rejected here, before it can reach the store or the engines.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d.is_sign_negative() {
        return Err(anyhow!("Amount '{}' must not be negative", s));
    }
    Ok(d)
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{} {}", d.round_dp(2), CURRENCY)
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!("{}%", d.round_dp(1))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
