// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::AppState;

pub fn login(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let user = state.login(email)?;
    println!("Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

pub fn logout(state: &mut AppState) -> Result<()> {
    state.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(state: &AppState) -> Result<()> {
    match state.user() {
        Some(user) => println!("{} <{}>", user.name, user.email),
        None => println!("No active session"),
    }
    Ok(())
}
