// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use mybank::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let dir = store::data_dir()?;
    let mut state = store::AppState::load(&dir)?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::session::login(&mut state, sub)?,
        Some(("logout", _)) => commands::session::logout(&mut state)?,
        Some(("whoami", _)) => commands::session::whoami(&state)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut state, sub)?,
        Some(("dashboard", _)) => commands::dashboard::handle(&state)?,
        Some(("stats", _)) => commands::statistics::handle(&state)?,
        Some(("import", sub)) => commands::importer::handle(&mut state, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&state, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
