// Copyright (c) 2025 MyBank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("mybank")
        .about("Single-user expense tracking, dashboards, and statistics")
        .version(crate_version!())
        .subcommand_required(false)
        .subcommand(
            Command::new("login").about("Start a session").arg(
                Arg::new("email")
                    .long("email")
                    .required(true)
                    .help("Email address; the display name is its local part"),
            ),
        )
        .subcommand(Command::new("logout").about("End the session"))
        .subcommand(Command::new("whoami").about("Show the active user"))
        .subcommand(
            Command::new("expense")
                .about("Record, list, edit, and delete expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Food|Transport|Leisure|Health|Shopping|Housing|Education|Other"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses with search, filter, and sort")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive substring over descriptions"),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .default_value("date")
                                .help("date|amount|description|category"),
                        )
                        .arg(
                            Arg::new("order")
                                .long("order")
                                .default_value("desc")
                                .help("asc|desc"),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit an expense in place")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("date").long("date")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense")
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                ),
        )
        .subcommand(
            Command::new("dashboard").about("This month at a glance vs last month"),
        )
        .subcommand(
            Command::new("stats").about("All-time statistics and the 6-month trend"),
        )
        .subcommand(
            Command::new("export")
                .about("Export the active user's data to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .help("json|csv"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("import")
                .about("Append expenses from an export document")
                .arg(Arg::new("path").long("path").required(true)),
        )
}
