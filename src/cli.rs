// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

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
            .help("Print as one JSON value per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .about("Personal income and expense ledger")
        .version(crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("FILE")
                .global(true)
                .help("Database file to use instead of the platform default"),
        )
        .subcommand(Command::new("init").about("Create the database and print its path"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and remove ledger entries")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .value_parser(["income", "expense"])
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("AMOUNT")
                                .required(true)
                                .help("Positive amount, e.g. 12.50"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("ID")
                                .required(true)
                                .help("Category id such as food (see `categories`)"),
                        )
                        .arg(Arg::new("note").long("note").value_name("TEXT"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("DATE")
                                .help("RFC 3339 or YYYY-MM-DD (midnight UTC); defaults to now"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List entries, newest first")
                        .arg(Arg::new("month").long("month").value_name("YYYY-MM"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_name("N")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove an entry by id")
                        .arg(Arg::new("id").value_name("ID").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views of the ledger")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Income, expense and balance totals")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_name("YYYY-MM")
                                .help("Restrict to one month instead of all time"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Per-month income and expense, newest first")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_name("N")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("daily")
                        .about("Per-day income and expense for one month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_name("YYYY-MM")
                                .required(true),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("by-category")
                        .about("Expense share per category for one month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_name("YYYY-MM")
                                .required(true),
                        ),
                )),
        )
        .subcommand(
            Command::new("categories")
                .about("Show the category vocabulary")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("TYPE")
                        .value_parser(["income", "expense"]),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the ledger to a file")
                .subcommand(
                    Command::new("transactions")
                        .about("Export every entry")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_name("FORMAT")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").value_name("FILE").required(true)),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Read entries from a file")
                .subcommand(
                    Command::new("transactions")
                        .about("Import entries from a CSV backup")
                        .arg(Arg::new("path").long("path").value_name("FILE").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the stored ledger for anomalies"))
}
