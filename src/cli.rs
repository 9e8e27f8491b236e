// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

/// Transaction filter options shared by list, summary and export.
pub fn filter_args() -> Vec<Arg> {
    vec![
        Arg::new("search")
            .long("search")
            .short('s')
            .help("Case-insensitive match on title, category, account or currency"),
        Arg::new("type")
            .long("type")
            .value_parser(["all", "income", "expense"])
            .default_value("all"),
        Arg::new("category").long("category"),
        Arg::new("account").long("account"),
        Arg::new("currency").long("currency").help("Exact currency code"),
        Arg::new("kind")
            .long("kind")
            .value_parser(["all", "fiat", "crypto"])
            .default_value("all"),
        Arg::new("range")
            .long("range")
            .value_parser(["all", "this-week", "this-month"])
            .default_value("all"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("finboard")
        .about("Finboard: multi-currency transaction dashboard")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .env("FINBOARD_CONFIG")
                .global(true)
                .help("Path to config.json"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .help("JSON array of transactions to use instead of the sample set"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .help("Reference date for this-week/this-month (YYYY-MM-DD)"),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("list")
                        .args(filter_args())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("date").long("date"))
                        .arg(
                            Arg::new("direction")
                                .long("direction")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("currency").long("currency").default_value("USD"))
                        .args(json_flags()),
                )
                .subcommand(Command::new("categories"))
                .subcommand(Command::new("accounts")),
        )
        .subcommand(
            Command::new("report").about("Totals").subcommand(
                Command::new("summary")
                    .args(filter_args())
                    .args(json_flags()),
            ),
        )
        .subcommand(
            Command::new("currency")
                .about("Currency registry")
                .subcommand(
                    Command::new("list").arg(
                        Arg::new("kind")
                            .long("kind")
                            .value_parser(["all", "fiat", "crypto"])
                            .default_value("all"),
                    ),
                )
                .subcommand(
                    Command::new("format")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("code").long("code").required(true)),
                ),
        )
        .subcommand(
            Command::new("fx")
                .about("Reference-currency estimates")
                .subcommand(Command::new("rates"))
                .subcommand(
                    Command::new("convert")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to")),
                ),
        )
        .subcommand(
            Command::new("portfolio")
                .about("Holdings and allocation")
                .subcommand(
                    Command::new("holdings")
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(["allocation", "value", "return"])
                                .default_value("allocation"),
                        )
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("allocation")
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(["allocation", "value", "change"])
                                .default_value("allocation"),
                        )
                        .args(json_flags()),
                ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(Arg::new("format").long("format").required(true))
                    .arg(Arg::new("out").long("out").required(true))
                    .args(filter_args()),
            ),
        )
}
