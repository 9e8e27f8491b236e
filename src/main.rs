// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use finboard::{cli, commands, config, session::Session, utils};

fn init_tracing(config_path: Option<&std::path::Path>) {
    // Peek at the configured level; a broken config is reported properly by Session::open.
    let level = config::load(config_path)
        .map(|c| c.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let data_path = matches.get_one::<String>("data").map(PathBuf::from);
    init_tracing(config_path.as_deref());

    let today = match matches.get_one::<String>("today") {
        Some(raw) => utils::parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    let mut session = Session::open(config_path.as_deref(), data_path.as_deref(), today)?;

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&mut session, sub)?,
        Some(("report", sub)) => commands::reports::handle(&session, sub)?,
        Some(("currency", sub)) => commands::currencies::handle(&session, sub)?,
        Some(("fx", sub)) => commands::fx::handle(&session, sub)?,
        Some(("portfolio", sub)) => commands::portfolio::handle(&session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
