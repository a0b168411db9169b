// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! NestKV CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands, ResultFormatter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments first to get log level
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        // -v/--verbose flag takes precedence
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        // Default to Warn (can still be overridden by RUST_LOG env var)
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let mut formatter = ResultFormatter::new(cli.format);
    if cli.no_color {
        colored::control::set_override(false);
        formatter = formatter.with_color(false);
    }

    match cli.command {
        None => cli::handle_console(&cli.prompt, cli.history.as_deref(), &formatter),

        Some(Commands::Exec { file }) => cli::handle_exec(&file, &formatter),

        Some(Commands::Version) => {
            println!("{} {}", "NestKV".bold().green(), nestkv::VERSION);
            println!("In-memory key-value store with nested transactions");
            Ok(())
        }
    }
}
