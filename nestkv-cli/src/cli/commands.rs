// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// NestKV - key-value console with nested transactions
#[derive(Parser, Debug)]
#[command(name = "nestkv", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (overridden by --verbose)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// How command results are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Disable colored diagnostics
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Console prompt
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// File to load and save console history
    #[arg(long)]
    pub history: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the commands in a script file, one per line
    Exec {
        /// Path to the script
        file: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain values, diagnostics on stderr
    Text,
    /// One JSON object per result line
    Json,
}
