// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! uptime - calendar-accurate elapsed time

mod env;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::OutputFormat;
use uptime_core::{parse_instant, Decomposer, SystemClock};

#[derive(Parser)]
#[command(
    name = "uptime",
    version,
    about = "Calendar-accurate elapsed time between two instants"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Print every field in the fixed "1y2m1d 1h10m20s" layout
    #[arg(short = 's', long, global = true)]
    short: bool,

    /// strftime template for instants [env: UPTIME_FORMAT] [default: %Y-%m-%d %H:%M:%S]
    #[arg(short = 'f', long = "format", global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Elapsed time between two instants
    Between {
        /// First instant
        start: String,
        /// Second instant (may precede the first)
        end: String,
    },
    /// Elapsed time for a "<start> to <end>" range
    ///
    /// The template may be longer than the start text; the part that matches
    /// the start is applied to the end as well.
    Range {
        /// Range text, e.g. "1990-01-01 to 1991-01-02"
        #[arg(required = true, num_args = 1..)]
        range: Vec<String>,
    },
    /// Elapsed time from an instant until now (UTC)
    Since {
        /// Starting instant
        start: String,
    },
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, dropping causes already present in the top-level
/// message (thiserror variants embed their source).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let template = cli.format.unwrap_or_else(env::time_format);
    let decomposer = Decomposer::new();
    let fields = match command {
        Commands::Between { start, end } => {
            let a = parse_instant(&template, &start)?;
            let b = parse_instant(&template, &end)?;
            decomposer.between(a, b)
        }
        Commands::Range { range } => decomposer.parse(&template, &range.join(" "))?,
        Commands::Since { start } => {
            let a = parse_instant(&template, &start)?;
            decomposer.since(a, &SystemClock)
        }
    };

    output::print_duration(&fields, cli.output, cli.short)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
