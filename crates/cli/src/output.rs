// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use uptime_core::DurationFields;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct DurationReport<'a> {
    #[serde(flatten)]
    fields: &'a DurationFields,
    compact: String,
    verbose: String,
}

/// Render a duration for display.
///
/// Text output is the verbose form unless `short` is set; JSON always carries
/// the fields and both renderings.
pub fn format_duration(
    fields: &DurationFields,
    format: OutputFormat,
    short: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text if short => Ok(fields.compact()),
        OutputFormat::Text => Ok(fields.verbose()),
        OutputFormat::Json => {
            let report = DurationReport {
                fields,
                compact: fields.compact(),
                verbose: fields.verbose(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

pub fn print_duration(
    fields: &DurationFields,
    format: OutputFormat,
    short: bool,
) -> anyhow::Result<()> {
    println!("{}", format_duration(fields, format, short)?);
    Ok(())
}
