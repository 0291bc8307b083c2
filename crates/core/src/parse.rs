// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of `"<start> to <end>"` ranges with strftime templates.
//!
//! A template may describe more than the input holds. The longest leading
//! part of the template that consumes the whole start text is used for both
//! sides, so `"%Y-%m-%d %H:%M:%S"` accepts `"1990-01-01 to 1991-01-02"`.
//! Fields the input leaves out take their start-of-period value (month and
//! day 1, time 00:00:00).

use chrono::format::{self, Item, Parsed, StrftimeItems};
use chrono::{NaiveDateTime, ParseResult};
use thiserror::Error;

/// Separator between the two sides of a range.
pub const RANGE_SEPARATOR: &str = " to ";

/// Errors from parsing instants or ranges.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid time template: {template:?}")]
    InvalidTemplate { template: String },
    #[error("missing \"{}\" separator in {input:?}", RANGE_SEPARATOR.trim())]
    MissingSeparator { input: String },
    #[error("invalid start time {text:?}: {source}")]
    Start {
        text: String,
        source: chrono::ParseError,
    },
    #[error("invalid end time {text:?}: {source}")]
    End {
        text: String,
        source: chrono::ParseError,
    },
    #[error("invalid time {text:?}: {source}")]
    Instant {
        text: String,
        source: chrono::ParseError,
    },
}

/// Parses a single instant, allowing the template to be longer than `text`.
pub fn parse_instant(template: &str, text: &str) -> Result<NaiveDateTime, ParseError> {
    let items = template_items(template)?;
    let text = text.trim();
    longest_prefix(&items, text)
        .and_then(|(_, parsed)| resolve(parsed))
        .map_err(|source| ParseError::Instant {
            text: text.to_string(),
            source,
        })
}

/// Splits `input` on `" to "` and parses both sides with `template`.
///
/// The start side decides how much of the template applies.
pub fn parse_range(
    template: &str,
    input: &str,
) -> Result<(NaiveDateTime, NaiveDateTime), ParseError> {
    let items = template_items(template)?;
    let (start, end) =
        input
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| ParseError::MissingSeparator {
                input: input.to_string(),
            })?;
    let (start, end) = (start.trim(), end.trim());

    let start_err = |source| ParseError::Start {
        text: start.to_string(),
        source,
    };
    let (len, parsed) = longest_prefix(&items, start).map_err(start_err)?;
    let a = resolve(parsed).map_err(start_err)?;

    let end_err = |source| ParseError::End {
        text: end.to_string(),
        source,
    };
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, end, items[..len].iter()).map_err(end_err)?;
    let b = resolve(parsed).map_err(end_err)?;

    tracing::trace!(%a, %b, template_items = len, "parsed range");
    Ok((a, b))
}

fn template_items(template: &str) -> Result<Vec<Item<'_>>, ParseError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(template).collect();
    if items.is_empty() || items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ParseError::InvalidTemplate {
            template: template.to_string(),
        });
    }
    Ok(items)
}

/// Longest template prefix that consumes all of `text`.
///
/// On failure returns the error of the full template.
fn longest_prefix(items: &[Item<'_>], text: &str) -> ParseResult<(usize, Parsed)> {
    let mut parsed = Parsed::new();
    let full_err = match format::parse(&mut parsed, text, items.iter()) {
        Ok(()) => return Ok((items.len(), parsed)),
        Err(e) => e,
    };
    for len in (1..items.len()).rev() {
        let mut parsed = Parsed::new();
        if format::parse(&mut parsed, text, items[..len].iter()).is_ok() {
            return Ok((len, parsed));
        }
    }
    Err(full_err)
}

/// Builds an instant, defaulting fields the template did not cover.
fn resolve(mut parsed: Parsed) -> ParseResult<NaiveDateTime> {
    // Setters fail only for fields already parsed; the parsed value wins.
    let date = match parsed.to_naive_date() {
        Ok(date) => date,
        Err(_) => {
            let _ = parsed.set_month(1);
            let _ = parsed.set_day(1);
            parsed.to_naive_date()?
        }
    };
    let time = match parsed.to_naive_time() {
        Ok(time) => time,
        Err(_) => {
            let _ = parsed.set_hour(0);
            let _ = parsed.set_minute(0);
            let _ = parsed.set_second(0);
            parsed.to_naive_time()?
        }
    };
    Ok(date.and_time(time))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
