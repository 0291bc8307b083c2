// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar duration breakdown and its text renderings.

use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_MINUTE: u32 = 60;
const MINUTES_PER_HOUR: u32 = 60;
const HOURS_PER_DAY: u32 = 24;
const MONTHS_PER_YEAR: u32 = 12;

/// Elapsed time split into calendar fields.
///
/// Values produced by the decomposer are normalized: seconds and minutes are
/// below 60, hours below 24, months below 12, and days below the length of the
/// month the breakdown is anchored to. The duration is the sum of all fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationFields {
    pub(crate) years: u32,
    pub(crate) months: u32,
    pub(crate) days: u32,
    pub(crate) hours: u32,
    pub(crate) minutes: u32,
    pub(crate) seconds: u32,
}

impl DurationFields {
    /// Build a breakdown from raw field values. No carries are applied.
    pub fn new(
        years: u32,
        months: u32,
        days: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Returns true if every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Fixed layout with every field, e.g. `"1y2m1d 1h10m20s"`.
    pub fn compact(&self) -> String {
        format!(
            "{}y{}m{}d {}h{}m{}s",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }

    /// Non-zero fields as pluralized words, largest first.
    ///
    /// `"1 year 2 months 1 day"`; empty for a zero duration.
    pub fn verbose(&self) -> String {
        let parts = [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ];
        parts
            .iter()
            .filter(|(n, _)| *n > 0)
            .map(|(n, unit)| plural(*n, unit))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Splits a sub-day remainder into hours, minutes and seconds.
    ///
    /// A full day (86400) yields 24 hours; [`normalize`] carries it.
    pub(crate) fn with_clock(mut self, secs: u32) -> Self {
        self.hours = secs / 3600;
        self.minutes = (secs % 3600) / 60;
        self.seconds = secs % 60;
        self
    }

    /// Field-wise sum, without carries.
    pub(crate) fn plus(self, other: Self) -> Self {
        Self {
            years: self.years + other.years,
            months: self.months + other.months,
            days: self.days + other.days,
            hours: self.hours + other.hours,
            minutes: self.minutes + other.minutes,
            seconds: self.seconds + other.seconds,
        }
    }
}

impl fmt::Display for DurationFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verbose())
    }
}

/// Carry overflowing fields into the next larger one.
///
/// `month_len` is the length of the anchor month and bounds the days field.
/// Each field wraps at most once: inputs are sums of two breakdowns that were
/// each below their own boundaries.
pub fn normalize(raw: DurationFields, month_len: u32) -> DurationFields {
    let mut d = raw;
    if d.seconds >= SECONDS_PER_MINUTE {
        d.minutes += 1;
        d.seconds -= SECONDS_PER_MINUTE;
    }
    if d.minutes >= MINUTES_PER_HOUR {
        d.hours += 1;
        d.minutes -= MINUTES_PER_HOUR;
    }
    if d.hours >= HOURS_PER_DAY {
        d.days += 1;
        d.hours -= HOURS_PER_DAY;
    }
    if d.days >= month_len {
        d.months += 1;
        d.days -= month_len;
    }
    if d.months >= MONTHS_PER_YEAR {
        d.years += 1;
        d.months -= MONTHS_PER_YEAR;
    }
    d
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
