// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar-aware duration decomposition.
//!
//! Spans inside one calendar year are walked day by day. Spans that cross a
//! new year are split at the two January 1st boundaries: the partial year
//! after `a` and the partial year before `b` are merged with carries, and the
//! whole years in between are counted directly, so the cost does not grow
//! with the length of the span.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime, SubsecRound, TimeDelta, Timelike};

use crate::calendar::Calendar;
use crate::clock::{Clock, SystemClock};
use crate::fields::{normalize, DurationFields};
use crate::parse::{parse_range, ParseError};

const SECONDS_PER_DAY: u32 = 86_400;

/// Fields together with the month their days value is bounded by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Breakdown {
    pub(crate) fields: DurationFields,
    /// Any date inside the anchor month.
    pub(crate) anchor: NaiveDate,
}

/// Computes [`DurationFields`] between instants.
///
/// Owns a handle to a [`Calendar`]; decomposers built with
/// [`Decomposer::with_calendar`] share month-length lookups.
#[derive(Debug, Clone, Default)]
pub struct Decomposer {
    calendar: Arc<Calendar>,
}

impl Decomposer {
    /// Decomposer with its own, unshared calendar cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calendar(calendar: Arc<Calendar>) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Arc<Calendar> {
        &self.calendar
    }

    /// Elapsed calendar time between `a` and `b`, in either order.
    ///
    /// Sub-second precision is truncated before computing.
    pub fn between(&self, a: NaiveDateTime, b: NaiveDateTime) -> DurationFields {
        self.decompose(a, b).fields
    }

    /// Elapsed calendar time between `a` and the clock's current instant.
    pub fn since(&self, a: NaiveDateTime, clock: &impl Clock) -> DurationFields {
        self.between(a, clock.now())
    }

    /// Parses `"<a> to <b>"` with `template` and decomposes the range.
    pub fn parse(&self, template: &str, input: &str) -> Result<DurationFields, ParseError> {
        let (a, b) = parse_range(template, input)?;
        Ok(self.between(a, b))
    }

    pub(crate) fn decompose(&self, a: NaiveDateTime, b: NaiveDateTime) -> Breakdown {
        let (a, b) = if b < a { (b, a) } else { (a, b) };
        let a = a.trunc_subsecs(0);
        let b = b.trunc_subsecs(0);

        if a == b {
            return Breakdown {
                fields: DurationFields::default(),
                anchor: a.date(),
            };
        }

        if b.year() > a.year() {
            tracing::debug!(%a, %b, "decomposing across year boundary");
            self.split(a, b)
        } else {
            tracing::debug!(%a, %b, "decomposing by day walk");
            self.walk(a, b)
        }
    }

    /// Same-year span: count days forward from `a`, closing a month on each
    /// anniversary of `a`'s day of month.
    ///
    /// When the anniversary day does not exist in a month (the 30th in
    /// February), the month closes on the first day of the following month
    /// and the length of the short month is subtracted from the running days.
    fn walk(&self, a: NaiveDateTime, b: NaiveDateTime) -> Breakdown {
        let elapsed = b - a;
        let whole_days = elapsed.num_days();
        let anchor_day = a.day();

        let mut fields = DurationFields::default();
        let mut anchor = a.date();
        let mut prev = a.date();
        for date in a.date().iter_days().skip(1).take(whole_days as usize) {
            fields.days += 1;
            if date.day() == anchor_day {
                fields.months += 1;
                fields.days = 0;
                anchor = date;
            } else if date.day() == 1 {
                let ended = self.calendar.days_in_month_of(&prev);
                if ended < anchor_day {
                    fields.months += 1;
                    fields.days = fields.days.saturating_sub(ended);
                    anchor = date;
                }
            }
            prev = date;
        }

        let rest = elapsed - TimeDelta::days(whole_days);
        Breakdown {
            fields: fields.with_clock(rest.num_seconds() as u32),
            anchor,
        }
    }

    /// Span across at least one new year: merge the remainder of `a`'s year
    /// with the elapsed part of `b`'s year, then add the years in between.
    ///
    /// Days carry once against `a`'s month. When that month is short, the
    /// days left over can exceed it; they are then bounded by `b`'s month,
    /// since they never exceed `b`'s day of month minus one.
    fn split(&self, a: NaiveDateTime, b: NaiveDateTime) -> Breakdown {
        let anchor_len = self.calendar.days_in_month_of(&a);
        let raw = self.until_new_year(a).plus(since_new_year(b));
        let mut fields = normalize(raw, anchor_len);
        fields.years += (b.year() - a.year() - 1).unsigned_abs();
        let anchor = if fields.days < anchor_len {
            a.date()
        } else {
            b.date()
        };
        Breakdown { fields, anchor }
    }

    /// Remainder from `t` to the following January 1st, 00:00:00.
    ///
    /// Days count to the end of `t`'s month; a midnight `t` leaves 24 hours.
    pub(crate) fn until_new_year(&self, t: NaiveDateTime) -> DurationFields {
        DurationFields {
            months: 12 - t.month(),
            days: self.calendar.days_in_month_of(&t) - t.day(),
            ..DurationFields::default()
        }
        .with_clock(SECONDS_PER_DAY - t.num_seconds_from_midnight())
    }
}

/// [`Decomposer::between`] with a fresh, unshared calendar.
pub fn between(a: NaiveDateTime, b: NaiveDateTime) -> DurationFields {
    Decomposer::new().between(a, b)
}

/// Elapsed calendar time from `a` until now (UTC).
pub fn since(a: NaiveDateTime) -> DurationFields {
    Decomposer::new().since(a, &SystemClock)
}

/// [`Decomposer::parse`] with a fresh, unshared calendar.
pub fn parse_between(template: &str, input: &str) -> Result<DurationFields, ParseError> {
    Decomposer::new().parse(template, input)
}

/// Elapsed from January 1st, 00:00:00 of `t`'s year to `t`.
pub(crate) fn since_new_year(t: NaiveDateTime) -> DurationFields {
    DurationFields {
        months: t.month() - 1,
        days: t.day() - 1,
        ..DurationFields::default()
    }
    .with_clock(t.num_seconds_from_midnight())
}

#[cfg(test)]
#[path = "decompose_tests.rs"]
mod tests;
