// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar length oracle for the proleptic Gregorian calendar.
//!
//! Month lengths are computed once per year and kept for the lifetime of the
//! [`Calendar`]. A calendar is `Send + Sync`; share one behind an `Arc` to
//! reuse the cache across threads, or give each context its own.

use std::collections::HashMap;

use chrono::{Datelike, Month};
use parking_lot::Mutex;

/// Month lengths of a common year, January first.
const COMMON_YEAR: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap rule: divisible by 4, except centuries not divisible by 400.
///
/// Valid for negative (astronomical) years; year 0 is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Memoized days-in-month lookups.
#[derive(Debug, Default)]
pub struct Calendar {
    cache: Mutex<HashMap<i32, [u32; 12]>>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days in `month` of `year` (28 to 31).
    pub fn days_in_month(&self, year: i32, month: Month) -> u32 {
        self.lengths(year)[month.number_from_month() as usize - 1]
    }

    /// Number of days in the month containing `date`.
    pub fn days_in_month_of<D: Datelike>(&self, date: &D) -> u32 {
        self.lengths(date.year())[date.month0() as usize]
    }

    /// Number of years currently held in the cache.
    pub fn cached_years(&self) -> usize {
        self.cache.lock().len()
    }

    fn lengths(&self, year: i32) -> [u32; 12] {
        let mut cache = self.cache.lock();
        *cache.entry(year).or_insert_with(|| {
            tracing::trace!(year, "filling month lengths");
            let mut lengths = COMMON_YEAR;
            if is_leap_year(year) {
                lengths[1] = 29;
            }
            lengths
        })
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
