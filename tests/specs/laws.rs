//! Algebraic properties of the decomposition.

use crate::prelude::*;
use chrono::Datelike;
use uptime_core::{Calendar, Decomposer};

const INSTANTS: &[&str] = &[
    "1021-01-01 12:00:00",
    "1900-02-28 23:59:59",
    "2000-02-29 00:00:00",
    "2021-01-31 06:30:00",
    "2021-12-31 23:59:59",
    "2022-01-01 00:00:00",
    "2022-01-30 12:00:00",
    "2022-03-10 12:00:00",
    "2023-11-16 22:32:44",
    "2024-03-01 00:00:00",
];

fn pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    INSTANTS
        .iter()
        .flat_map(|a| INSTANTS.iter().map(move |b| (*a, *b)))
}

#[test]
fn symmetry() {
    let dec = Decomposer::new();
    for (a, b) in pairs() {
        assert_eq!(dec.between(at(a), at(b)), dec.between(at(b), at(a)), "{a} / {b}");
    }
}

#[test]
fn zero_law() {
    let dec = Decomposer::new();
    for a in INSTANTS {
        let d = dec.between(at(a), at(a));
        assert!(d.is_zero());
        assert_eq!(d.verbose(), "");
    }
}

#[test]
fn field_bounds() {
    let dec = Decomposer::new();
    for (a, b) in pairs() {
        let d = dec.between(at(a), at(b));
        assert!(d.seconds() < 60, "{a} / {b}");
        assert!(d.minutes() < 60, "{a} / {b}");
        assert!(d.hours() < 24, "{a} / {b}");
        assert!(d.months() < 12, "{a} / {b}");
    }
}

// Across years the days are anchored to the first or the last month of the
// span; same-year walks are covered by the decomposer's own properties.
#[test]
fn days_bounded_by_end_months_across_years() {
    let calendar = Calendar::new();
    let dec = Decomposer::new();
    for (a, b) in pairs() {
        let (lo, hi) = if at(a) <= at(b) { (at(a), at(b)) } else { (at(b), at(a)) };
        if hi.year() == lo.year() {
            continue;
        }
        let bound = calendar
            .days_in_month_of(&lo)
            .max(calendar.days_in_month_of(&hi));
        let d = dec.between(lo, hi);
        assert!(d.days() < bound, "{a} / {b}: {} days, bound {bound}", d.days());
    }
}

#[test]
fn short_start_month_carries_once() {
    span("2021-02-01 12:00:00", "2022-12-31 12:00:00")
        .compact("1y10m30d 0h0m0s")
        .months_days(10, 30);
}

#[test]
fn whole_years_between_boundaries() {
    let dec = Decomposer::new();
    for (a, b) in pairs() {
        let (lo, hi) = if at(a) <= at(b) { (at(a), at(b)) } else { (at(b), at(a)) };
        let k = (hi.year() - lo.year()).unsigned_abs();
        if k == 0 {
            continue;
        }
        let years = dec.between(lo, hi).years();
        assert!(years == k - 1 || years == k, "{a} / {b}: {years} years for k={k}");
    }
}
