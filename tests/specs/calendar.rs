//! Month length oracle.

use crate::prelude::*;
use chrono::Month;

#[test]
fn leap_years() {
    let cal = Calendar::new();
    assert_eq!(cal.days_in_month(2024, Month::February), 29);
    assert_eq!(cal.days_in_month(1900, Month::February), 28);
    assert_eq!(cal.days_in_month(2000, Month::February), 29);
}

#[test]
fn fixed_months() {
    let cal = Calendar::new();
    let long = [
        Month::January,
        Month::March,
        Month::May,
        Month::July,
        Month::August,
        Month::October,
        Month::December,
    ];
    let short = [Month::April, Month::June, Month::September, Month::November];
    for month in long {
        assert_eq!(cal.days_in_month(1999, month), 31, "{month:?}");
    }
    for month in short {
        assert_eq!(cal.days_in_month(1999, month), 30, "{month:?}");
    }
}
