//! "<start> to <end>" parsing feeding the decomposer.

use uptime_core::{parse_between, ParseError};

use crate::prelude::FORMAT;

#[test]
fn partial_template() {
    let d = parse_between(FORMAT, "1990-01-01 to 1991-01-02").unwrap();
    assert_eq!(d.to_string(), "1 year 1 day");
}

#[test]
fn full_template() {
    let d = parse_between(FORMAT, "2021-01-01 12:00:00 to 2022-03-02 13:10:20").unwrap();
    assert_eq!(d.compact(), "1y2m1d 1h10m20s");
}

#[test]
fn failures_are_distinct() {
    assert!(matches!(
        parse_between(FORMAT, "bad to 2022-01-01"),
        Err(ParseError::Start { .. })
    ));
    assert!(matches!(
        parse_between(FORMAT, "2022-01-01 to bad"),
        Err(ParseError::End { .. })
    ));
    assert!(matches!(
        parse_between(FORMAT, "2022-01-01"),
        Err(ParseError::MissingSeparator { .. })
    ));
}
