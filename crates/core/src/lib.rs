// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! uptime-core: calendar-accurate elapsed time between two instants
//!
//! ```
//! use chrono::NaiveDateTime;
//!
//! let fmt = "%Y-%m-%d %H:%M:%S";
//! let a = NaiveDateTime::parse_from_str("1021-01-01 12:00:00", fmt).unwrap();
//! let b = NaiveDateTime::parse_from_str("2022-03-07 16:00:00", fmt).unwrap();
//!
//! let d = uptime_core::between(a, b);
//! assert_eq!(d.to_string(), "1001 years 2 months 6 days 4 hours");
//! assert_eq!(d.compact(), "1001y2m6d 4h0m0s");
//! ```

pub mod calendar;
pub mod clock;
pub mod decompose;
pub mod fields;
pub mod parse;

pub use calendar::{is_leap_year, Calendar};
pub use clock::{Clock, FakeClock, SystemClock};
pub use decompose::{between, parse_between, since, Decomposer};
pub use fields::{normalize, DurationFields};
pub use parse::{parse_instant, parse_range, ParseError, RANGE_SEPARATOR};
