// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// The start (00:00 UTC) of the day the moment falls on
pub(crate) fn floor_to_day(moment: DateTime<Utc>) -> DateTime<Utc> {
    start_of_date(moment.date_naive())
}

/// 00:00 UTC on the date
pub(crate) fn start_of_date(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// e.g. `Fri Sep 27, 07:40`
pub(crate) fn as_long_datetime_format(moment: DateTime<Utc>) -> String {
    moment.format("%a %b %-d, %H:%M").to_string()
}
