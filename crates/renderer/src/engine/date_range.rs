// SPDX-License-Identifier: MIT

//!
//! Date range
//!

use crate::engine::{floor_to_day, start_of_date};
use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use delivery_timeline_core::DeliveryOptions;
use std::fmt::Debug;

/// The timeline's date range: from the start of the day of the earliest
/// cutoff, to the end of the day of the latest arrival date.
///
/// Always a whole number (at least 1) of days long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineDateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimelineDateRange {
    /// Derive the range from the options
    pub fn from_options(options: &DeliveryOptions) -> Self {
        let start = floor_to_day(options.earliest_cutoff());
        let end = start_of_date(options.latest_arrival_date()) + Duration::days(1);
        Self { start, end }
    }

    /// The start of the timeline (00:00 UTC)
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// The end of the timeline (00:00 UTC the day after the latest arrival)
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// The number of whole days in the range
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// The length of the range in milliseconds
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// Each calendar day in the range, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.start.date_naive();
        (0..self.day_count()).filter_map(move |i| first.checked_add_days(Days::new(i as u64)))
    }

    /// How far through the range the moment is (0.0 at the start, 1.0 at the
    /// end, outside 0.0 - 1.0 if the moment is outside the range)
    pub fn fraction_of(&self, moment: DateTime<Utc>) -> f64 {
        (moment - self.start).num_milliseconds() as f64 / self.duration_ms() as f64
    }

    /// The moment the given fraction of the way through the range
    pub fn at_fraction(&self, fraction: f64) -> DateTime<Utc> {
        let offset_ms = (fraction * self.duration_ms() as f64).round() as i64;
        self.start + Duration::milliseconds(offset_ms)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn two_options() -> DeliveryOptions {
        DeliveryOptions::from_strs([
            ("2024-09-29", "2024-09-26T18:30:00Z"),
            ("2024-09-30", "2024-09-28T16:45:00Z"),
        ])
        .unwrap()
    }

    #[test]
    fn from_options() {
        let range = TimelineDateRange::from_options(&two_options());
        assert_eq!(range.start(), at("2024-09-26T00:00:00Z"));
        assert_eq!(range.end(), at("2024-10-01T00:00:00Z"));
        assert_eq!(range.day_count(), 5);
    }

    #[test]
    fn days() {
        let range = TimelineDateRange::from_options(&two_options());
        let days: Vec<String> = range.days().map(|day| day.to_string()).collect();
        assert_eq!(
            days,
            vec!["2024-09-26", "2024-09-27", "2024-09-28", "2024-09-29", "2024-09-30"]
        );
    }

    #[test]
    fn fractions() {
        let range = TimelineDateRange::from_options(&two_options());
        assert_eq!(range.fraction_of(range.start()), 0.0);
        assert_eq!(range.fraction_of(range.end()), 1.0);
        assert_eq!(range.fraction_of(at("2024-09-28T12:00:00Z")), 0.5);
        assert_eq!(range.at_fraction(0.0), range.start());
        assert_eq!(range.at_fraction(1.0), range.end());
        assert_eq!(range.at_fraction(0.5), at("2024-09-28T12:00:00Z"));
    }
}
