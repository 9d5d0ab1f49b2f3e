// SPDX-License-Identifier: MIT

//!
//! The delivery option type
//!

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;
use thiserror::Error;

/// The format arrival dates must be given in (e.g. `2024-09-29`)
pub const ARRIVAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO 8601 cutoff forms accepted besides RFC 3339 (the offset is always
/// required)
const CUTOFF_FALLBACK_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Errors that can arise in relation to a [`DeliveryOption`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliveryOptionError {
    /// The arrival date isn't a `YYYY-MM-DD` calendar date
    #[error("Arrival date `{0}` is not a valid YYYY-MM-DD date")]
    InvalidArrivalDate(String),

    /// The cutoff isn't an ISO-8601 (RFC 3339) timestamp
    #[error("Cutoff `{0}` is not a valid ISO-8601 timestamp")]
    InvalidCutoff(String),

    /// The cutoff is at or after the start of the arrival date
    #[error("Cutoff `{cutoff}` is not before the arrival date `{arrival_date}`")]
    CutoffNotBeforeArrival {
        cutoff: DateTime<Utc>,
        arrival_date: NaiveDate,
    },
}

/// One (cutoff, arrival date) pairing, i.e. "order before `cutoff` and it
/// arrives on `arrival_date`".
///
/// The cutoff always strictly precedes the start (00:00 UTC) of the arrival
/// date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeliveryOption {
    arrival_date: NaiveDate,
    cutoff: DateTime<Utc>,
}

impl DeliveryOption {
    /// Create a new [`DeliveryOption`] if the result will be valid
    pub fn new(
        arrival_date: NaiveDate,
        cutoff: DateTime<Utc>,
    ) -> Result<Self, DeliveryOptionError> {
        let option = DeliveryOption {
            arrival_date,
            cutoff,
        };
        option.is_valid()?;
        Ok(option)
    }

    /// Create a new [`DeliveryOption`] from its string representations (e.g.
    /// `"2024-09-29"` and `"2024-09-26T18:30:00Z"`)
    pub fn from(arrival_date: &str, cutoff: &str) -> Result<Self, DeliveryOptionError> {
        let arrival_date = parse_arrival_date(arrival_date)?;
        let cutoff = parse_cutoff(cutoff)?;
        DeliveryOption::new(arrival_date, cutoff)
    }

    /// Get the calendar date on which the order arrives
    pub fn arrival_date(&self) -> NaiveDate {
        self.arrival_date
    }

    /// Get the start of the arrival date (00:00 UTC)
    pub fn arrival_start(&self) -> DateTime<Utc> {
        self.arrival_date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Get the latest time an order can be placed to arrive on the arrival
    /// date
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    /// Whether the cutoff has passed at the given moment (strictly after)
    pub fn is_closed_at(&self, now: DateTime<Utc>) -> bool {
        now > self.cutoff
    }

    /// e.g. `Thu Sep 26, 18:30`
    pub fn cutoff_as_long_format(&self) -> String {
        self.cutoff.format("%a %b %-d, %H:%M").to_string()
    }

    /// e.g. `Sun Sep 29`
    pub fn arrival_date_as_long_format(&self) -> String {
        self.arrival_date.format("%a %b %-d").to_string()
    }

    /// Check if the [`DeliveryOption`] is valid
    fn is_valid(&self) -> Result<(), DeliveryOptionError> {
        if self.cutoff < self.arrival_start() {
            Ok(())
        } else {
            Err(DeliveryOptionError::CutoffNotBeforeArrival {
                cutoff: self.cutoff,
                arrival_date: self.arrival_date,
            })
        }
    }
}

/// Parse a `YYYY-MM-DD` arrival date
fn parse_arrival_date(value: &str) -> Result<NaiveDate, DeliveryOptionError> {
    let trimmed = value.trim();

    // chrono accepts unpadded months & days, we don't
    if trimmed.len() != 10 {
        return Err(DeliveryOptionError::InvalidArrivalDate(value.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, ARRIVAL_DATE_FORMAT)
        .map_err(|_| DeliveryOptionError::InvalidArrivalDate(value.to_string()))
}

/// Parse an ISO-8601 cutoff timestamp (any offset, e.g. `Z`, `+02:00` or
/// `+0200`, with or without seconds) into UTC
fn parse_cutoff(value: &str) -> Result<DateTime<Utc>, DeliveryOptionError> {
    let trimmed = value.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .or_else(|| {
            CUTOFF_FALLBACK_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
        })
        .map(|cutoff| cutoff.with_timezone(&Utc))
        .ok_or_else(|| DeliveryOptionError::InvalidCutoff(value.to_string()))
}

/// The on-the-wire representation (unvalidated)
#[derive(Serialize, Deserialize)]
pub(crate) struct RawDeliveryOption {
    pub arrival_date: String,
    pub cutoff: String,
}

impl Serialize for DeliveryOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawDeliveryOption {
            arrival_date: self.arrival_date.format(ARRIVAL_DATE_FORMAT).to_string(),
            cutoff: self.cutoff.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DeliveryOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDeliveryOption::deserialize(deserializer)?;
        DeliveryOption::from(&raw.arrival_date, &raw.cutoff).map_err(serde::de::Error::custom)
    }
}
