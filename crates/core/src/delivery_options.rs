// SPDX-License-Identifier: MIT

//!
//! The list of delivery options shown on a timeline
//!

use crate::delivery_option::RawDeliveryOption;
use crate::{DeliveryOption, DeliveryOptionError};
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise in relation to [`DeliveryOptions`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliveryOptionsError {
    /// There must be at least one option (otherwise there's no time range)
    #[error("There must be at least one delivery option")]
    Empty,

    /// One of the records is invalid
    #[error("Delivery option {index} is invalid: {source}")]
    InvalidOption {
        index: usize,
        source: DeliveryOptionError,
    },

    /// The JSON couldn't be parsed
    #[error("Invalid delivery options JSON: {0}")]
    Json(String),

    /// The file couldn't be read
    #[error("Unable to read delivery options: {0}")]
    Io(String),
}

impl From<serde_json::Error> for DeliveryOptionsError {
    fn from(error: serde_json::Error) -> Self {
        DeliveryOptionsError::Json(error.to_string())
    }
}

impl From<std::io::Error> for DeliveryOptionsError {
    fn from(error: std::io::Error) -> Self {
        DeliveryOptionsError::Io(error.to_string())
    }
}

/// A non-empty list of [`DeliveryOption`]s, sorted (stably) by cutoff.
///
/// Once created the list is never mutated.
#[derive(Serialize, Clone, Debug, PartialEq, derive_more::Index, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
pub struct DeliveryOptions(Vec<DeliveryOption>);

impl DeliveryOptions {
    /// Create a new sorted list if there is at least one option
    pub fn from(mut options: Vec<DeliveryOption>) -> Result<Self, DeliveryOptionsError> {
        if options.is_empty() {
            return Err(DeliveryOptionsError::Empty);
        }
        options.sort_by_key(|option| option.cutoff());
        debug!("Sorted {} delivery options by cutoff", options.len());
        Ok(DeliveryOptions(options))
    }

    /// Create a new sorted list from `(arrival_date, cutoff)` string pairs
    pub fn from_strs<'a, I>(records: I) -> Result<Self, DeliveryOptionsError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let options = records
            .into_iter()
            .enumerate()
            .map(|(index, (arrival_date, cutoff))| {
                DeliveryOption::from(arrival_date, cutoff)
                    .map_err(|source| DeliveryOptionsError::InvalidOption { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        DeliveryOptions::from(options)
    }

    /// Parse a JSON array of `{ "arrival_date": .., "cutoff": .. }` records
    pub fn from_json(json: &str) -> Result<Self, DeliveryOptionsError> {
        let records: Vec<RawDeliveryOption> = serde_json::from_str(json)?;
        DeliveryOptions::from_strs(
            records
                .iter()
                .map(|record| (record.arrival_date.as_str(), record.cutoff.as_str())),
        )
    }

    /// Read and parse a JSON file of delivery options
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DeliveryOptionsError> {
        debug!("Reading delivery options from {:?}", path.as_ref());
        let json = fs::read_to_string(path)?;
        DeliveryOptions::from_json(&json)
    }

    /// The sorted options
    pub fn as_slice(&self) -> &[DeliveryOption] {
        &self.0
    }

    /// Iterate over the sorted options
    pub fn iter(&self) -> std::slice::Iter<'_, DeliveryOption> {
        self.0.iter()
    }

    /// The number of options (always at least 1)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, there is always at least one option
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The earliest cutoff
    pub fn earliest_cutoff(&self) -> DateTime<Utc> {
        // Sorted & non-empty
        self.0[0].cutoff()
    }

    /// The latest arrival date
    pub fn latest_arrival_date(&self) -> NaiveDate {
        self.0
            .iter()
            .map(DeliveryOption::arrival_date)
            .max()
            .unwrap_or_else(|| self.0[0].arrival_date())
    }

    /// All options arriving on the given date
    pub fn arriving_on(&self, date: NaiveDate) -> impl Iterator<Item = &DeliveryOption> {
        self.0
            .iter()
            .filter(move |option| option.arrival_date() == date)
    }

    /// The distinct arrival dates, in the order first seen in the (cutoff
    /// sorted) list
    pub fn distinct_arrival_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = Vec::new();
        for option in &self.0 {
            if !dates.contains(&option.arrival_date()) {
                dates.push(option.arrival_date());
            }
        }
        dates
    }
}

impl<'de> Deserialize<'de> for DeliveryOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let options = Vec::<DeliveryOption>::deserialize(deserializer)?;
        DeliveryOptions::from(options).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(DeliveryOptions::from(vec![]), Err(DeliveryOptionsError::Empty));
        assert_eq!(
            DeliveryOptions::from_json("[]"),
            Err(DeliveryOptionsError::Empty)
        );
    }

    #[test]
    fn sorted_by_cutoff() {
        let options = DeliveryOptions::from_strs([
            ("2024-09-30", "2024-09-28T16:45:00Z"),
            ("2024-09-29", "2024-09-26T18:30:00Z"),
            ("2024-10-01", "2024-09-27T20:15:00Z"),
        ])
        .unwrap();
        let cutoffs: Vec<_> = options.iter().map(|option| option.cutoff()).collect();
        assert!(cutoffs.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(options[0].arrival_date().to_string(), "2024-09-29");
    }

    #[test]
    fn sample_is_sorted() {
        let options = DeliveryOptions::sample();
        assert_eq!(options.len(), 23);
        assert!(
            options
                .as_slice()
                .windows(2)
                .all(|pair| pair[0].cutoff() <= pair[1].cutoff())
        );
    }

    #[test]
    fn invalid_record_index_reported() {
        let error = DeliveryOptions::from_strs([
            ("2024-09-29", "2024-09-26T18:30:00Z"),
            ("2024-09-29", "2024-09-29T18:30:00Z"),
        ])
        .unwrap_err();
        assert!(matches!(
            error,
            DeliveryOptionsError::InvalidOption { index: 1, .. }
        ));
    }

    #[test]
    fn from_json() {
        let json = r#"[
            {"arrival_date": "2024-09-30", "cutoff": "2024-09-28T16:45:00Z"},
            {"arrival_date": "2024-09-29", "cutoff": "2024-09-26T18:30:00Z"}
        ]"#;
        let options = DeliveryOptions::from_json(json).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options.earliest_cutoff().to_rfc3339(), "2024-09-26T18:30:00+00:00");
        assert_eq!(options.latest_arrival_date().to_string(), "2024-09-30");

        assert!(matches!(
            DeliveryOptions::from_json("{"),
            Err(DeliveryOptionsError::Json(_))
        ));
        assert!(matches!(
            DeliveryOptions::from_json(r#"[{"arrival_date": "2024-09-30"}]"#),
            Err(DeliveryOptionsError::Json(_))
        ));
    }

    #[test]
    fn distinct_arrival_dates_in_first_seen_order() {
        let options = DeliveryOptions::from_strs([
            ("2024-09-30", "2024-09-26T22:00:00Z"),
            ("2024-09-29", "2024-09-26T18:30:00Z"),
            ("2024-09-29", "2024-09-27T09:15:00Z"),
        ])
        .unwrap();
        let dates: Vec<String> = options
            .distinct_arrival_dates()
            .iter()
            .map(|date| date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-09-29", "2024-09-30"]);
        assert_eq!(
            options
                .arriving_on(NaiveDate::from_ymd_opt(2024, 9, 29).unwrap())
                .count(),
            2
        );
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            DeliveryOptions::from_json_file("/definitely/not/here.json"),
            Err(DeliveryOptionsError::Io(_))
        ));
    }
}
