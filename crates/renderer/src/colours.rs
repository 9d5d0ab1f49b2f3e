// SPDX-License-Identifier: MIT

//!
//! Assign colours to arrival dates
//!

use crate::colour::Colour;
use chrono::NaiveDate;
use delivery_timeline_core::DeliveryOptions;
use serde::{Deserialize, Serialize};

/// The fixed set of colours arrival dates are drawn in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColour {
    Blue,
    Green,
    Red,
    Purple,
    Orange,
    Brown,
    Teal,
}

impl NamedColour {
    /// In assignment order
    pub const ALL: [NamedColour; 7] = [
        NamedColour::Blue,
        NamedColour::Green,
        NamedColour::Red,
        NamedColour::Purple,
        NamedColour::Orange,
        NamedColour::Brown,
        NamedColour::Teal,
    ];

    /// The CSS colour name
    pub fn name(&self) -> &'static str {
        match self {
            NamedColour::Blue => "blue",
            NamedColour::Green => "green",
            NamedColour::Red => "red",
            NamedColour::Purple => "purple",
            NamedColour::Orange => "orange",
            NamedColour::Brown => "brown",
            NamedColour::Teal => "teal",
        }
    }

    /// The CSS colour's RGB value
    pub fn colour(&self) -> Colour {
        match self {
            NamedColour::Blue => Colour::from_rgb(0, 0, 255),
            NamedColour::Green => Colour::from_rgb(0, 128, 0),
            NamedColour::Red => Colour::from_rgb(255, 0, 0),
            NamedColour::Purple => Colour::from_rgb(128, 0, 128),
            NamedColour::Orange => Colour::from_rgb(255, 165, 0),
            NamedColour::Brown => Colour::from_rgb(165, 42, 42),
            NamedColour::Teal => Colour::from_rgb(0, 128, 128),
        }
    }
}

/// Maps each distinct arrival date to a [`NamedColour`].
///
/// Dates get colours in the order they are first seen in the (cutoff sorted)
/// options, cycling through [`NamedColour::ALL`] when there are more dates
/// than colours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrivalColours(Vec<(NaiveDate, NamedColour)>);

impl ArrivalColours {
    /// Build the colour map for the options
    pub fn from_options(options: &DeliveryOptions) -> Self {
        let colours = options
            .distinct_arrival_dates()
            .into_iter()
            .enumerate()
            .map(|(i, date)| (date, NamedColour::ALL[i % NamedColour::ALL.len()]))
            .collect();
        Self(colours)
    }

    /// Get the colour name for the arrival date
    pub fn named_colour(&self, date: NaiveDate) -> Option<NamedColour> {
        self.0
            .iter()
            .find(|(known_date, _)| *known_date == date)
            .map(|(_, colour)| *colour)
    }

    /// The number of distinct arrival dates
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(arrival date, colour)` in assignment order
    pub fn iter(&self) -> impl Iterator<Item = &(NaiveDate, NamedColour)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn same_date_same_colour() {
        let options = DeliveryOptions::sample();
        let colours = ArrivalColours::from_options(&options);
        for a in options.iter() {
            for b in options.iter() {
                if a.arrival_date() == b.arrival_date() {
                    assert_eq!(
                        colours.named_colour(a.arrival_date()),
                        colours.named_colour(b.arrival_date())
                    );
                }
            }
        }
    }

    #[test]
    fn first_seen_order() {
        let options = DeliveryOptions::sample();
        let colours = ArrivalColours::from_options(&options);
        assert_eq!(colours.len(), 7);

        // Sorted by cutoff, the 29th is seen first then the 30th, etc.
        assert_eq!(colours.named_colour(date("2024-09-29")), Some(NamedColour::Blue));
        assert_eq!(colours.named_colour(date("2024-09-30")), Some(NamedColour::Green));
        assert_eq!(colours.named_colour(date("2024-10-01")), Some(NamedColour::Red));
        assert_eq!(colours.named_colour(date("2024-10-02")), Some(NamedColour::Purple));
        assert_eq!(colours.named_colour(date("2024-10-03")), Some(NamedColour::Orange));
        assert_eq!(colours.named_colour(date("2024-10-04")), Some(NamedColour::Brown));
        assert_eq!(colours.named_colour(date("2024-10-05")), Some(NamedColour::Teal));

        // All distinct
        let named: HashSet<NamedColour> = colours.iter().map(|(_, colour)| *colour).collect();
        assert_eq!(named.len(), 7);
    }

    #[test]
    fn cycles_after_seven() {
        let records: Vec<(String, String)> = (1..=9)
            .map(|day| {
                (
                    format!("2024-10-{:02}", day + 10),
                    format!("2024-10-{:02}T12:00:00Z", day),
                )
            })
            .collect();
        let options = DeliveryOptions::from_strs(
            records
                .iter()
                .map(|(arrival, cutoff)| (arrival.as_str(), cutoff.as_str())),
        )
        .unwrap();
        let colours = ArrivalColours::from_options(&options);
        assert_eq!(colours.named_colour(date("2024-10-18")), Some(NamedColour::Blue));
        assert_eq!(colours.named_colour(date("2024-10-19")), Some(NamedColour::Green));
        assert_eq!(colours.named_colour(date("2024-01-01")), None);
    }
}
