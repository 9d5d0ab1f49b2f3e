// SPDX-License-Identifier: MIT

//!
//! Sample data (a week of options from a typical online shop)
//!

use crate::DeliveryOptions;

/// `(arrival_date, cutoff)` pairs
const SAMPLE_DELIVERY_OPTIONS: [(&str, &str); 23] = [
    ("2024-09-29", "2024-09-26T18:30:00Z"),
    ("2024-09-29", "2024-09-27T09:15:00Z"),
    ("2024-09-29", "2024-09-27T14:45:00Z"),
    ("2024-09-30", "2024-09-26T22:00:00Z"),
    ("2024-09-30", "2024-09-27T11:30:00Z"),
    ("2024-09-30", "2024-09-28T08:00:00Z"),
    ("2024-09-30", "2024-09-28T16:45:00Z"),
    ("2024-10-01", "2024-09-27T20:15:00Z"),
    ("2024-10-01", "2024-09-28T13:30:00Z"),
    ("2024-10-01", "2024-09-29T10:00:00Z"),
    ("2024-10-02", "2024-09-28T19:45:00Z"),
    ("2024-10-02", "2024-09-29T12:30:00Z"),
    ("2024-10-02", "2024-09-30T08:15:00Z"),
    ("2024-10-03", "2024-09-30T15:00:00Z"),
    ("2024-10-03", "2024-10-01T09:30:00Z"),
    ("2024-10-03", "2024-10-01T17:45:00Z"),
    ("2024-10-04", "2024-10-01T21:00:00Z"),
    ("2024-10-04", "2024-10-02T11:15:00Z"),
    ("2024-10-04", "2024-10-02T16:30:00Z"),
    ("2024-10-05", "2024-10-01T23:45:00Z"),
    ("2024-10-05", "2024-10-02T14:00:00Z"),
    ("2024-10-05", "2024-10-03T08:45:00Z"),
    ("2024-10-05", "2024-10-03T18:30:00Z"),
];

impl DeliveryOptions {
    /// The sample options, used when nothing else has been supplied
    pub fn sample() -> Self {
        // Constant data, checked by the tests below
        DeliveryOptions::from_strs(SAMPLE_DELIVERY_OPTIONS).unwrap()
    }
}
