// SPDX-License-Identifier: MIT

//!
//! *Part of the wider delivery timeline project*
//!
//! This crate defines the basic datatypes used across the delivery timeline
//! project (renderer, desktop application, command line tools).
//!
//! Every type here validates itself on construction (and on deserialisation),
//! so if a [`DeliveryOption`] or [`DeliveryOptions`] value exists the
//! developer can be sure it's valid and can be laid out on a timeline.
//!

mod delivery_option;
mod delivery_options;
mod sample;

pub use delivery_option::*;
pub use delivery_options::*;
