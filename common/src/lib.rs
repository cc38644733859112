//! # Bhumi Common
//!
//! Shared value types for the plot valuation workspace.
//!
//! * **[`land`]**: traditional Nepali area units, plot measurements and derived valuations.
//! * **[`error`]**: error types shared by the calculator and its callers.
//! * **[`config`]**: runtime switches set from the command line.

pub mod config;
pub mod error;
pub mod land;
