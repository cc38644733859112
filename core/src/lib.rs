//! # Bhumi Core
//!
//! The plot valuation calculator.
//!
//! A plot flows through three stages, always in this order:
//! 1. **[`validator`]**: rejects out of range units and rates, reporting every bad field.
//! 2. **[`normalizer`]**: converts Ropani and Bigha units into square feet and meters.
//! 3. **[`engine`]**: prices the area at government, market and fair market rates.
//!
//! [`calculator`] ties the stages together. The remaining modules are helpers
//! for the record keeping layer: area labels ([`display`]), square feet back to
//! traditional units ([`convert`]), report numbers ([`report`]) and per
//! property totals ([`summary`]).

pub mod calculator;
pub mod convert;
pub mod display;
pub mod engine;
pub mod normalizer;
pub mod report;
pub mod summary;
pub mod validator;

pub use calculator::{Plot, PlotResult, compute, recompute_all, verify};
pub use display::area_display;
pub use validator::{Validated, check, validate};
