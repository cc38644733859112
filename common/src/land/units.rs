//! Conversion factors between traditional units and the canonical area units.
//!
//! Every factor is an exact decimal so that areas computed from them are
//! reproducible to the last stored digit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const SQFT_PER_ROPANI: Decimal = dec!(5476);
pub const SQFT_PER_ANA: Decimal = dec!(342.25);
pub const SQFT_PER_PAISA: Decimal = dec!(85.56);
pub const SQFT_PER_DAM: Decimal = dec!(21.39);

pub const SQFT_PER_BIGHA: Decimal = dec!(72900);
pub const SQFT_PER_KATTHA: Decimal = dec!(3645);
pub const SQFT_PER_DHUR: Decimal = dec!(182.25);

pub const SQMT_PER_SQFT: Decimal = dec!(0.092903);

/// Fractional digits kept for square feet and square meters.
pub const AREA_SCALE: u32 = 2;
/// Fractional digits kept for currency amounts.
pub const MONEY_SCALE: u32 = 2;
/// Fractional digits accepted for Dam.
pub const DAM_SCALE: u32 = 4;
