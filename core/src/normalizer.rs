//! # Unit Normalizer
//!
//! Folds both traditional systems into square feet and square meters.
//!
//! The two systems are added together unconditionally: a plot recorded
//! partly in Ropani units and partly in Bigha units covers the sum of both.

use bhumi_common::land::measurement::PlotMeasurement;
use bhumi_common::land::units::{
    AREA_SCALE, SQFT_PER_ANA, SQFT_PER_BIGHA, SQFT_PER_DAM, SQFT_PER_DHUR, SQFT_PER_KATTHA,
    SQFT_PER_PAISA, SQFT_PER_ROPANI, SQMT_PER_SQFT,
};
use rust_decimal::Decimal;

use crate::validator::Validated;

/// Plot area in the canonical units, rounded to the stored precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalArea {
    sqft: Decimal,
    sqmt: Decimal,
}

impl CanonicalArea {
    /// Rounds an exact square-foot total. Square meters derive from the
    /// unrounded figure.
    pub(crate) fn from_exact_sqft(exact_sqft: Decimal) -> Self {
        Self {
            sqft: exact_sqft.round_dp(AREA_SCALE),
            sqmt: sqft_to_sqmt(exact_sqft),
        }
    }

    pub fn sqft(&self) -> Decimal {
        self.sqft
    }

    pub fn sqmt(&self) -> Decimal {
        self.sqmt
    }
}

/// Exact square feet covered by the Ropani system fields.
pub fn ropani_sqft(m: &PlotMeasurement) -> Decimal {
    Decimal::from(m.ropani) * SQFT_PER_ROPANI
        + Decimal::from(m.ana) * SQFT_PER_ANA
        + Decimal::from(m.paisa) * SQFT_PER_PAISA
        + m.dam * SQFT_PER_DAM
}

/// Exact square feet covered by the Bigha system fields.
pub fn bigha_sqft(m: &PlotMeasurement) -> Decimal {
    Decimal::from(m.bigha) * SQFT_PER_BIGHA
        + Decimal::from(m.kattha) * SQFT_PER_KATTHA
        + Decimal::from(m.dhur) * SQFT_PER_DHUR
}

/// Square meters for an area in square feet, rounded to the stored precision.
pub fn sqft_to_sqmt(sqft: Decimal) -> Decimal {
    (sqft * SQMT_PER_SQFT).round_dp(AREA_SCALE)
}

pub fn normalize(valid: &Validated<'_>) -> CanonicalArea {
    let m = valid.measurement();
    CanonicalArea::from_exact_sqft(ropani_sqft(m) + bigha_sqft(m))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
