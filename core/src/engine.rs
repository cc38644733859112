//! # Valuation Engine
//!
//! Prices a normalized area at the government and market rates, and blends
//! the two rates into the fair market value.

use bhumi_common::land::units::MONEY_SCALE;
use bhumi_common::land::valuation::PlotValuation;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::normalizer::CanonicalArea;
use crate::validator::Validated;

pub const GOV_WEIGHT: Decimal = dec!(0.3);
pub const MARKET_WEIGHT: Decimal = dec!(0.7);

/// Rate used for the fair market value: 30% government, 70% market.
pub fn weighted_rate(gov_rate_per_sqft: Decimal, market_rate_per_sqft: Decimal) -> Decimal {
    gov_rate_per_sqft * GOV_WEIGHT + market_rate_per_sqft * MARKET_WEIGHT
}

/// Builds the full valuation for a validated measurement and its area.
///
/// A zero area leaves every amount at zero. When both rates are zero the
/// fair market value is left at zero as well, even for a positive area.
pub fn appraise(area: &CanonicalArea, valid: &Validated<'_>) -> PlotValuation {
    let m = valid.measurement();
    let gov_rate = m.gov_rate_per_sqft;
    let market_rate = m.market_rate_per_sqft;

    let mut valuation = PlotValuation {
        area_sqft: area.sqft(),
        area_sqmt: area.sqmt(),
        ..Default::default()
    };

    if area.sqft() > Decimal::ZERO {
        valuation.gov_value = price(area.sqft(), gov_rate);
        valuation.market_value = price(area.sqft(), market_rate);

        // Both rates zero skips the blend entirely.
        if gov_rate > Decimal::ZERO || market_rate > Decimal::ZERO {
            valuation.fair_market_value = price(area.sqft(), weighted_rate(gov_rate, market_rate));
        }
    }

    valuation
}

fn price(area_sqft: Decimal, rate: Decimal) -> Decimal {
    (area_sqft * rate).round_dp(MONEY_SCALE)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
