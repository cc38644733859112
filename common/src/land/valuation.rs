use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures derived from a [`PlotMeasurement`](super::measurement::PlotMeasurement).
///
/// Never edited on its own: a valuation is only ever produced by running the
/// calculator over the measurement it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotValuation {
    pub area_sqft: Decimal,
    pub area_sqmt: Decimal,
    pub gov_value: Decimal,
    pub market_value: Decimal,
    pub fair_market_value: Decimal,
}
