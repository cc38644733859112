//! Totals across the plots of one property.

use bhumi_common::land::valuation::PlotValuation;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertySummary {
    pub plots: usize,
    pub total_area_sqft: Decimal,
    pub total_area_sqmt: Decimal,
    /// Sum of the plots' fair market values.
    pub total_value: Decimal,
}

impl PropertySummary {
    pub fn add(&mut self, valuation: &PlotValuation) {
        self.plots += 1;
        self.total_area_sqft += valuation.area_sqft;
        self.total_area_sqmt += valuation.area_sqmt;
        self.total_value += valuation.fair_market_value;
    }
}

impl<'a> Extend<&'a PlotValuation> for PropertySummary {
    fn extend<I: IntoIterator<Item = &'a PlotValuation>>(&mut self, iter: I) {
        for valuation in iter {
            self.add(valuation);
        }
    }
}

impl<'a> FromIterator<&'a PlotValuation> for PropertySummary {
    fn from_iter<I: IntoIterator<Item = &'a PlotValuation>>(iter: I) -> Self {
        let mut summary = Self::default();
        summary.extend(iter);
        summary
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
