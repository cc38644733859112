use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::ConversionError;
use crate::land::traditional::{BighaArea, RopaniArea};

/// Raw plot input as supplied by the record keeping layer.
///
/// Fields are signed so that bad input survives long enough to be reported
/// by validation. Missing fields deserialize as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotMeasurement {
    pub ropani: i64,
    pub ana: i64,
    pub paisa: i64,
    pub dam: Decimal,

    pub bigha: i64,
    pub kattha: i64,
    pub dhur: i64,

    pub gov_rate_per_sqft: Decimal,
    pub market_rate_per_sqft: Decimal,
}

impl PlotMeasurement {
    /// True when any Ropani system field is nonzero.
    pub fn has_ropani_units(&self) -> bool {
        self.ropani != 0 || self.ana != 0 || self.paisa != 0 || !self.dam.is_zero()
    }

    /// True when any Bigha system field is nonzero.
    pub fn has_bigha_units(&self) -> bool {
        self.bigha != 0 || self.kattha != 0 || self.dhur != 0
    }

    pub fn ropani_area(&self) -> RopaniArea {
        RopaniArea {
            ropani: self.ropani,
            ana: self.ana,
            paisa: self.paisa,
            dam: self.dam,
        }
    }

    pub fn bigha_area(&self) -> BighaArea {
        BighaArea {
            bigha: self.bigha,
            kattha: self.kattha,
            dhur: Decimal::from(self.dhur),
        }
    }

    pub fn with_ropani(mut self, area: &RopaniArea) -> Self {
        self.ropani = area.ropani;
        self.ana = area.ana;
        self.paisa = area.paisa;
        self.dam = area.dam;
        self
    }

    /// Copies a Bigha area into the measurement.
    ///
    /// Dhur is stored as a whole number, so a fractional Dhur is refused.
    pub fn with_bigha(mut self, area: &BighaArea) -> Result<Self, ConversionError> {
        let dhur = area
            .dhur
            .fract()
            .is_zero()
            .then(|| area.dhur.to_i64())
            .flatten()
            .ok_or_else(|| ConversionError::Parse {
                system: "bigha",
                input: area.to_string(),
                reason: format!("dhur '{}' must be a whole number", area.dhur.normalize()),
            })?;

        self.bigha = area.bigha;
        self.kattha = area.kattha;
        self.dhur = dhur;
        Ok(self)
    }

    pub fn with_rates(mut self, gov_rate_per_sqft: Decimal, market_rate_per_sqft: Decimal) -> Self {
        self.gov_rate_per_sqft = gov_rate_per_sqft;
        self.market_rate_per_sqft = market_rate_per_sqft;
        self
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_measurement_has_no_units() {
        let m = PlotMeasurement::default();
        assert!(!m.has_ropani_units());
        assert!(!m.has_bigha_units());
    }

    #[test]
    fn fractional_dam_alone_counts_as_ropani_units() {
        let m = PlotMeasurement {
            dam: dec!(0.25),
            ..Default::default()
        };
        assert!(m.has_ropani_units());
        assert!(!m.has_bigha_units());
    }

    #[test]
    fn with_bigha_refuses_fractional_dhur() {
        let area = BighaArea {
            bigha: 1,
            kattha: 2,
            dhur: dec!(3.5),
        };
        let result = PlotMeasurement::default().with_bigha(&area);
        assert!(matches!(result, Err(ConversionError::Parse { system: "bigha", .. })));
    }

    #[test]
    fn builders_round_trip_through_traditional_areas() {
        let ropani: RopaniArea = "1-2-3-0.5".parse().unwrap();
        let bigha: BighaArea = "2-3-4".parse().unwrap();
        let m = PlotMeasurement::default()
            .with_ropani(&ropani)
            .with_bigha(&bigha)
            .unwrap()
            .with_rates(dec!(100), dec!(250));

        assert_eq!(m.ropani_area(), ropani);
        assert_eq!(m.bigha_area(), bigha);
        assert_eq!(m.dhur, 4);
        assert_eq!(m.market_rate_per_sqft, dec!(250));
    }

    #[test]
    fn missing_json_fields_default_to_zero() {
        let m: PlotMeasurement = serde_json::from_str(r#"{"ropani": 2, "dam": "1.5"}"#).unwrap();
        assert_eq!(m.ropani, 2);
        assert_eq!(m.dam, dec!(1.5));
        assert_eq!(m.bigha, 0);
        assert!(m.gov_rate_per_sqft.is_zero());
    }
}
