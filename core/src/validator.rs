//! # Measurement Validator
//!
//! The only gate in front of the normalizer and the valuation engine.
//!
//! Rules live in a fixed table of `(field, predicate, message)` entries that is
//! evaluated top to bottom. Every field is checked; a field reports at most one
//! message (the first rule it breaks).

use bhumi_common::error::{Field, FieldError, ValidationError};
use bhumi_common::land::measurement::PlotMeasurement;
use bhumi_common::land::units::DAM_SCALE;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

pub const MAX_ANA: i64 = 15;
pub const MAX_PAISA: i64 = 3;
pub const MAX_DAM: Decimal = dec!(4);
pub const MAX_KATTHA: i64 = 19;
pub const MAX_DHUR: i64 = 19;

/// Capacity limit for Ropani and Bigha counts. Land law sets no upper bound;
/// this one keeps areas and values inside `Decimal` range.
pub const MAX_WHOLE_UNITS: i64 = 1_000_000_000;
/// Capacity limit for per square foot rates.
pub const MAX_RATE: Decimal = dec!(1000000000000);

struct Rule {
    field: Field,
    holds: fn(&PlotMeasurement) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        field: Field::Ropani,
        holds: |m| m.ropani >= 0,
        message: "Ropani must not be negative",
    },
    Rule {
        field: Field::Ropani,
        holds: |m| m.ropani <= MAX_WHOLE_UNITS,
        message: "Ropani exceeds the calculator capacity of 1,000,000,000",
    },
    Rule {
        field: Field::Ana,
        holds: |m| (0..=MAX_ANA).contains(&m.ana),
        message: "Ana must be between 0 and 15",
    },
    Rule {
        field: Field::Paisa,
        holds: |m| (0..=MAX_PAISA).contains(&m.paisa),
        message: "Paisa must be between 0 and 3",
    },
    Rule {
        field: Field::Dam,
        holds: |m| m.dam >= Decimal::ZERO && m.dam <= MAX_DAM,
        message: "Dam must be between 0 and 4",
    },
    Rule {
        field: Field::Dam,
        holds: |m| m.dam.normalize().scale() <= DAM_SCALE,
        message: "Dam allows at most 4 decimal places",
    },
    Rule {
        field: Field::Bigha,
        holds: |m| m.bigha >= 0,
        message: "Bigha must not be negative",
    },
    Rule {
        field: Field::Bigha,
        holds: |m| m.bigha <= MAX_WHOLE_UNITS,
        message: "Bigha exceeds the calculator capacity of 1,000,000,000",
    },
    Rule {
        field: Field::Kattha,
        holds: |m| (0..=MAX_KATTHA).contains(&m.kattha),
        message: "Kattha must be between 0 and 19",
    },
    Rule {
        field: Field::Dhur,
        holds: |m| (0..=MAX_DHUR).contains(&m.dhur),
        message: "Dhur must be between 0 and 19",
    },
    Rule {
        field: Field::GovRatePerSqft,
        holds: |m| m.gov_rate_per_sqft >= Decimal::ZERO,
        message: "Government rate must not be negative",
    },
    Rule {
        field: Field::GovRatePerSqft,
        holds: |m| m.gov_rate_per_sqft <= MAX_RATE,
        message: "Government rate exceeds the calculator capacity of 1,000,000,000,000",
    },
    Rule {
        field: Field::MarketRatePerSqft,
        holds: |m| m.market_rate_per_sqft >= Decimal::ZERO,
        message: "Market rate must not be negative",
    },
    Rule {
        field: Field::MarketRatePerSqft,
        holds: |m| m.market_rate_per_sqft <= MAX_RATE,
        message: "Market rate exceeds the calculator capacity of 1,000,000,000,000",
    },
];

/// A measurement that passed every rule.
///
/// Only [`check`] creates one, and the normalizer and engine accept nothing
/// else, so unvalidated input cannot be priced.
#[derive(Debug, Clone, Copy)]
pub struct Validated<'a> {
    measurement: &'a PlotMeasurement,
}

impl<'a> Validated<'a> {
    pub fn measurement(&self) -> &'a PlotMeasurement {
        self.measurement
    }
}

/// Returns one error per invalid field, in field order. Empty when valid.
pub fn validate(measurement: &PlotMeasurement) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = Vec::new();

    for rule in RULES {
        if errors.iter().any(|e| e.field == rule.field) {
            continue;
        }
        if !(rule.holds)(measurement) {
            errors.push(FieldError {
                field: rule.field,
                message: rule.message,
            });
        }
    }

    errors
}

/// Validates `measurement` and hands back the witness needed for pricing.
pub fn check(measurement: &PlotMeasurement) -> Result<Validated<'_>, ValidationError> {
    match ValidationError::from_errors(validate(measurement)) {
        Some(err) => {
            debug!("Rejected measurement with {} invalid field(s)", err.errors().len());
            Err(err)
        }
        None => Ok(Validated { measurement }),
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

    fn rejected(m: &PlotMeasurement) -> Vec<Field> {
        validate(m).into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn default_measurement_is_valid() {
        assert!(validate(&PlotMeasurement::default()).is_empty());
        assert!(check(&PlotMeasurement::default()).is_ok());
    }

    #[test]
    fn ana_boundaries() {
        for ana in [0, 15] {
            let m = PlotMeasurement { ana, ..Default::default() };
            assert!(validate(&m).is_empty(), "ana={ana} should pass");
        }
        for ana in [-1, 16] {
            let m = PlotMeasurement { ana, ..Default::default() };
            assert_eq!(rejected(&m), vec![Field::Ana], "ana={ana} should fail");
        }
    }

    #[test]
    fn paisa_boundaries() {
        for paisa in [0, 3] {
            let m = PlotMeasurement { paisa, ..Default::default() };
            assert!(validate(&m).is_empty(), "paisa={paisa} should pass");
        }
        for paisa in [-1, 4] {
            let m = PlotMeasurement { paisa, ..Default::default() };
            assert_eq!(rejected(&m), vec![Field::Paisa], "paisa={paisa} should fail");
        }
    }

    #[test]
    fn dam_boundaries() {
        for dam in [dec!(0), dec!(3.9999), dec!(4)] {
            let m = PlotMeasurement { dam, ..Default::default() };
            assert!(validate(&m).is_empty(), "dam={dam} should pass");
        }
        for dam in [dec!(-0.0001), dec!(4.0001), dec!(5)] {
            let m = PlotMeasurement { dam, ..Default::default() };
            assert_eq!(rejected(&m), vec![Field::Dam], "dam={dam} should fail");
        }
    }

    #[test]
    fn dam_precision_is_limited_to_four_places() {
        let m = PlotMeasurement { dam: dec!(1.00005), ..Default::default() };
        let errors = validate(&m);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Dam allows at most 4 decimal places");

        // Trailing zeros do not count as precision.
        let m = PlotMeasurement { dam: dec!(1.500000), ..Default::default() };
        assert!(validate(&m).is_empty());
    }

    #[test]
    fn kattha_and_dhur_boundaries() {
        assert!(validate(&PlotMeasurement { kattha: 19, dhur: 19, ..Default::default() }).is_empty());
        assert_eq!(
            rejected(&PlotMeasurement { kattha: 20, dhur: 20, ..Default::default() }),
            vec![Field::Kattha, Field::Dhur]
        );
        assert_eq!(
            rejected(&PlotMeasurement { kattha: -1, ..Default::default() }),
            vec![Field::Kattha]
        );
        assert_eq!(
            rejected(&PlotMeasurement { dhur: -1, ..Default::default() }),
            vec![Field::Dhur]
        );
    }

    #[test]
    fn negative_whole_units_and_rates_are_rejected() {
        let m = PlotMeasurement {
            ropani: -1,
            bigha: -3,
            gov_rate_per_sqft: dec!(-0.01),
            market_rate_per_sqft: dec!(-5),
            ..Default::default()
        };
        assert_eq!(
            rejected(&m),
            vec![
                Field::Ropani,
                Field::Bigha,
                Field::GovRatePerSqft,
                Field::MarketRatePerSqft
            ]
        );
    }

    #[test]
    fn every_violation_is_reported_once() {
        let m = PlotMeasurement {
            ana: 16,
            paisa: -1,
            dam: dec!(-7.123456),
            kattha: 25,
            dhur: 99,
            ..Default::default()
        };
        let err = check(&m).unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec![Field::Ana, Field::Paisa, Field::Dam, Field::Kattha, Field::Dhur]
        );
        assert_eq!(err.message_for(Field::Dam), Some("Dam must be between 0 and 4"));
        assert_eq!(err.message_for(Field::Ana), Some("Ana must be between 0 and 15"));
        assert_eq!(err.message_for(Field::Ropani), None);
    }

    #[test]
    fn validation_error_lists_all_messages() {
        let m = PlotMeasurement { ana: 16, dhur: 20, ..Default::default() };
        let text = check(&m).unwrap_err().to_string();
        assert!(text.contains("ana: Ana must be between 0 and 15"));
        assert!(text.contains("dhur: Dhur must be between 0 and 19"));
    }

    #[test]
    fn whole_units_above_ceiling_are_rejected() {
        let m = PlotMeasurement {
            ropani: MAX_WHOLE_UNITS + 1,
            market_rate_per_sqft: MAX_RATE + dec!(1),
            ..Default::default()
        };
        assert_eq!(rejected(&m), vec![Field::Ropani, Field::MarketRatePerSqft]);
    }

    #[test]
    fn capacity_limits_name_themselves() {
        let m = PlotMeasurement {
            bigha: MAX_WHOLE_UNITS + 1,
            gov_rate_per_sqft: MAX_RATE + dec!(0.01),
            ..Default::default()
        };
        let err = check(&m).unwrap_err();
        assert_eq!(
            err.message_for(Field::Bigha),
            Some("Bigha exceeds the calculator capacity of 1,000,000,000")
        );
        assert_eq!(
            err.message_for(Field::GovRatePerSqft),
            Some("Government rate exceeds the calculator capacity of 1,000,000,000,000")
        );

        let at_limit = PlotMeasurement {
            ropani: MAX_WHOLE_UNITS,
            bigha: MAX_WHOLE_UNITS,
            ..Default::default()
        }
        .with_rates(MAX_RATE, MAX_RATE);
        assert!(validate(&at_limit).is_empty());
    }
}
