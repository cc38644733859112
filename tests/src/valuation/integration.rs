#![cfg(test)]
use bhumi_common::error::{Field, PlotError};
use bhumi_common::land::measurement::PlotMeasurement;
use bhumi_common::land::traditional::{BighaArea, RopaniArea};
use bhumi_common::land::valuation::PlotValuation;
use bhumi_core::convert::{sqft_to_bigha, sqft_to_ropani};
use bhumi_core::summary::PropertySummary;
use bhumi_core::{Plot, area_display, compute, recompute_all, validate, verify};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A plot entered in Ropani units only, with rates, is valued end to end.
#[test]
fn one_ropani_end_to_end() {
    let m = PlotMeasurement {
        ropani: 1,
        ..Default::default()
    };

    let v: PlotValuation = compute(&m).unwrap();
    assert_eq!(v.area_sqft, dec!(5476.00));
    assert_eq!(v.area_sqmt, dec!(508.74));
    assert_eq!(area_display(&m, &v), "1-0-0-0 (R-A-P-D)");
}

#[test]
fn one_bigha_end_to_end() {
    let m = PlotMeasurement {
        bigha: 1,
        ..Default::default()
    };

    let v = compute(&m).unwrap();
    assert_eq!(v.area_sqft, dec!(72900.00));
    assert_eq!(area_display(&m, &v), "1-0-0 (B-K-D)");
}

#[test]
fn empty_plot_with_rates_is_worth_nothing() {
    let m = PlotMeasurement::default().with_rates(dec!(2500), dec!(7000));

    let v = compute(&m).unwrap();
    assert_eq!(v, PlotValuation::default());
    assert_eq!(area_display(&m, &v), "0.00 Sq.Ft");
}

#[test]
fn mixed_systems_display_ropani_but_sum_both() {
    let m = PlotMeasurement {
        ropani: 1,
        bigha: 1,
        ..Default::default()
    }
    .with_rates(dec!(10), dec!(20));

    let v = compute(&m).unwrap();
    assert_eq!(v.area_sqft, dec!(78376));
    assert_eq!(v.fair_market_value, dec!(1332392));
    assert_eq!(area_display(&m, &v), "1-0-0-0 (R-A-P-D)");
}

#[test]
fn fair_value_follows_the_blend_for_any_nonzero_rate() {
    let cases = [
        (dec!(10), dec!(20)),
        (dec!(0), dec!(1)),
        (dec!(1), dec!(0)),
        (dec!(1234.56), dec!(9876.54)),
    ];

    for (gov, market) in cases {
        let m = PlotMeasurement {
            ropani: 2,
            ana: 7,
            paisa: 3,
            dam: dec!(1.25),
            ..Default::default()
        }
        .with_rates(gov, market);

        let v = compute(&m).unwrap();
        let expected = (v.area_sqft * (gov * dec!(0.3) + market * dec!(0.7))).round_dp(2);
        assert_eq!(v.fair_market_value, expected, "gov={gov} market={market}");
        assert_eq!(v.gov_value, (v.area_sqft * gov).round_dp(2));
        assert_eq!(v.market_value, (v.area_sqft * market).round_dp(2));
    }
}

#[test]
fn zero_rates_leave_fair_value_at_zero() {
    let m = PlotMeasurement {
        kattha: 10,
        ..Default::default()
    };

    let v = compute(&m).unwrap();
    assert_eq!(v.area_sqft, dec!(36450));
    assert!(v.fair_market_value.is_zero());
}

#[test]
fn area_matches_the_unit_factors() {
    let m = PlotMeasurement {
        ropani: 4,
        ana: 15,
        paisa: 3,
        dam: dec!(3.9999),
        bigha: 2,
        kattha: 19,
        dhur: 19,
        ..Default::default()
    };

    let exact = dec!(4) * dec!(5476)
        + dec!(15) * dec!(342.25)
        + dec!(3) * dec!(85.56)
        + dec!(3.9999) * dec!(21.39)
        + dec!(2) * dec!(72900)
        + dec!(19) * dec!(3645)
        + dec!(19) * dec!(182.25);

    let v = compute(&m).unwrap();
    assert_eq!(v.area_sqft, exact.round_dp(2));
    assert_eq!(v.area_sqmt, (exact * dec!(0.092903)).round_dp(2));
}

#[test]
fn validation_reports_every_bad_field_before_computing() {
    let m = PlotMeasurement {
        ana: 16,
        paisa: 4,
        dam: dec!(4.5),
        kattha: 20,
        dhur: -1,
        gov_rate_per_sqft: dec!(-1),
        ..Default::default()
    };

    let fields: Vec<Field> = validate(&m).into_iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            Field::Ana,
            Field::Paisa,
            Field::Dam,
            Field::Kattha,
            Field::Dhur,
            Field::GovRatePerSqft
        ]
    );

    let err = compute(&m).unwrap_err();
    assert_eq!(err.errors().len(), 6);
}

#[test]
fn bulk_recompute_matches_single_computation() {
    let measurements: Vec<PlotMeasurement> = (0..200)
        .map(|i: i64| PlotMeasurement {
            ropani: i,
            ana: i % 16,
            paisa: i % 4,
            dam: Decimal::new(i % 40, 1),
            bigha: i / 10,
            kattha: i % 20,
            dhur: i % 21,
            gov_rate_per_sqft: Decimal::from(i),
            market_rate_per_sqft: Decimal::from(200 - i),
        })
        .collect();

    let results = recompute_all(&measurements, true);
    assert_eq!(results.len(), measurements.len());

    for (m, result) in measurements.iter().zip(&results) {
        assert_eq!(result, &compute(m));
    }
    // dhur = 20 whenever i % 21 == 20
    assert!(results[20].is_err());
    assert!(results[19].is_ok());
}

#[test]
fn stored_plot_survives_verification_until_edited_behind_its_back() {
    let plot = Plot::new(
        PlotMeasurement {
            bigha: 3,
            kattha: 2,
            ..Default::default()
        }
        .with_rates(dec!(150), dec!(400)),
    )
    .unwrap();

    let (mut measurement, valuation) = plot.into_parts();
    assert!(verify(&measurement, &valuation).is_ok());

    measurement.kattha = 3;
    assert!(matches!(
        verify(&measurement, &valuation),
        Err(PlotError::StaleValuation { .. })
    ));
}

#[test]
fn converted_areas_feed_back_into_the_calculator() {
    let ropani: RopaniArea = sqft_to_ropani(dec!(6705.955)).unwrap();
    let bigha: BighaArea = sqft_to_bigha(dec!(76636.125)).unwrap();

    let from_ropani = compute(&PlotMeasurement::default().with_ropani(&ropani)).unwrap();
    assert_eq!(from_ropani.area_sqft, dec!(6705.96));

    // Half a dhur cannot be stored in a measurement.
    assert!(PlotMeasurement::default().with_bigha(&bigha).is_err());
}

#[test]
fn property_summary_sums_valid_plots() {
    let measurements = vec![
        PlotMeasurement {
            ropani: 1,
            ..Default::default()
        }
        .with_rates(dec!(10), dec!(20)),
        PlotMeasurement {
            ana: 99,
            ..Default::default()
        },
        PlotMeasurement {
            bigha: 1,
            ..Default::default()
        }
        .with_rates(dec!(10), dec!(20)),
    ];

    let results = recompute_all(&measurements, false);
    let summary: PropertySummary = results.iter().filter_map(|r| r.as_ref().ok()).collect();

    assert_eq!(summary.plots, 2);
    assert_eq!(summary.total_area_sqft, dec!(78376));
    assert_eq!(summary.total_value, dec!(1332392));
}

/// Stored records keep decimals as strings so no precision is lost.
#[test]
fn records_round_trip_through_json() {
    let m = PlotMeasurement {
        ropani: 2,
        ana: 3,
        dam: dec!(1.25),
        ..Default::default()
    }
    .with_rates(dec!(1250.50), dec!(2100));
    let v = compute(&m).unwrap();

    let m_json = serde_json::to_value(&m).unwrap();
    let v_json = serde_json::to_value(&v).unwrap();
    assert_eq!(m_json["ropani"], 2);
    assert_eq!(m_json["dam"], "1.25");
    assert_eq!(m_json["gov_rate_per_sqft"], "1250.50");
    assert!(v_json["fair_market_value"].is_string());

    let m_back: PlotMeasurement = serde_json::from_value(m_json).unwrap();
    let v_back: PlotValuation = serde_json::from_value(v_json).unwrap();
    assert_eq!(m_back, m);
    assert_eq!(v_back, v);
    assert!(verify(&m_back, &v_back).is_ok());
}

#[test]
fn json_records_accept_numbers_and_missing_fields() {
    let m: PlotMeasurement =
        serde_json::from_str(r#"{"bigha": 1, "market_rate_per_sqft": 12.5}"#).unwrap();
    assert_eq!(m.kattha, 0);
    assert_eq!(m.market_rate_per_sqft, dec!(12.5));

    let v = compute(&m).unwrap();
    // 72900 * 12.5 * 0.7
    assert_eq!(v.fair_market_value, dec!(637875));
}
