//! Human readable area labels.

use bhumi_common::land::measurement::PlotMeasurement;
use bhumi_common::land::units::AREA_SCALE;
use bhumi_common::land::valuation::PlotValuation;
use rust_decimal::Decimal;

/// Labels a plot's area in the notation it was entered in.
///
/// Ropani notation wins over Bigha notation when both are present; a plot
/// with neither falls back to its square-foot area.
pub fn area_display(measurement: &PlotMeasurement, valuation: &PlotValuation) -> String {
    if measurement.has_ropani_units() {
        format!("{} (R-A-P-D)", measurement.ropani_area())
    } else if measurement.has_bigha_units() {
        format!("{} (B-K-D)", measurement.bigha_area())
    } else {
        format!("{} Sq.Ft", group_thousands(valuation.area_sqft))
    }
}

/// Formats `value` with two decimals and comma separated thousands.
pub fn group_thousands(value: Decimal) -> String {
    let fixed = format!("{:.2}", value.round_dp(AREA_SCALE));
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{fraction}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
