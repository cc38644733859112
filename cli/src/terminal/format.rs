use crate::terminal::colors;
use bhumi_common::error::ValidationError;
use bhumi_common::land::valuation::PlotValuation;
use bhumi_core::display::group_thousands;
use colored::*;
use rust_decimal::Decimal;

type Detail = (String, ColoredString);

pub fn area(value: Decimal, unit: &str) -> ColoredString {
    format!("{} {}", group_thousands(value), unit).color(colors::AREA)
}

pub fn money(value: Decimal) -> ColoredString {
    format!("Rs. {}", group_thousands(value)).color(colors::MONEY)
}

pub fn valuation_to_details(valuation: &PlotValuation) -> Vec<Detail> {
    vec![
        (String::from("Area"), area(valuation.area_sqft, "sq.ft")),
        (String::from("Metric"), area(valuation.area_sqmt, "sq.m")),
        (String::from("Government"), money(valuation.gov_value)),
        (String::from("Market"), money(valuation.market_value)),
        (String::from("Fair market"), money(valuation.fair_market_value).bold()),
    ]
}

pub fn rejection_to_details(err: &ValidationError) -> Vec<Detail> {
    err.errors()
        .iter()
        .map(|e| (e.field.to_string(), e.message.color(colors::REJECTED)))
        .collect()
}
