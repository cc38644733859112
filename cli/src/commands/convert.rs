use bhumi_common::config::Config;
use bhumi_core::convert::{sqft_to_bigha, sqft_to_ropani};
use bhumi_core::normalizer::sqft_to_sqmt;
use colored::*;
use rust_decimal::Decimal;
use serde_json::json;

use crate::terminal::{format, print};

pub fn convert(sqft: Decimal, cfg: &Config) -> anyhow::Result<()> {
    let ropani = sqft_to_ropani(sqft)?;
    let bigha = sqft_to_bigha(sqft)?;
    let sqmt = sqft_to_sqmt(sqft);

    if cfg.json {
        let output = json!({
            "area_sqft": sqft,
            "area_sqmt": sqmt,
            "ropani": ropani,
            "bigha": bigha,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print::header("area conversion", cfg.quiet);
    print::set_key_width(["Square feet", "Square meters", "R-A-P-D", "B-K-D"]);
    print::aligned_line("Square feet", format::area(sqft, "sq.ft"));
    print::aligned_line("Square meters", format::area(sqmt, "sq.m"));
    print::aligned_line("R-A-P-D", ropani.to_string().bold());
    print::aligned_line("B-K-D", bigha.to_string().bold());
    Ok(())
}
