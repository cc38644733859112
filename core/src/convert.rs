//! # Reverse Conversion
//!
//! Expresses a square-foot area in each traditional system, largest unit
//! first. The smallest unit keeps the remainder as a fraction: Dam to four
//! places, Dhur to two.

use bhumi_common::error::ConversionError;
use bhumi_common::land::traditional::{BighaArea, RopaniArea};
use bhumi_common::land::units::{
    DAM_SCALE, SQFT_PER_ANA, SQFT_PER_BIGHA, SQFT_PER_DAM, SQFT_PER_DHUR, SQFT_PER_KATTHA,
    SQFT_PER_PAISA, SQFT_PER_ROPANI,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const DHUR_SCALE: u32 = 2;

pub fn sqft_to_ropani(area_sqft: Decimal) -> Result<RopaniArea, ConversionError> {
    ensure_non_negative(area_sqft)?;

    let (ropani, rest) = split(area_sqft, SQFT_PER_ROPANI, area_sqft)?;
    let (ana, rest) = split(rest, SQFT_PER_ANA, area_sqft)?;
    let (paisa, rest) = split(rest, SQFT_PER_PAISA, area_sqft)?;
    let dam = (rest / SQFT_PER_DAM).round_dp(DAM_SCALE);

    Ok(RopaniArea {
        ropani,
        ana,
        paisa,
        dam,
    })
}

pub fn sqft_to_bigha(area_sqft: Decimal) -> Result<BighaArea, ConversionError> {
    ensure_non_negative(area_sqft)?;

    let (bigha, rest) = split(area_sqft, SQFT_PER_BIGHA, area_sqft)?;
    let (kattha, rest) = split(rest, SQFT_PER_KATTHA, area_sqft)?;
    let dhur = (rest / SQFT_PER_DHUR).round_dp(DHUR_SCALE);

    Ok(BighaArea {
        bigha,
        kattha,
        dhur,
    })
}

fn ensure_non_negative(area_sqft: Decimal) -> Result<(), ConversionError> {
    if area_sqft.is_sign_negative() && !area_sqft.is_zero() {
        return Err(ConversionError::NegativeArea(area_sqft));
    }
    Ok(())
}

/// Whole units of `unit` in `area`, and what is left over.
fn split(area: Decimal, unit: Decimal, original: Decimal) -> Result<(i64, Decimal), ConversionError> {
    let whole = (area / unit)
        .floor()
        .to_i64()
        .ok_or(ConversionError::Overflow(original))?;
    Ok((whole, area % unit))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
