//! # Traditional Area Notation
//!
//! Surveyors write areas as dash separated unit counts, largest unit first:
//! * Ropani system: `R-A-P-D` (e.g., `2-7-1-0.5`).
//! * Bigha system: `B-K-D` (e.g., `1-4-10`).
//!
//! Both forms parse with [`FromStr`] and print back in the same notation.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// An area in the hill system: Ropani, Ana, Paisa and a fractional Dam.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RopaniArea {
    pub ropani: i64,
    pub ana: i64,
    pub paisa: i64,
    pub dam: Decimal,
}

/// An area in the Terai system: Bigha, Kattha and Dhur.
///
/// Dhur is fractional only when the area was derived from square feet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BighaArea {
    pub bigha: i64,
    pub kattha: i64,
    pub dhur: Decimal,
}

impl fmt::Display for RopaniArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.ropani,
            self.ana,
            self.paisa,
            self.dam.normalize()
        )
    }
}

impl fmt::Display for BighaArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.bigha, self.kattha, self.dhur.normalize())
    }
}

impl FromStr for RopaniArea {
    type Err = ConversionError;

    /// Parses `R-A-P-D`, where only the Dam part may carry a fraction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split_parts(s, 4, "ropani")?;

        Ok(RopaniArea {
            ropani: parse_whole(parts[0], s, "ropani")?,
            ana: parse_whole(parts[1], s, "ropani")?,
            paisa: parse_whole(parts[2], s, "ropani")?,
            dam: parse_fraction(parts[3], s, "ropani")?,
        })
    }
}

impl FromStr for BighaArea {
    type Err = ConversionError;

    /// Parses `B-K-D`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split_parts(s, 3, "bigha")?;

        Ok(BighaArea {
            bigha: parse_whole(parts[0], s, "bigha")?,
            kattha: parse_whole(parts[1], s, "bigha")?,
            dhur: parse_fraction(parts[2], s, "bigha")?,
        })
    }
}

fn parse_error(system: &'static str, input: &str, reason: String) -> ConversionError {
    ConversionError::Parse {
        system,
        input: input.to_string(),
        reason,
    }
}

fn split_parts<'a>(
    s: &'a str,
    expected: usize,
    system: &'static str,
) -> Result<Vec<&'a str>, ConversionError> {
    let parts: Vec<&str> = s.trim().split('-').map(str::trim).collect();

    if parts.len() != expected {
        return Err(parse_error(
            system,
            s,
            format!("expected {expected} parts, found {}", parts.len()),
        ));
    }
    if let Some(empty) = parts.iter().position(|p| p.is_empty()) {
        return Err(parse_error(system, s, format!("part {} is empty", empty + 1)));
    }

    Ok(parts)
}

fn parse_whole(part: &str, s: &str, system: &'static str) -> Result<i64, ConversionError> {
    part.parse::<i64>()
        .map_err(|e| parse_error(system, s, format!("'{part}' is not a whole number: {e}")))
}

fn parse_fraction(part: &str, s: &str, system: &'static str) -> Result<Decimal, ConversionError> {
    part.parse::<Decimal>()
        .map_err(|e| parse_error(system, s, format!("'{part}' is not a number: {e}")))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
