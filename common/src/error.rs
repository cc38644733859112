//! # Error Types
//!
//! Everything the calculator can refuse to do. Validation problems are
//! aggregated so a caller can show every offending field at once.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::land::valuation::PlotValuation;

/// A single input field of a plot measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Ropani,
    Ana,
    Paisa,
    Dam,
    Bigha,
    Kattha,
    Dhur,
    GovRatePerSqft,
    MarketRatePerSqft,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Ropani => "ropani",
            Field::Ana => "ana",
            Field::Paisa => "paisa",
            Field::Dam => "dam",
            Field::Bigha => "bigha",
            Field::Kattha => "kattha",
            Field::Dhur => "dhur",
            Field::GovRatePerSqft => "gov_rate_per_sqft",
            Field::MarketRatePerSqft => "market_rate_per_sqft",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rejected field together with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every field of a measurement that failed validation.
///
/// Always holds at least one [`FieldError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Wraps the collected field errors, or returns `None` when there are none.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    /// Message recorded for `field`, if that field was rejected.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "invalid plot measurement: {}", joined.join("; "))
    }
}

/// Failures tied to a stored plot record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The persisted valuation no longer matches its measurement.
    #[error("stored valuation has drifted: expected {expected:?}, found {found:?}")]
    StaleValuation {
        expected: Box<PlotValuation>,
        found: Box<PlotValuation>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("area must not be negative, got {0}")]
    NegativeArea(Decimal),

    #[error("area {0} is too large to express in whole units")]
    Overflow(Decimal),

    #[error("invalid {system} area '{input}': {reason}")]
    Parse {
        system: &'static str,
        input: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportNumberError {
    #[error("report number '{0}' does not match VAL-YYYY-MM-NNNN")]
    Malformed(String),

    #[error("report sequence for {0} is exhausted")]
    Exhausted(String),
}
