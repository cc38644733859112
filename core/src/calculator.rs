//! # Plot Valuation Calculator
//!
//! Runs the full pipeline (validate, normalize, appraise) for one plot or for
//! a batch of independent plots.
//!
//! Nothing here recomputes anything behind the caller's back: a valuation is
//! produced only when [`compute`] (or one of the helpers built on it) is
//! called explicitly.

use bhumi_common::error::{PlotError, ValidationError};
use bhumi_common::land::measurement::PlotMeasurement;
use bhumi_common::land::valuation::PlotValuation;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{display, engine, normalizer, validator};

pub type PlotResult = Result<PlotValuation, ValidationError>;

/// Validates `measurement` and derives its full valuation.
pub fn compute(measurement: &PlotMeasurement) -> PlotResult {
    let valid = validator::check(measurement)?;
    let area = normalizer::normalize(&valid);
    let valuation = engine::appraise(&area, &valid);

    debug!(
        "Valued plot at {} sq.ft: fair market value {}",
        valuation.area_sqft, valuation.fair_market_value
    );
    Ok(valuation)
}

/// Recomputes every measurement independently.
///
/// Results line up with the input slice whether or not the work is spread
/// across the rayon pool.
pub fn recompute_all(measurements: &[PlotMeasurement], parallel: bool) -> Vec<PlotResult> {
    let results: Vec<PlotResult> = if parallel {
        measurements.par_iter().map(compute).collect()
    } else {
        measurements.iter().map(compute).collect()
    };

    let rejected = results.iter().filter(|r| r.is_err()).count();
    if rejected > 0 {
        warn!("{rejected} of {} plots failed validation", results.len());
    }

    results
}

/// Confirms that a stored valuation still matches its measurement.
pub fn verify(measurement: &PlotMeasurement, stored: &PlotValuation) -> Result<(), PlotError> {
    let expected = compute(measurement)?;

    if &expected != stored {
        return Err(PlotError::StaleValuation {
            expected: Box::new(expected),
            found: Box::new(stored.clone()),
        });
    }
    Ok(())
}

/// A measurement paired with the valuation derived from it.
///
/// Both halves change together or not at all; there is no way to edit the
/// valuation directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plot {
    measurement: PlotMeasurement,
    valuation: PlotValuation,
}

impl Plot {
    pub fn new(measurement: PlotMeasurement) -> Result<Self, ValidationError> {
        let valuation = compute(&measurement)?;
        Ok(Self {
            measurement,
            valuation,
        })
    }

    /// Replaces the measurement and recomputes the valuation.
    ///
    /// On failure the plot keeps its previous measurement and valuation.
    pub fn update(&mut self, measurement: PlotMeasurement) -> Result<(), ValidationError> {
        let valuation = compute(&measurement)?;
        self.measurement = measurement;
        self.valuation = valuation;
        Ok(())
    }

    /// Applies `edit` to a copy of the measurement, then behaves like [`Plot::update`].
    pub fn modify<F>(&mut self, edit: F) -> Result<(), ValidationError>
    where
        F: FnOnce(&mut PlotMeasurement),
    {
        let mut measurement = self.measurement.clone();
        edit(&mut measurement);
        self.update(measurement)
    }

    pub fn measurement(&self) -> &PlotMeasurement {
        &self.measurement
    }

    pub fn valuation(&self) -> &PlotValuation {
        &self.valuation
    }

    pub fn area_display(&self) -> String {
        display::area_display(&self.measurement, &self.valuation)
    }

    pub fn into_parts(self) -> (PlotMeasurement, PlotValuation) {
        (self.measurement, self.valuation)
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
