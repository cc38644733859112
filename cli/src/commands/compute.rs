use bhumi_common::config::Config;
use bhumi_common::land::measurement::PlotMeasurement;
use bhumi_common::land::valuation::PlotValuation;
use bhumi_core::{Plot, area_display};
use colored::*;
use serde::Serialize;
use tracing::error;

use crate::commands::PlotArgs;
use crate::terminal::{format, print};

#[derive(Serialize)]
struct ComputeOutput<'a> {
    display: String,
    measurement: &'a PlotMeasurement,
    valuation: &'a PlotValuation,
}

pub fn compute(args: &PlotArgs, cfg: &Config) -> anyhow::Result<()> {
    let measurement = args.to_measurement()?;

    let plot: Plot = match Plot::new(measurement) {
        Ok(plot) => plot,
        Err(err) => {
            for field_error in err.errors() {
                error!("{field_error}");
            }
            anyhow::bail!("plot measurement rejected ({} invalid field(s))", err.errors().len());
        }
    };

    if cfg.json {
        let output = ComputeOutput {
            display: plot.area_display(),
            measurement: plot.measurement(),
            valuation: plot.valuation(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print::header("plot valuation", cfg.quiet);
    print_plot(&plot);
    Ok(())
}

fn print_plot(plot: &Plot) {
    let valuation = plot.valuation();
    let details = format::valuation_to_details(valuation);

    let label = area_display(plot.measurement(), valuation);
    print::set_key_width(
        std::iter::once("Entered as").chain(details.iter().map(|(k, _)| k.as_str())),
    );

    print::aligned_line("Entered as", label.bold());
    for (key, value) in details {
        print::aligned_line(&key, value);
    }
}
