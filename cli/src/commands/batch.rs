use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use bhumi_common::config::Config;
use bhumi_common::error::FieldError;
use bhumi_common::land::measurement::PlotMeasurement;
use bhumi_common::land::valuation::PlotValuation;
use bhumi_core::summary::PropertySummary;
use bhumi_core::{PlotResult, area_display, recompute_all};
use colored::*;
use serde::Serialize;
use tracing::info;

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

#[derive(Serialize)]
struct BatchEntry<'a> {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    valuation: Option<&'a PlotValuation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

#[derive(Serialize)]
struct BatchOutput<'a> {
    plots: Vec<BatchEntry<'a>>,
    summary: &'a PropertySummary,
    rejected: usize,
}

pub fn batch(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let content: String =
        fs::read_to_string(file).with_context(|| format!("cannot read {}", file.display()))?;
    let measurements: Vec<PlotMeasurement> = parse_measurements(&content)
        .with_context(|| format!("cannot parse plots in {}", file.display()))?;
    info!("Loaded {} plot(s) from {}", measurements.len(), file.display());

    let spinner = spinner::start(
        format!("Recomputing {} plots...", measurements.len()),
        cfg.quiet > 0 || cfg.json,
    );
    let start_time: Instant = Instant::now();
    let results: Vec<PlotResult> = recompute_all(&measurements, !cfg.sequential);
    spinner.finish_and_clear();

    let summary: PropertySummary = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    let rejected: usize = results.len() - summary.plots;

    if cfg.json {
        print_json(&results, &summary, rejected)?;
    } else {
        print_results(&measurements, &results, cfg);
        print_summary(&summary, rejected, start_time.elapsed().as_secs_f64(), cfg);
    }

    if rejected > 0 {
        anyhow::bail!("{rejected} plot(s) failed validation");
    }
    Ok(())
}

/// Accepts a JSON array of measurements, or one measurement per line.
pub fn parse_measurements(content: &str) -> anyhow::Result<Vec<PlotMeasurement>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<PlotMeasurement>(line)
                .with_context(|| format!("line {}", idx + 1))
        })
        .collect()
}

fn print_json(results: &[PlotResult], summary: &PropertySummary, rejected: usize) -> anyhow::Result<()> {
    let plots: Vec<BatchEntry> = results
        .iter()
        .enumerate()
        .map(|(index, result)| BatchEntry {
            index,
            valuation: result.as_ref().ok(),
            errors: result.as_ref().err().map(|e| e.errors()),
        })
        .collect();

    let output = BatchOutput {
        plots,
        summary,
        rejected,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_results(measurements: &[PlotMeasurement], results: &[PlotResult], cfg: &Config) {
    print::header("plot valuations", cfg.quiet);
    for (idx, (measurement, result)) in measurements.iter().zip(results).enumerate() {
        match result {
            Ok(valuation) => {
                print::tree_head(idx, &area_display(measurement, valuation));
                print::as_tree_one_level(format::valuation_to_details(valuation));
            }
            Err(err) => {
                print::tree_head(idx, &"rejected".color(colors::REJECTED).to_string());
                print::as_tree_one_level(format::rejection_to_details(err));
            }
        }
        if idx + 1 != results.len() {
            mprint!();
        }
    }
}

fn print_summary(summary: &PropertySummary, rejected: usize, seconds: f64, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let valued: ColoredString = format!("{} plots", summary.plots).bold().green();
    let total: ColoredString = format::money(summary.total_value).bold();
    let output: String = format!("{valued} valued at {total} in {seconds:.2}s");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => print::print_status(&output),
    }

    print::set_key_width(["Total area", "Metric", "Rejected"]);
    print::aligned_line("Total area", format::area(summary.total_area_sqft, "sq.ft"));
    print::aligned_line("Metric", format::area(summary.total_area_sqmt, "sq.m"));
    if rejected > 0 {
        print::aligned_line("Rejected", rejected.to_string().color(colors::REJECTED));
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
