pub mod batch;
pub mod compute;
pub mod convert;
pub mod report;

use std::path::PathBuf;

use anyhow::Context;
use bhumi_common::land::measurement::PlotMeasurement;
use bhumi_common::land::traditional::{BighaArea, RopaniArea};
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "bhumi")]
#[command(about = "Land plot valuation from Ropani and Bigha measurements.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output (-q hides headers, -qq prints results only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Value a single plot
    #[command(alias = "c")]
    Compute(PlotArgs),
    /// Recompute every plot listed in a JSON file
    #[command(alias = "b")]
    Batch {
        /// JSON array or JSON lines of plot measurements
        file: PathBuf,
        /// Recompute on one thread
        #[arg(long)]
        sequential: bool,
    },
    /// Express a square-foot area in traditional units
    #[command(alias = "v")]
    Convert { sqft: Decimal },
    /// Print the next valuation report number
    #[command(alias = "r")]
    ReportNumber {
        /// Report date (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
        /// Report numbers already issued
        existing: Vec<String>,
    },
}

#[derive(Args)]
pub struct PlotArgs {
    /// Ropani system area as R-A-P-D
    #[arg(long, value_name = "R-A-P-D", conflicts_with_all = ["ropani", "ana", "paisa", "dam"])]
    pub ropani_area: Option<RopaniArea>,

    /// Bigha system area as B-K-D
    #[arg(long, value_name = "B-K-D", conflicts_with_all = ["bigha", "kattha", "dhur"])]
    pub bigha_area: Option<BighaArea>,

    #[arg(long, allow_negative_numbers = true)]
    pub ropani: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub ana: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub paisa: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub dam: Option<Decimal>,

    #[arg(long, allow_negative_numbers = true)]
    pub bigha: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub kattha: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub dhur: Option<i64>,

    /// Government rate per square foot
    #[arg(long, default_value_t = Decimal::ZERO, allow_negative_numbers = true)]
    pub gov_rate: Decimal,

    /// Market rate per square foot
    #[arg(long, default_value_t = Decimal::ZERO, allow_negative_numbers = true)]
    pub market_rate: Decimal,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl PlotArgs {
    /// Builds the measurement; unset units are zero.
    pub fn to_measurement(&self) -> anyhow::Result<PlotMeasurement> {
        let mut measurement = PlotMeasurement {
            ropani: self.ropani.unwrap_or_default(),
            ana: self.ana.unwrap_or_default(),
            paisa: self.paisa.unwrap_or_default(),
            dam: self.dam.unwrap_or_default(),
            bigha: self.bigha.unwrap_or_default(),
            kattha: self.kattha.unwrap_or_default(),
            dhur: self.dhur.unwrap_or_default(),
            ..Default::default()
        }
        .with_rates(self.gov_rate, self.market_rate);

        if let Some(area) = &self.ropani_area {
            measurement = measurement.with_ropani(area);
        }
        if let Some(area) = &self.bigha_area {
            measurement = measurement
                .with_bigha(area)
                .context("--bigha-area cannot be stored")?;
        }

        Ok(measurement)
    }
}
