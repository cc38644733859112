use bhumi_common::config::Config;
use bhumi_core::report::ReportSequence;
use chrono::{Local, NaiveDate};
use colored::*;

use crate::terminal::print;

pub fn next_number(date: Option<NaiveDate>, existing: &[String], cfg: &Config) -> anyhow::Result<()> {
    let date: NaiveDate = date.unwrap_or_else(|| Local::now().date_naive());
    let sequence = ReportSequence::seeded(existing.iter().map(String::as_str));
    let number = sequence.peek(date)?;

    if cfg.json {
        println!("{}", serde_json::json!({ "report_number": number.to_string() }));
        return Ok(());
    }

    print::header("report number", cfg.quiet);
    print::set_key_width(["Next"]);
    print::aligned_line("Next", number.to_string().bold());
    Ok(())
}
