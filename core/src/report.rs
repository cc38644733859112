//! # Report Numbering
//!
//! Valuation reports are numbered `VAL-YYYY-MM-NNNN`, restarting at `0001`
//! every month.
//!
//! [`ReportSequence`] is an explicit counter: seed it with the numbers that
//! already exist, then ask it for the next one. It holds no global state, so
//! the record keeping layer decides where the seed comes from and how the
//! issued numbers are persisted.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use bhumi_common::error::ReportNumberError;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub const REPORT_PREFIX: &str = "VAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportNumber {
    pub year: i32,
    pub month: u32,
    pub sequence: u32,
}

impl fmt::Display for ReportNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{REPORT_PREFIX}-{:04}-{:02}-{:04}",
            self.year, self.month, self.sequence
        )
    }
}

impl FromStr for ReportNumber {
    type Err = ReportNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ReportNumberError::Malformed(s.to_string());

        let mut parts = s.trim().split('-');
        let (Some(prefix), Some(year), Some(month), Some(sequence), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(malformed());
        };

        if prefix != REPORT_PREFIX || year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }

        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        let sequence: u32 = sequence.parse().map_err(|_| malformed())?;

        if !(1..=12).contains(&month) {
            return Err(malformed());
        }

        Ok(ReportNumber {
            year,
            month,
            sequence,
        })
    }
}

/// Per-month counter of issued report numbers.
#[derive(Debug, Clone, Default)]
pub struct ReportSequence {
    last_issued: BTreeMap<(i32, u32), u32>,
}

impl ReportSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from existing report numbers.
    ///
    /// Numbers that do not parse are skipped.
    pub fn seeded<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sequence = Self::new();
        for raw in existing {
            match raw.parse::<ReportNumber>() {
                Ok(number) => sequence.observe(number),
                Err(e) => debug!("Skipping existing report number: {e}"),
            }
        }
        sequence
    }

    /// Records a number issued elsewhere.
    pub fn observe(&mut self, number: ReportNumber) {
        let last = self
            .last_issued
            .entry((number.year, number.month))
            .or_insert(0);
        *last = (*last).max(number.sequence);
    }

    /// The number `next` would return, without issuing it.
    pub fn peek(&self, date: NaiveDate) -> Result<ReportNumber, ReportNumberError> {
        let key = (date.year(), date.month());
        let last = self.last_issued.get(&key).copied().unwrap_or(0);

        let sequence = last.checked_add(1).ok_or_else(|| {
            ReportNumberError::Exhausted(format!("{:04}-{:02}", key.0, key.1))
        })?;

        Ok(ReportNumber {
            year: key.0,
            month: key.1,
            sequence,
        })
    }

    /// Issues the next number for the month containing `date`.
    pub fn next(&mut self, date: NaiveDate) -> Result<ReportNumber, ReportNumberError> {
        let number = self.peek(date)?;
        self.observe(number);
        Ok(number)
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
