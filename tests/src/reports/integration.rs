#![cfg(test)]
use bhumi_core::report::{ReportNumber, ReportSequence};
use chrono::NaiveDate;

/// Numbers issued across a month boundary restart the sequence.
#[test]
fn sequence_over_a_month_boundary() {
    let existing = ["VAL-2025-07-0001", "VAL-2025-07-0002", "legacy-17"];
    let mut seq = ReportSequence::seeded(existing);

    let july = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
    let august = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();

    let issued: Vec<String> = [july, july, august]
        .into_iter()
        .map(|d| seq.next(d).unwrap().to_string())
        .collect();

    assert_eq!(
        issued,
        vec!["VAL-2025-07-0003", "VAL-2025-07-0004", "VAL-2025-08-0001"]
    );
}

#[test]
fn issued_numbers_parse_back() {
    let mut seq = ReportSequence::new();
    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

    let issued: ReportNumber = seq.next(date).unwrap();
    let parsed: ReportNumber = issued.to_string().parse().unwrap();
    assert_eq!(parsed, issued);
}
