//! Period header rows for the timeline axis.
//!
//! Each header carries its span in days and the matching fraction of the full range, so a
//! renderer sizing columns by `width_fraction` stays aligned with the task bars below.
//!
//! Both builders first cap the range with [`clamp_range`]. Offsets, spans and fractions are
//! measured against the capped range. Ranges from `derive_range` are already capped.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::range::{
    add_days, add_months, clamp_range, days_in_month, days_in_quarter, first_of_month,
    first_of_quarter, quarter_of, DateRange,
};
use crate::fields::TimeUnit;

/// One column of the header row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodHeader {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_label: Option<String>,
    pub start: NaiveDate,
    pub start_offset_days: i64,
    pub span_days: i64,
    pub width_fraction: f64,
}

/// One cell of the month row drawn above day and week columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthHeader {
    pub month: String,
    pub year: i32,
    pub start_idx: usize,
    pub span_days: i64,
    pub width_fraction: f64,
}

impl PeriodHeader {
    fn new(range: &DateRange, start: NaiveDate, span_days: i64, label: String) -> Self {
        PeriodHeader {
            label,
            sub_label: None,
            start,
            start_offset_days: range.offset_of(start),
            span_days,
            width_fraction: range.fraction(span_days),
        }
    }
}

/// Build the header row for `unit`, stepping from the start of the range to its end.
pub fn build_headers(range: &DateRange, unit: TimeUnit) -> Vec<PeriodHeader> {
    let range = &clamp_range(*range);
    match unit {
        TimeUnit::Days => range
            .days()
            .map(|day| PeriodHeader::new(range, day, 1, day.day().to_string()))
            .collect(),
        TimeUnit::Weeks => week_headers(range),
        TimeUnit::Months => month_headers(range),
        TimeUnit::Quarters => quarter_headers(range),
    }
}

// The last block may run past the end of the range.
fn week_headers(range: &DateRange) -> Vec<PeriodHeader> {
    let blocks = (range.total_days().max(0) + 6) / 7;
    (0..blocks)
        .map(|i| {
            let start = add_days(range.start, i * 7);
            let end = add_days(start, 6);
            let mut header =
                PeriodHeader::new(range, start, 7, format!("W{}", start.iso_week().week()));
            header.sub_label = Some(format!("{} - {}", start.day(), end.day()));
            header
        })
        .collect()
}

fn month_headers(range: &DateRange) -> Vec<PeriodHeader> {
    let mut headers = Vec::new();
    let mut cursor = first_of_month(range.start);
    while cursor <= range.end {
        let span = days_in_month(cursor.year(), cursor.month()) as i64;
        let label = format!("{} {}", cursor.format("%B"), cursor.year());
        headers.push(PeriodHeader::new(range, cursor, span, label));

        let next = add_months(cursor, 1);
        if next <= cursor {
            break;
        }
        cursor = next;
    }
    headers
}

fn quarter_headers(range: &DateRange) -> Vec<PeriodHeader> {
    let mut headers = Vec::new();
    let mut cursor = first_of_quarter(range.start);
    while cursor <= range.end {
        let label = format!("Q{} {}", quarter_of(cursor), cursor.year());
        headers.push(PeriodHeader::new(range, cursor, days_in_quarter(cursor), label));

        let next = add_months(cursor, 3);
        if next <= cursor {
            break;
        }
        cursor = next;
    }
    headers
}

/// Group the days of the range into runs sharing a calendar month.
///
/// Spans always sum to `clamp_range(*range).total_days()`, which is `range.total_days()`
/// for any range within `MAX_RANGE_DAYS`.
pub fn build_month_headers(range: &DateRange) -> Vec<MonthHeader> {
    let range = &clamp_range(*range);
    let mut headers: Vec<MonthHeader> = Vec::new();
    for (idx, day) in range.days().enumerate() {
        match headers.last_mut() {
            Some(last) if last.year == day.year() && last.month == month_name(day) => {
                last.span_days += 1;
            }
            _ => headers.push(MonthHeader {
                month: month_name(day),
                year: day.year(),
                start_idx: idx,
                span_days: 1,
                width_fraction: 0.0,
            }),
        }
    }
    for header in &mut headers {
        header.width_fraction = range.fraction(header.span_days);
    }
    headers
}

fn month_name(day: NaiveDate) -> String {
    day.format("%B").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::MAX_RANGE_DAYS;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn day_headers_label_day_of_month() {
        let range = DateRange::new(d(2024, 1, 30), d(2024, 2, 2));
        let headers = build_headers(&range, TimeUnit::Days);
        let labels: Vec<_> = headers.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, ["30", "31", "1", "2"]);
        assert!(headers.iter().all(|h| h.span_days == 1));
        assert_eq!(headers[3].start_offset_days, 3);
        assert!((headers[0].width_fraction - 0.25).abs() < 1e-9);
    }

    #[test]
    fn week_headers_use_iso_week_of_block_start() {
        let range = DateRange::new(d(2023, 12, 31), d(2024, 1, 20));
        let headers = build_headers(&range, TimeUnit::Weeks);
        assert_eq!(headers.len(), 3);
        // 2023-12-31 is a Sunday, still in ISO week 52 of 2023.
        assert_eq!(headers[0].label, "W52");
        assert_eq!(headers[0].sub_label.as_deref(), Some("31 - 6"));
        assert_eq!(headers[1].label, "W1");
        assert_eq!(headers[1].sub_label.as_deref(), Some("7 - 13"));
        assert_eq!(headers[2].start_offset_days, 14);
    }

    #[test]
    fn last_week_block_may_overrun_the_range() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 10));
        let headers = build_headers(&range, TimeUnit::Weeks);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[1].span_days, 7);
        assert_eq!(headers[1].sub_label.as_deref(), Some("8 - 14"));
    }

    #[test]
    fn month_headers_span_calendar_months() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 3, 31));
        let headers = build_headers(&range, TimeUnit::Months);
        let labels: Vec<_> = headers.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, ["January 2024", "February 2024", "March 2024"]);
        let spans: Vec<_> = headers.iter().map(|h| h.span_days).collect();
        assert_eq!(spans, [31, 29, 31]);
        let width: f64 = headers.iter().map(|h| h.width_fraction).sum();
        assert!((width - 1.0).abs() < 1e-9);
    }

    #[test]
    fn quarter_headers_label_and_span() {
        let range = DateRange::new(d(2024, 7, 1), d(2025, 3, 31));
        let headers = build_headers(&range, TimeUnit::Quarters);
        let labels: Vec<_> = headers.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, ["Q3 2024", "Q4 2024", "Q1 2025"]);
        let spans: Vec<_> = headers.iter().map(|h| h.span_days).collect();
        assert_eq!(spans, [92, 92, 90]);
    }

    #[test]
    fn quarter_label_for_august() {
        let range = DateRange::new(d(2024, 8, 15), d(2024, 8, 15));
        let headers = build_headers(&range, TimeUnit::Quarters);
        assert_eq!(headers[0].label, "Q3 2024");
        assert_eq!(headers[0].start, d(2024, 7, 1));
    }

    #[test]
    fn month_row_groups_consecutive_days() {
        let range = DateRange::new(d(2024, 1, 28), d(2024, 3, 2));
        let months = build_month_headers(&range);
        assert_eq!(months.len(), 3);
        assert_eq!((months[0].month.as_str(), months[0].start_idx, months[0].span_days), ("January", 0, 4));
        assert_eq!((months[1].month.as_str(), months[1].start_idx, months[1].span_days), ("February", 4, 29));
        assert_eq!((months[2].month.as_str(), months[2].start_idx, months[2].span_days), ("March", 33, 2));
        let total: i64 = months.iter().map(|m| m.span_days).sum();
        assert_eq!(total, range.total_days());
    }

    #[test]
    fn overlong_ranges_cap_both_rows_alike() {
        let range = DateRange::new(d(2000, 1, 1), d(2030, 1, 1));
        let capped = clamp_range(range);
        assert_eq!(capped.total_days(), MAX_RANGE_DAYS);

        let days = build_headers(&range, TimeUnit::Days);
        assert_eq!(days.len() as i64, MAX_RANGE_DAYS);
        assert_eq!(days.last().map(|h| h.start), Some(capped.end));

        let months = build_month_headers(&range);
        let total: i64 = months.iter().map(|m| m.span_days).sum();
        assert_eq!(total, capped.total_days());
        let width: f64 = months.iter().map(|m| m.width_fraction).sum();
        assert!((width - 1.0).abs() < 1e-9);

        let weeks = build_headers(&range, TimeUnit::Weeks);
        assert_eq!(weeks.len() as i64, (MAX_RANGE_DAYS + 6) / 7);
    }

    #[test]
    fn month_row_splits_same_month_across_years() {
        let range = DateRange::new(d(2023, 12, 30), d(2024, 1, 2));
        let months = build_month_headers(&range);
        assert_eq!(months.len(), 2);
        assert_eq!((months[0].year, months[1].year), (2023, 2024));
    }
}
