//! Visible date range derivation and calendar period arithmetic.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::Serialize;

use crate::fields::TimeUnit;
use crate::task::Task;

/// Week start used when a view does not choose one.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// Longest range the engine will lay out (about ten years). Longer ranges are clamped.
pub const MAX_RANGE_DAYS: i64 = 3653;

/// Inclusive span of calendar days covered by a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Number of days in the range, counting both endpoints.
    pub fn total_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    /// Days from the start of the range to `date` (negative before the range).
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        days_between(self.start, date)
    }

    /// `days` as a fraction of the range width. A degenerate range divides by one.
    pub fn fraction(&self, days: i64) -> f64 {
        days as f64 / self.total_days().max(1) as f64
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// Compute the range for a set of scheduled tasks.
///
/// Only tasks carrying both dates contribute. With none, the range is the month
/// containing `today`. Otherwise the earliest and latest of all start and end dates are
/// padded per time unit: days `+7d`, weeks to the end of the week two weeks after, months
/// to the end of the following month, quarters to the end of the same quarter.
pub fn derive_range<'a, I>(
    tasks: I,
    unit: TimeUnit,
    today: NaiveDate,
    week_start: Weekday,
) -> DateRange
where
    I: IntoIterator<Item = &'a Task>,
{
    let bounds = tasks
        .into_iter()
        .filter_map(Task::dates)
        .fold(None, |acc: Option<(NaiveDate, NaiveDate)>, (s, e)| {
            let lo = s.min(e);
            let hi = s.max(e);
            Some(match acc {
                None => (lo, hi),
                Some((min, max)) => (min.min(lo), max.max(hi)),
            })
        });

    let Some((min, max)) = bounds else {
        return DateRange::new(first_of_month(today), last_of_month(today));
    };

    let range = match unit {
        TimeUnit::Days => DateRange::new(min, add_days(max, 7)),
        TimeUnit::Weeks => DateRange::new(
            start_of_week(min, week_start),
            end_of_week(add_days(max, 14), week_start),
        ),
        TimeUnit::Months => DateRange::new(first_of_month(min), last_of_month(add_months(max, 1))),
        // No trailing quarter of lookahead.
        TimeUnit::Quarters => DateRange::new(first_of_quarter(min), last_of_quarter(max)),
    };

    clamp_range_to_unit(range, unit, week_start)
}

/// Cap a range at `MAX_RANGE_DAYS`, keeping its start.
pub fn clamp_range(range: DateRange) -> DateRange {
    clamp_range_to_unit(range, TimeUnit::Days, DEFAULT_WEEK_START)
}

/// Cap a range at `MAX_RANGE_DAYS`, then pull the end back to the last whole period of
/// `unit` so the final header does not overhang.
pub fn clamp_range_to_unit(range: DateRange, unit: TimeUnit, week_start: Weekday) -> DateRange {
    if range.total_days() <= MAX_RANGE_DAYS {
        return range;
    }
    let capped = add_days(range.start, MAX_RANGE_DAYS - 1);
    let end = match unit {
        TimeUnit::Days => capped,
        TimeUnit::Weeks if end_of_week(capped, week_start) == capped => capped,
        TimeUnit::Weeks => add_days(start_of_week(capped, week_start), -1),
        TimeUnit::Months if last_of_month(capped) == capped => capped,
        TimeUnit::Months => add_days(first_of_month(capped), -1),
        TimeUnit::Quarters if last_of_quarter(capped) == capped => capped,
        TimeUnit::Quarters => add_days(first_of_quarter(capped), -1),
    }
    .max(range.start);
    tracing::warn!(
        start = %range.start,
        requested_end = %range.end,
        clamped_end = %end,
        unit = ?unit,
        "timeline range exceeds {MAX_RANGE_DAYS} days, clamping"
    );
    DateRange::new(range.start, end)
}

/// Whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Shift a date by `days`, saturating at the ends of the calendar.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Shift a date forward by whole months, clamping the day to the target month's length.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(NaiveDate::MAX)
}

pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let back = (date.weekday().num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7;
    add_days(date, -(back as i64))
}

pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    add_days(start_of_week(date, week_start), 6)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    add_days(date, -(date.day0() as i64))
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    add_days(first_of_month(date), days_in_month(date.year(), date.month()) as i64 - 1)
}

pub fn first_of_quarter(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .checked_sub_months(Months::new(date.month0() % 3))
        .unwrap_or(first)
}

pub fn last_of_quarter(date: NaiveDate) -> NaiveDate {
    last_of_month(add_months(first_of_quarter(date), 2))
}

/// Quarter number, 1 through 4.
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Days in the quarter that starts at `quarter_start`.
pub fn days_in_quarter(quarter_start: NaiveDate) -> i64 {
    days_between(quarter_start, last_of_quarter(quarter_start)) + 1
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
