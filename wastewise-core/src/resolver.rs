//! Collection-date resolution: next occurrence and per-year enumeration.
//!
//! Both operations are pure functions of their inputs. They perform no I/O,
//! keep no state, and are safe to call repeatedly and concurrently; the UI
//! recomputes them on every render.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::model::{LocationSchedule, RecurrenceRule, ResolvedOccurrence, StreamConfig, WasteStream};

/// Maximum number of days scanned forward by [`next_occurrence`].
///
/// Every valid weekday/week-of-month combination recurs at least once every
/// 35 days except week-5-only rules, which can skip months without a fifth
/// occurrence of their weekday. Exhausting this bound on real schedule data
/// is an invariant violation and is logged.
pub const SCAN_HORIZON_DAYS: u32 = 60;

/// Week of the month for a date: `ceil(day_of_month / 7)`, in 1..=5.
///
/// Days 1–7 are week 1, 8–14 week 2, 15–21 week 3, 22–28 week 4, 29–31
/// week 5. This is unrelated to ISO week numbering; week boundaries follow
/// the day of month alone.
#[must_use]
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// Day of week numbered 1 = Monday ..= 7 = Sunday.
#[must_use]
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

fn rule_matches(rule: &RecurrenceRule, date: NaiveDate) -> bool {
    weekday_number(date) == u32::from(rule.day_of_week)
        && rule
            .weeks_of_month
            .iter()
            .any(|&week| u32::from(week) == week_of_month(date))
}

fn occurrence(stream: WasteStream, date: NaiveDate) -> ResolvedOccurrence {
    ResolvedOccurrence {
        date,
        day_of_month: date.day(),
        stream,
    }
}

/// Next collection of `stream` on or after `reference` (inclusive: a
/// collection on the reference date itself is returned).
///
/// Returns `None` when the stream is unconfigured, when an explicit calendar
/// holds no date on or after `reference`, or when no recurrence match exists
/// within [`SCAN_HORIZON_DAYS`]. The original app returned the reference
/// date itself in those cases, silently presenting a non-collection day;
/// here "no upcoming collection" is a distinct result the caller must handle.
#[must_use]
pub fn next_occurrence(
    stream: WasteStream,
    schedule: &LocationSchedule,
    reference: NaiveDate,
) -> Option<ResolvedOccurrence> {
    match schedule.config_for(stream) {
        StreamConfig::Explicit(calendar) => calendar
            .dates
            .range(reference..)
            .next()
            .map(|&date| occurrence(stream, date)),
        StreamConfig::Recurring(rule) => next_recurring(stream, rule, reference),
        StreamConfig::Unconfigured => None,
    }
}

fn next_recurring(
    stream: WasteStream,
    rule: &RecurrenceRule,
    reference: NaiveDate,
) -> Option<ResolvedOccurrence> {
    let mut candidate = reference;
    for _ in 0..SCAN_HORIZON_DAYS {
        if rule_matches(rule, candidate) {
            return Some(occurrence(stream, candidate));
        }
        candidate = candidate.succ_opt()?;
    }

    warn!(
        %stream,
        %reference,
        horizon_days = SCAN_HORIZON_DAYS,
        "no matching collection day within scan horizon"
    );
    None
}

/// All collections of `stream` within the calendar year, ascending.
///
/// Walks every day from Jan 1 to Dec 31 for recurrence rules; filters the
/// published dates for explicit calendars. Unconfigured streams yield an
/// empty sequence.
#[must_use]
pub fn occurrences_in_year(
    stream: WasteStream,
    schedule: &LocationSchedule,
    year: i32,
) -> Vec<ResolvedOccurrence> {
    match schedule.config_for(stream) {
        StreamConfig::Explicit(calendar) => calendar
            .dates
            .iter()
            .filter(|date| date.year() == year)
            .map(|&date| occurrence(stream, date))
            .collect(),
        StreamConfig::Recurring(rule) => {
            let Some(start) = NaiveDate::from_ymd_opt(year, 1, 1) else {
                return Vec::new();
            };
            start
                .iter_days()
                .take_while(|date| date.year() == year)
                .filter(|&date| rule_matches(rule, date))
                .map(|date| occurrence(stream, date))
                .collect()
        }
        StreamConfig::Unconfigured => Vec::new(),
    }
}

/// Month-filtered variant of [`occurrences_in_year`], for calendar grids.
#[must_use]
pub fn occurrences_in_month(
    stream: WasteStream,
    schedule: &LocationSchedule,
    year: i32,
    month: u32,
) -> Vec<ResolvedOccurrence> {
    occurrences_in_year(stream, schedule, year)
        .into_iter()
        .filter(|entry| entry.date.month() == month)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::{ExplicitDates, Postcode, RecurrenceRule};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn schedule_with(stream: WasteStream, config: StreamConfig) -> LocationSchedule {
        LocationSchedule {
            city: String::from("Testhausen"),
            postcode: Postcode::from("00001"),
            streams: HashMap::from([(stream, config)]),
            glass_available: true,
        }
    }

    fn recurring(day_of_week: u8, weeks: Vec<u8>) -> LocationSchedule {
        schedule_with(
            WasteStream::Residual,
            StreamConfig::Recurring(RecurrenceRule::new(day_of_week, weeks, "#2F4F4F")),
        )
    }

    #[test]
    fn week_of_month_buckets_by_day_of_month() {
        let cases = [
            (1, 1),
            (7, 1),
            (8, 2),
            (14, 2),
            (15, 3),
            (21, 3),
            (22, 4),
            (28, 4),
            (29, 5),
            (31, 5),
        ];
        for (day, expected) in cases {
            assert_eq!(
                week_of_month(date(2025, 1, day)),
                expected,
                "day {day} must land in week {expected}"
            );
        }
    }

    #[test]
    fn weekday_number_maps_sunday_to_seven() {
        // 2025-01-05 is a Sunday, 2025-01-06 a Monday.
        assert_eq!(weekday_number(date(2025, 1, 5)), 7);
        assert_eq!(weekday_number(date(2025, 1, 6)), 1);
    }

    #[test]
    fn next_occurrence_finds_first_tuesday_from_preceding_monday() {
        // 2025-03-31 is a Monday; 2025-04-01 is the first Tuesday of April.
        let schedule = recurring(2, vec![1, 3]);
        let next = next_occurrence(WasteStream::Residual, &schedule, date(2025, 3, 31))
            .expect("rule resolves");
        assert_eq!(next.date, date(2025, 4, 1));
        assert_eq!(next.day_of_month, 1);
        assert_eq!(next.stream, WasteStream::Residual);
    }

    #[test]
    fn next_occurrence_is_inclusive_of_reference_date() {
        let schedule = recurring(2, vec![1, 3]);
        let reference = date(2025, 4, 1);
        let next =
            next_occurrence(WasteStream::Residual, &schedule, reference).expect("rule resolves");
        assert_eq!(next.date, reference, "a collection today is returned today");
    }

    #[test]
    fn next_occurrence_never_precedes_reference() {
        let schedule = recurring(5, vec![2, 4]);
        let mut reference = date(2025, 1, 1);
        for _ in 0..120 {
            let next = next_occurrence(WasteStream::Residual, &schedule, reference)
                .expect("rule resolves");
            assert!(next.date >= reference);
            reference = reference.succ_opt().expect("in range");
        }
    }

    #[test]
    fn next_occurrence_matches_rule_weekday_and_week() {
        let rule = RecurrenceRule::new(3, vec![1, 3], "#FFD700");
        let schedule =
            schedule_with(WasteStream::Packaging, StreamConfig::Recurring(rule.clone()));
        let mut reference = date(2025, 6, 1);
        for _ in 0..90 {
            let next = next_occurrence(WasteStream::Packaging, &schedule, reference)
                .expect("rule resolves");
            assert_eq!(weekday_number(next.date), u32::from(rule.day_of_week));
            assert!(
                rule.weeks_of_month
                    .iter()
                    .any(|&week| u32::from(week) == week_of_month(next.date)),
                "{} is not in week {:?}",
                next.date,
                rule.weeks_of_month
            );
            reference = reference.succ_opt().expect("in range");
        }
    }

    #[test]
    fn next_occurrence_is_deterministic() {
        let schedule = recurring(1, vec![2, 4]);
        let reference = date(2025, 7, 9);
        let first = next_occurrence(WasteStream::Residual, &schedule, reference);
        let second = next_occurrence(WasteStream::Residual, &schedule, reference);
        assert_eq!(first, second);
    }

    #[test]
    fn explicit_calendar_returns_earliest_future_date() {
        let schedule = schedule_with(
            WasteStream::LegacyPaper,
            StreamConfig::Explicit(ExplicitDates::new(
                [date(2025, 1, 2), date(2025, 1, 10)],
                "#4169E1",
            )),
        );
        let next = next_occurrence(WasteStream::LegacyPaper, &schedule, date(2025, 1, 5))
            .expect("a future date is listed");
        assert_eq!(next.date, date(2025, 1, 10));
    }

    #[test]
    fn exhausted_explicit_calendar_yields_none() {
        let schedule = schedule_with(
            WasteStream::LegacyPaper,
            StreamConfig::Explicit(ExplicitDates::new(
                [date(2024, 3, 1), date(2024, 9, 12)],
                "#4169E1",
            )),
        );
        assert_eq!(
            next_occurrence(WasteStream::LegacyPaper, &schedule, date(2025, 1, 5)),
            None,
            "all dates in the past must read as no upcoming collection"
        );
    }

    #[test]
    fn unconfigured_stream_yields_none() {
        let schedule = recurring(1, vec![1]);
        assert_eq!(
            next_occurrence(WasteStream::Organic, &schedule, date(2025, 1, 1)),
            None
        );
    }

    #[test]
    fn week_five_gap_exhausts_scan_horizon() {
        // Fifth Fridays of 2025 fall on Jan 31, May 30, Aug 29, Oct 31.
        // From Feb 1 the next one is 118 days out, past the 60-day horizon.
        let schedule = recurring(5, vec![5]);
        assert_eq!(
            next_occurrence(WasteStream::Residual, &schedule, date(2025, 2, 1)),
            None
        );
        // Just before a fifth Friday the same rule resolves normally.
        let next = next_occurrence(WasteStream::Residual, &schedule, date(2025, 5, 1))
            .expect("fifth Friday within horizon");
        assert_eq!(next.date, date(2025, 5, 30));
    }

    #[test]
    fn year_enumeration_is_strictly_ascending_and_in_year() {
        let schedule = recurring(4, vec![1, 3]);
        let dates = occurrences_in_year(WasteStream::Residual, &schedule, 2025);
        assert!(!dates.is_empty(), "biweekly rule has occurrences");
        for pair in dates.windows(2) {
            assert!(pair[0].date < pair[1].date, "dates must strictly ascend");
        }
        for entry in &dates {
            assert_eq!(entry.date.year(), 2025);
            assert_eq!(entry.day_of_month, entry.date.day());
        }
    }

    #[test]
    fn weekly_rule_yields_exactly_48_dates_per_year() {
        // Weeks 1..=4 cover days 1..=28, which hold exactly four of every
        // weekday in every month: 12 * 4 occurrences.
        for year in [2024, 2025, 2026] {
            let schedule = recurring(3, vec![1, 2, 3, 4]);
            let dates = occurrences_in_year(WasteStream::Residual, &schedule, year);
            assert_eq!(dates.len(), 48, "year {year}");
        }
    }

    #[test]
    fn year_enumeration_filters_explicit_calendar_by_year() {
        let schedule = schedule_with(
            WasteStream::LegacyPaper,
            StreamConfig::Explicit(ExplicitDates::new(
                [
                    date(2024, 12, 30),
                    date(2025, 2, 14),
                    date(2025, 8, 1),
                    date(2026, 1, 2),
                ],
                "#4169E1",
            )),
        );
        let dates = occurrences_in_year(WasteStream::LegacyPaper, &schedule, 2025);
        let days: Vec<NaiveDate> = dates.iter().map(|entry| entry.date).collect();
        assert_eq!(days, vec![date(2025, 2, 14), date(2025, 8, 1)]);
    }

    #[test]
    fn year_enumeration_of_unconfigured_stream_is_empty() {
        let schedule = recurring(1, vec![1]);
        assert!(occurrences_in_year(WasteStream::Packaging, &schedule, 2025).is_empty());
    }

    #[test]
    fn month_enumeration_filters_to_requested_month() {
        let schedule = recurring(2, vec![1, 3]);
        let dates = occurrences_in_month(WasteStream::Residual, &schedule, 2025, 4);
        // First and third Tuesdays of April 2025.
        let days: Vec<NaiveDate> = dates.iter().map(|entry| entry.date).collect();
        assert_eq!(days, vec![date(2025, 4, 1), date(2025, 4, 15)]);
    }
}
