//! Built-in collection schedules for the supported municipalities.
//!
//! Static reference data, loaded once at process start and never mutated.
//! Unknown postcodes fall back to the default entry (Heidenheim core).

use std::collections::HashMap;

use chrono::NaiveDate;

use wastewise_core::{
    model::{
        ExplicitDates, LocationSchedule, Postcode, RecurrenceRule, ScheduleError, StreamConfig,
        WasteStream,
    },
    registry::ScheduleRegistry,
};

/// Postcode of the default schedule used for uncovered areas.
pub const DEFAULT_POSTCODE: &str = "89522";

const RESIDUAL_COLOR: &str = "#2F4F4F";
const ORGANIC_COLOR: &str = "#8FBC8F";
const PAPER_COLOR: &str = "#4169E1";
const LEGACY_PAPER_COLOR: &str = "#6495ED";
const PACKAGING_COLOR: &str = "#FFD700";

fn recurring(day_of_week: u8, weeks: &[u8], color: &str) -> StreamConfig {
    StreamConfig::Recurring(RecurrenceRule::new(day_of_week, weeks.to_vec(), color))
}

fn location(
    postcode: &str,
    city: &str,
    residual: StreamConfig,
    organic: StreamConfig,
    paper: StreamConfig,
    packaging: StreamConfig,
) -> LocationSchedule {
    LocationSchedule {
        city: city.to_owned(),
        postcode: Postcode::from(postcode),
        streams: HashMap::from([
            (WasteStream::Residual, residual),
            (WasteStream::Organic, organic),
            (WasteStream::PaperBin, paper),
            (WasteStream::Packaging, packaging),
        ]),
        glass_available: true,
    }
}

/// Fleinheim publishes its bundled paper pickups as an exact calendar
/// instead of a weekday formula.
fn fleinheim_legacy_paper() -> StreamConfig {
    let dates = [
        (2025, 1, 11),
        (2025, 3, 8),
        (2025, 5, 10),
        (2025, 7, 12),
        (2025, 9, 13),
        (2025, 11, 8),
    ]
    .into_iter()
    .filter_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day));

    StreamConfig::Explicit(ExplicitDates::new(dates, LEGACY_PAPER_COLOR))
}

/// All built-in location schedules.
#[must_use]
pub fn schedules() -> Vec<LocationSchedule> {
    let mut all = vec![
        location(
            "89522",
            "Heidenheim an der Brenz",
            recurring(2, &[1, 3], RESIDUAL_COLOR),
            recurring(4, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(1, &[2, 4], PAPER_COLOR),
            recurring(3, &[1, 3], PACKAGING_COLOR),
        ),
        location(
            "89518",
            "Heidenheim an der Brenz (Schnaitheim)",
            recurring(3, &[2, 4], RESIDUAL_COLOR),
            recurring(5, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(2, &[1, 3], PAPER_COLOR),
            recurring(4, &[2, 4], PACKAGING_COLOR),
        ),
        location(
            "89520",
            "Heidenheim an der Brenz (Mergelstetten)",
            recurring(1, &[1, 3], RESIDUAL_COLOR),
            recurring(3, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(5, &[2, 4], PAPER_COLOR),
            recurring(2, &[1, 3], PACKAGING_COLOR),
        ),
        location(
            "89523",
            "Heidenheim an der Brenz (Oggenhausen)",
            recurring(4, &[1, 3], RESIDUAL_COLOR),
            recurring(2, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(1, &[2, 4], PAPER_COLOR),
            recurring(5, &[1, 3], PACKAGING_COLOR),
        ),
        location(
            "89551",
            "Heidenheim an der Brenz (Großkuchen)",
            recurring(5, &[2, 4], RESIDUAL_COLOR),
            recurring(1, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(3, &[1, 3], PAPER_COLOR),
            recurring(4, &[2, 4], PACKAGING_COLOR),
        ),
        location(
            "89564",
            "Nattheim",
            recurring(3, &[1, 3], RESIDUAL_COLOR),
            recurring(1, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(5, &[2, 4], PAPER_COLOR),
            recurring(2, &[1, 3], PACKAGING_COLOR),
        ),
        location(
            "89542",
            "Fleinheim",
            recurring(4, &[2, 4], RESIDUAL_COLOR),
            recurring(1, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(3, &[1, 3], PAPER_COLOR),
            recurring(5, &[2, 4], PACKAGING_COLOR),
        ),
        location(
            "70173",
            "Stuttgart",
            recurring(1, &[1, 2, 3, 4], RESIDUAL_COLOR),
            recurring(3, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(5, &[2, 4], PAPER_COLOR),
            recurring(2, &[1, 3], PACKAGING_COLOR),
        ),
        location(
            "80331",
            "München",
            recurring(4, &[1, 2, 3, 4], RESIDUAL_COLOR),
            recurring(2, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(1, &[1, 3], PAPER_COLOR),
            recurring(5, &[2, 4], PACKAGING_COLOR),
        ),
        location(
            "10115",
            "Berlin",
            recurring(3, &[1, 2, 3, 4], RESIDUAL_COLOR),
            recurring(1, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(4, &[1, 3], PAPER_COLOR),
            recurring(2, &[2, 4], PACKAGING_COLOR),
        ),
        location(
            "20095",
            "Hamburg",
            recurring(5, &[1, 2, 3, 4], RESIDUAL_COLOR),
            recurring(2, &[1, 2, 3, 4], ORGANIC_COLOR),
            recurring(3, &[2, 4], PAPER_COLOR),
            recurring(1, &[1, 3], PACKAGING_COLOR),
        ),
    ];

    for schedule in &mut all {
        if schedule.postcode.0 == "89542" {
            schedule
                .streams
                .insert(WasteStream::LegacyPaper, fleinheim_legacy_paper());
        }
    }

    all
}

/// Build the registry over the built-in schedules.
///
/// # Errors
///
/// Returns a [`ScheduleError`] if the built-in data is inconsistent; this
/// only happens when the data in this crate is edited incorrectly.
pub fn registry() -> Result<ScheduleRegistry, ScheduleError> {
    ScheduleRegistry::new(schedules(), Postcode::from(DEFAULT_POSTCODE))
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use wastewise_core::resolver::next_occurrence;

    use super::*;

    #[test]
    fn builtin_data_builds_a_registry() {
        let registry = registry().expect("built-in schedules are valid");
        assert_eq!(registry.locations().len(), 11);
        assert_eq!(registry.default_schedule().postcode, Postcode::from("89522"));
    }

    #[test]
    fn every_recurring_stream_resolves_within_35_days() {
        let references = [
            NaiveDate::from_ymd_opt(2025, 1, 1),
            NaiveDate::from_ymd_opt(2025, 6, 15),
            NaiveDate::from_ymd_opt(2025, 12, 31),
        ];
        for schedule in schedules() {
            for (&stream, config) in &schedule.streams {
                if !matches!(config, StreamConfig::Recurring(_)) {
                    continue;
                }
                for reference in references.into_iter().flatten() {
                    let next = next_occurrence(stream, &schedule, reference)
                        .unwrap_or_else(|| panic!("{stream} in {} resolves", schedule.postcode));
                    let gap = (next.date - reference).num_days();
                    assert!(
                        gap <= 35,
                        "{stream} in {} took {gap} days from {reference}",
                        schedule.postcode
                    );
                }
            }
        }
    }

    #[test]
    fn fleinheim_carries_an_explicit_paper_calendar() {
        let registry = registry().expect("built-in schedules are valid");
        let fleinheim = registry
            .get(&Postcode::from("89542"))
            .expect("Fleinheim is built in");
        match fleinheim.config_for(WasteStream::LegacyPaper) {
            StreamConfig::Explicit(calendar) => {
                assert_eq!(calendar.dates.len(), 6);
                assert!(calendar.dates.iter().all(|date| date.year() == 2025));
            }
            other => panic!("expected explicit calendar, got {other:?}"),
        }
    }

    #[test]
    fn glass_is_available_everywhere() {
        assert!(schedules().iter().all(|schedule| schedule.glass_available));
    }
}
