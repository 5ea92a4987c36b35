//! Domain data structures for waste streams, collection rules, and location schedules.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Waste streams with their own collection calendar.
///
/// Glass (Altglas) is deliberately absent: drop-off containers are always
/// available, so glass is the `glass_available` flag on [`LocationSchedule`]
/// rather than a dated stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteStream {
    /// Residual/general waste (Restmüll, gray bin).
    Residual,
    /// Organic waste (Biomüll).
    Organic,
    /// Paper bin (Papiertonne).
    PaperBin,
    /// Bundled curbside paper pickup (Altpapier).
    LegacyPaper,
    /// Light packaging (Gelber Sack).
    Packaging,
}

impl WasteStream {
    /// All dated streams, in display order.
    pub const ALL: [WasteStream; 5] = [
        WasteStream::Residual,
        WasteStream::Organic,
        WasteStream::PaperBin,
        WasteStream::LegacyPaper,
        WasteStream::Packaging,
    ];
}

impl fmt::Display for WasteStream {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            WasteStream::Residual => "residual",
            WasteStream::Organic => "organic",
            WasteStream::PaperBin => "paper-bin",
            WasteStream::LegacyPaper => "legacy-paper",
            WasteStream::Packaging => "packaging",
        };
        write!(formatter, "{slug}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Postcode identifying a location schedule.
pub struct Postcode(pub String);

impl fmt::Display for Postcode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<&str> for Postcode {
    fn from(raw: &str) -> Self {
        Postcode(raw.to_owned())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
/// Errors raised while validating or assembling schedule data.
///
/// All of these are load-time failures; the resolver itself never errors.
pub enum ScheduleError {
    /// `day_of_week` outside 1 (Monday) ..= 7 (Sunday).
    #[error("invalid day of week {value} for {stream} in {postcode}")]
    InvalidDayOfWeek {
        /// Offending stream.
        stream: WasteStream,
        /// Postcode of the schedule being validated.
        postcode: Postcode,
        /// Rejected value.
        value: u8,
    },
    /// A week-of-month entry outside 1..=5.
    #[error("invalid week of month {value} for {stream} in {postcode}")]
    InvalidWeekOfMonth {
        /// Offending stream.
        stream: WasteStream,
        /// Postcode of the schedule being validated.
        postcode: Postcode,
        /// Rejected value.
        value: u8,
    },
    /// A recurrence rule with an empty week set would never match.
    #[error("empty week set for {stream} in {postcode}")]
    EmptyWeeks {
        /// Offending stream.
        stream: WasteStream,
        /// Postcode of the schedule being validated.
        postcode: Postcode,
    },
    /// Two schedules share one postcode.
    #[error("duplicate schedule for postcode {0}")]
    DuplicatePostcode(Postcode),
    /// The registry's designated default postcode has no schedule.
    #[error("default postcode {0} has no schedule")]
    MissingDefault(Postcode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Periodic collection pattern: a weekday plus the weeks of the month it applies to.
pub struct RecurrenceRule {
    /// Day of week, 1 = Monday ..= 7 = Sunday.
    pub day_of_week: u8,
    /// Weeks of the month (1..=5) the rule fires in, where the week of a date
    /// is `ceil(day_of_month / 7)` — not ISO week numbering.
    pub weeks_of_month: Vec<u8>,
    /// Presentation color, carried through untouched.
    pub color: String,
}

impl RecurrenceRule {
    /// Construct a rule.
    #[must_use]
    pub fn new<C: Into<String>>(day_of_week: u8, weeks_of_month: Vec<u8>, color: C) -> Self {
        Self {
            day_of_week,
            weeks_of_month,
            color: color.into(),
        }
    }

    fn validate(&self, stream: WasteStream, postcode: &Postcode) -> Result<(), ScheduleError> {
        if !(1..=7).contains(&self.day_of_week) {
            return Err(ScheduleError::InvalidDayOfWeek {
                stream,
                postcode: postcode.clone(),
                value: self.day_of_week,
            });
        }
        if self.weeks_of_month.is_empty() {
            return Err(ScheduleError::EmptyWeeks {
                stream,
                postcode: postcode.clone(),
            });
        }
        for &week in &self.weeks_of_month {
            if !(1..=5).contains(&week) {
                return Err(ScheduleError::InvalidWeekOfMonth {
                    stream,
                    postcode: postcode.clone(),
                    value: week,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Exact published calendar for a stream, used where no periodic formula applies.
pub struct ExplicitDates {
    /// Collection dates; set semantics, iterated in ascending order.
    pub dates: BTreeSet<NaiveDate>,
    /// Presentation color, carried through untouched.
    pub color: String,
}

impl ExplicitDates {
    /// Construct an explicit calendar from any collection of dates.
    #[must_use]
    pub fn new<I, C>(dates: I, color: C) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
        C: Into<String>,
    {
        Self {
            dates: dates.into_iter().collect(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Configuration of one stream within a location schedule.
///
/// A stream holds either a periodic rule or an explicit calendar, never both;
/// the variant makes the precedence question from loosely-typed schedule
/// sources unrepresentable.
pub enum StreamConfig {
    /// Periodic weekday/week-of-month pattern.
    Recurring(RecurrenceRule),
    /// Exact published dates.
    Explicit(ExplicitDates),
    /// No collection configured for this stream.
    Unconfigured,
}

impl StreamConfig {
    /// Presentation color of the underlying rule, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        match self {
            StreamConfig::Recurring(rule) => Some(rule.color.as_str()),
            StreamConfig::Explicit(dates) => Some(dates.color.as_str()),
            StreamConfig::Unconfigured => None,
        }
    }
}

static UNCONFIGURED: StreamConfig = StreamConfig::Unconfigured;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Collection schedule for one postcode. Immutable reference data.
pub struct LocationSchedule {
    /// Human-friendly municipality (and district) name.
    pub city: String,
    /// Postcode keying this schedule.
    pub postcode: Postcode,
    /// Per-stream configuration; absent streams read as unconfigured.
    pub streams: HashMap<WasteStream, StreamConfig>,
    /// Whether glass drop-off containers are available.
    pub glass_available: bool,
}

impl LocationSchedule {
    /// Configuration for the given stream, `Unconfigured` when absent.
    #[must_use]
    pub fn config_for(&self, stream: WasteStream) -> &StreamConfig {
        self.streams.get(&stream).unwrap_or(&UNCONFIGURED)
    }

    /// Validate every configured rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScheduleError`] found. Intended to run once at
    /// registry construction; resolver calls assume validated data.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        for (&stream, config) in &self.streams {
            if let StreamConfig::Recurring(rule) = config {
                rule.validate(stream, &self.postcode)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One concrete collection date for a stream. Recomputed per query, never stored.
pub struct ResolvedOccurrence {
    /// Date of the collection.
    pub date: NaiveDate,
    /// Day of month, kept for calendar-grid rendering.
    pub day_of_month: u32,
    /// Stream being collected.
    pub stream: WasteStream,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_with(stream: WasteStream, config: StreamConfig) -> LocationSchedule {
        LocationSchedule {
            city: String::from("Testhausen"),
            postcode: Postcode::from("00001"),
            streams: HashMap::from([(stream, config)]),
            glass_available: true,
        }
    }

    #[test]
    fn missing_stream_reads_as_unconfigured() {
        let schedule = schedule_with(
            WasteStream::Residual,
            StreamConfig::Recurring(RecurrenceRule::new(1, vec![1, 3], "#2F4F4F")),
        );
        assert_eq!(
            schedule.config_for(WasteStream::Organic),
            &StreamConfig::Unconfigured,
            "unmapped streams must read as unconfigured"
        );
    }

    #[test]
    fn day_of_week_out_of_range_is_rejected() {
        let schedule = schedule_with(
            WasteStream::Residual,
            StreamConfig::Recurring(RecurrenceRule::new(8, vec![1], "#2F4F4F")),
        );
        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::InvalidDayOfWeek {
                stream: WasteStream::Residual,
                postcode: Postcode::from("00001"),
                value: 8,
            })
        );
    }

    #[test]
    fn week_of_month_out_of_range_is_rejected() {
        let schedule = schedule_with(
            WasteStream::Packaging,
            StreamConfig::Recurring(RecurrenceRule::new(3, vec![2, 6], "#FFD700")),
        );
        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::InvalidWeekOfMonth {
                stream: WasteStream::Packaging,
                postcode: Postcode::from("00001"),
                value: 6,
            })
        );
    }

    #[test]
    fn empty_week_set_is_rejected() {
        let schedule = schedule_with(
            WasteStream::Organic,
            StreamConfig::Recurring(RecurrenceRule::new(4, Vec::new(), "#8FBC8F")),
        );
        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::EmptyWeeks {
                stream: WasteStream::Organic,
                postcode: Postcode::from("00001"),
            })
        );
    }

    #[test]
    fn explicit_calendars_are_not_rule_validated() {
        let schedule = schedule_with(
            WasteStream::LegacyPaper,
            StreamConfig::Explicit(ExplicitDates::new(Vec::new(), "#4169E1")),
        );
        assert_eq!(
            schedule.validate(),
            Ok(()),
            "empty explicit calendar is legal"
        );
    }
}
