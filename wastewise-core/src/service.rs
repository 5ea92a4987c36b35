//! High-level service facade over the registry and resolver.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::model::{LocationSchedule, Postcode, ResolvedOccurrence, WasteStream};
use crate::registry::ScheduleRegistry;
use crate::resolver::{next_occurrence, occurrences_in_month, occurrences_in_year};

/// Public entry point for querying collection dates per location.
pub struct ScheduleService {
    registry: Arc<ScheduleRegistry>,
}

impl ScheduleService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<ScheduleRegistry>) -> Self {
        Self { registry }
    }

    /// Postcode and city name of every covered location.
    #[must_use]
    pub fn locations(&self) -> Vec<(Postcode, String)> {
        self.registry.locations()
    }

    /// Schedule for the postcode, falling back to the default location.
    #[must_use]
    pub fn schedule_for(&self, postcode: &Postcode) -> &LocationSchedule {
        self.registry.lookup(postcode)
    }

    /// Postcode of the default location, for callers that have no
    /// selection yet.
    #[must_use]
    pub fn default_postcode(&self) -> Postcode {
        self.registry.default_postcode().clone()
    }

    /// Whether glass drop-off containers are available at the location.
    #[must_use]
    pub fn glass_available(&self, postcode: &Postcode) -> bool {
        self.registry.lookup(postcode).glass_available
    }

    /// Next collection per stream on or after `today`, sorted by date.
    ///
    /// Streams without an upcoming collection (unconfigured, or an explicit
    /// calendar that is exhausted) are simply absent from the list.
    #[must_use]
    pub fn upcoming(&self, postcode: &Postcode, today: NaiveDate) -> Vec<ResolvedOccurrence> {
        let schedule = self.registry.lookup(postcode);
        let mut collections: Vec<ResolvedOccurrence> = WasteStream::ALL
            .iter()
            .filter_map(|&stream| next_occurrence(stream, schedule, today))
            .collect();
        collections.sort_by_key(|entry| (entry.date, stream_order(entry.stream)));
        collections
    }

    /// Every collection of one stream within a calendar year, ascending.
    #[must_use]
    pub fn year_calendar(
        &self,
        postcode: &Postcode,
        stream: WasteStream,
        year: i32,
    ) -> Vec<ResolvedOccurrence> {
        occurrences_in_year(stream, self.registry.lookup(postcode), year)
    }

    /// All collections of all streams within one month, sorted by date.
    #[must_use]
    pub fn month_calendar(
        &self,
        postcode: &Postcode,
        year: i32,
        month: u32,
    ) -> Vec<ResolvedOccurrence> {
        let schedule = self.registry.lookup(postcode);
        let mut collections: Vec<ResolvedOccurrence> = WasteStream::ALL
            .iter()
            .flat_map(|&stream| occurrences_in_month(stream, schedule, year, month))
            .collect();
        collections.sort_by_key(|entry| (entry.date, stream_order(entry.stream)));
        collections
    }
}

fn stream_order(stream: WasteStream) -> usize {
    WasteStream::ALL
        .iter()
        .position(|&candidate| candidate == stream)
        .unwrap_or(WasteStream::ALL.len())
}
