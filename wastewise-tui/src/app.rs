use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use wastewise_core::{
    facility::FacilityKind,
    guide::{WasteCategory, search_categories},
    model::Postcode,
    service::ScheduleService,
    settings::NotificationPreferences,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    LocationSelect,
    Upcoming,
    Calendar,
    Guide,
    Facilities,
}

pub(crate) struct App {
    pub service: Arc<ScheduleService>,

    pub screen: Screen,
    pub locations: Vec<(Postcode, String)>,
    pub location_list_index: usize,
    pub selected_postcode: Option<Postcode>,

    pub today: NaiveDate,
    pub prefs: NotificationPreferences,

    pub calendar_year: i32,
    pub calendar_month: u32,

    pub guide_query: String,
    pub guide_list_index: usize,

    pub facility_filter: Option<FacilityKind>,
    pub facility_list_index: usize,
}

impl App {
    pub(crate) fn new(service: Arc<ScheduleService>) -> Self {
        let locations = service.locations();
        let today = Local::now().date_naive();
        Self {
            service,
            screen: Screen::LocationSelect,
            locations,
            location_list_index: 0,
            selected_postcode: None,
            today,
            prefs: NotificationPreferences::default(),
            calendar_year: today.year(),
            calendar_month: today.month(),
            guide_query: String::new(),
            guide_list_index: 0,
            facility_filter: None,
            facility_list_index: 0,
        }
    }

    pub(crate) fn select_current_location(&mut self) {
        if let Some((postcode, _city)) = self.locations.get(self.location_list_index) {
            self.selected_postcode = Some(postcode.clone());
            self.screen = Screen::Upcoming;
        }
    }

    /// Postcode used for service queries; the registry's default location
    /// applies until the user picks one.
    pub(crate) fn postcode(&self) -> Postcode {
        self.selected_postcode
            .clone()
            .unwrap_or_else(|| self.service.default_postcode())
    }

    pub(crate) fn guide_entries(&self) -> Vec<WasteCategory> {
        search_categories(&self.guide_query)
    }

    pub(crate) fn next_month(&mut self) {
        if self.calendar_month == 12 {
            self.calendar_month = 1;
            self.calendar_year += 1;
        } else {
            self.calendar_month += 1;
        }
    }

    pub(crate) fn prev_month(&mut self) {
        if self.calendar_month == 1 {
            self.calendar_month = 12;
            self.calendar_year -= 1;
        } else {
            self.calendar_month -= 1;
        }
    }

    pub(crate) fn cycle_facility_filter(&mut self) {
        self.facility_filter = match self.facility_filter {
            None => Some(FacilityKind::RecyclingCenter),
            Some(FacilityKind::RecyclingCenter) => Some(FacilityKind::GlassContainer),
            Some(FacilityKind::GlassContainer) => Some(FacilityKind::Clothing),
            Some(FacilityKind::Clothing) => Some(FacilityKind::Hazardous),
            Some(FacilityKind::Hazardous) => None,
        };
        self.facility_list_index = 0;
    }
}
