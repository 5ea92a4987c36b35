//! Registry mapping postcodes to location schedules.

use std::collections::HashMap;

use crate::model::{LocationSchedule, Postcode, ScheduleError};

/// Read-only lookup from postcode to [`LocationSchedule`], with a designated
/// default entry for postcodes outside the covered area.
pub struct ScheduleRegistry {
    schedules: HashMap<Postcode, LocationSchedule>,
    default_postcode: Postcode,
}

impl ScheduleRegistry {
    /// Build a registry from the provided schedules.
    ///
    /// Every schedule is validated here, so resolver calls downstream never
    /// see malformed rules.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] for an invalid rule, a duplicate postcode,
    /// or a `default_postcode` with no matching schedule.
    pub fn new(
        schedules: Vec<LocationSchedule>,
        default_postcode: Postcode,
    ) -> Result<Self, ScheduleError> {
        let mut schedules_map = HashMap::with_capacity(schedules.len());
        for schedule in schedules {
            schedule.validate()?;
            let postcode = schedule.postcode.clone();
            if schedules_map.insert(postcode.clone(), schedule).is_some() {
                return Err(ScheduleError::DuplicatePostcode(postcode));
            }
        }
        if !schedules_map.contains_key(&default_postcode) {
            return Err(ScheduleError::MissingDefault(default_postcode));
        }
        Ok(Self {
            schedules: schedules_map,
            default_postcode,
        })
    }

    /// Schedule for the given postcode, or the default entry when unknown.
    #[must_use]
    pub fn lookup(&self, postcode: &Postcode) -> &LocationSchedule {
        self.schedules
            .get(postcode)
            .unwrap_or_else(|| self.default_schedule())
    }

    /// Schedule for the given postcode, without the default fallback.
    #[must_use]
    pub fn get(&self, postcode: &Postcode) -> Option<&LocationSchedule> {
        self.schedules.get(postcode)
    }

    /// Postcode of the designated default schedule.
    #[must_use]
    pub fn default_postcode(&self) -> &Postcode {
        &self.default_postcode
    }

    /// The designated default schedule.
    #[must_use]
    pub fn default_schedule(&self) -> &LocationSchedule {
        self.schedules
            .get(&self.default_postcode)
            .expect("default postcode is checked at construction")
    }

    /// Postcode and city name of every covered location.
    #[must_use]
    pub fn locations(&self) -> Vec<(Postcode, String)> {
        let mut locations: Vec<(Postcode, String)> = self
            .schedules
            .values()
            .map(|schedule| (schedule.postcode.clone(), schedule.city.clone()))
            .collect();
        locations.sort_by(|left, right| left.0.0.cmp(&right.0.0));
        locations
    }

    /// Iterator over the registered schedules.
    pub fn schedules_iter(&self) -> impl Iterator<Item = &LocationSchedule> {
        self.schedules.values()
    }
}
