//! Caller-owned user settings.
//!
//! These types model the preferences the app persists for a user. The core
//! never stores them; the presentation layer owns the values and passes them
//! in, so there is no global mutable state.

use serde::{Deserialize, Serialize};

use crate::model::WasteStream;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Per-stream reminder toggles, plus glass.
pub struct NotificationPreferences {
    /// Restmüll reminders.
    pub residual: bool,
    /// Biomüll reminders.
    pub organic: bool,
    /// Papiertonne reminders.
    pub paper_bin: bool,
    /// Altpapier reminders.
    pub legacy_paper: bool,
    /// Gelber Sack reminders.
    pub packaging: bool,
    /// Altglas reminders.
    pub glass: bool,
}

impl NotificationPreferences {
    /// Whether reminders are enabled for a dated stream.
    #[must_use]
    pub fn is_enabled(&self, stream: WasteStream) -> bool {
        match stream {
            WasteStream::Residual => self.residual,
            WasteStream::Organic => self.organic,
            WasteStream::PaperBin => self.paper_bin,
            WasteStream::LegacyPaper => self.legacy_paper,
            WasteStream::Packaging => self.packaging,
        }
    }

    /// Flip the toggle for a dated stream.
    pub fn toggle(&mut self, stream: WasteStream) {
        match stream {
            WasteStream::Residual => self.residual = !self.residual,
            WasteStream::Organic => self.organic = !self.organic,
            WasteStream::PaperBin => self.paper_bin = !self.paper_bin,
            WasteStream::LegacyPaper => self.legacy_paper = !self.legacy_paper,
            WasteStream::Packaging => self.packaging = !self.packaging,
        }
    }
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            residual: true,
            organic: true,
            paper_bin: false,
            legacy_paper: false,
            packaging: true,
            glass: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Address the user entered; resolved to a postcode by the caller.
pub struct UserAddress {
    /// Street name.
    pub street: String,
    /// House number including additions such as “A”.
    pub house_number: String,
    /// Postcode used for the registry lookup.
    pub postcode: String,
    /// City name.
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Full persisted settings bundle.
pub struct Settings {
    /// UI language tag, e.g. "de".
    pub language: String,
    /// Reminder time as "HH:MM".
    pub notification_time: String,
    /// Per-stream reminder toggles.
    pub notifications: NotificationPreferences,
    /// Saved address.
    pub address: UserAddress,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: String::from("de"),
            notification_time: String::from("18:00"),
            notifications: NotificationPreferences::default(),
            address: UserAddress::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_preferences() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.is_enabled(WasteStream::Residual));
        assert!(prefs.is_enabled(WasteStream::Organic));
        assert!(!prefs.is_enabled(WasteStream::PaperBin));
        assert!(prefs.is_enabled(WasteStream::Packaging));
        assert!(!prefs.glass);
    }

    #[test]
    fn toggle_flips_one_stream_only() {
        let mut prefs = NotificationPreferences::default();
        prefs.toggle(WasteStream::PaperBin);
        assert!(prefs.is_enabled(WasteStream::PaperBin));
        assert!(prefs.is_enabled(WasteStream::Residual), "others untouched");
        prefs.toggle(WasteStream::PaperBin);
        assert!(!prefs.is_enabled(WasteStream::PaperBin));
    }
}
