//! Recycling facility listings and maps links.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Kind of drop-off facility.
pub enum FacilityKind {
    /// Staffed recycling center (Wertstoffhof).
    RecyclingCenter,
    /// Unstaffed glass container site.
    GlassContainer,
    /// Used-clothing container.
    Clothing,
    /// Hazardous waste collection point (Schadstoffmobil).
    Hazardous,
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FacilityKind::RecyclingCenter => "Recycling-Zentrum",
            FacilityKind::GlassContainer => "Glascontainer",
            FacilityKind::Clothing => "Altkleider",
            FacilityKind::Hazardous => "Sondermüll",
        };
        write!(formatter, "{label}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One nearby drop-off facility.
pub struct RecyclingFacility {
    /// Display name.
    pub name: String,
    /// Facility kind, used for filtering.
    pub kind: FacilityKind,
    /// Street address including postcode and city.
    pub address: String,
    /// Opening hours as published.
    pub hours: String,
    /// Contact phone number, where one exists.
    pub phone: Option<String>,
    /// Waste kinds accepted at this facility.
    pub accepted: Vec<String>,
}

fn facility(
    name: &str,
    kind: FacilityKind,
    address: &str,
    hours: &str,
    phone: Option<&str>,
    accepted: &[&str],
) -> RecyclingFacility {
    RecyclingFacility {
        name: name.to_owned(),
        kind,
        address: address.to_owned(),
        hours: hours.to_owned(),
        phone: phone.map(str::to_owned),
        accepted: accepted.iter().map(|&item| item.to_owned()).collect(),
    }
}

/// The built-in facility listings around the default location.
#[must_use]
pub fn facilities() -> Vec<RecyclingFacility> {
    vec![
        facility(
            "Wertstoffhof Heidenheim",
            FacilityKind::RecyclingCenter,
            "Industriestraße 15, 89522 Heidenheim an der Brenz",
            "Mo-Fr: 8:00-18:00, Sa: 8:00-14:00",
            Some("+49 7321 327-0"),
            &["Elektrogeräte", "Möbel", "Gartenabfälle", "Metall"],
        ),
        facility(
            "Glascontainer Schnaitheim",
            FacilityKind::GlassContainer,
            "Hauptstraße 45, 89520 Heidenheim an der Brenz",
            "24/7",
            None,
            &["Weißglas", "Braunglas", "Grünglas"],
        ),
        facility(
            "Altkleidercontainer Mergelstetten",
            FacilityKind::Clothing,
            "Zöschinger Straße 12, 89522 Heidenheim an der Brenz",
            "24/7",
            None,
            &["Saubere Kleidung", "Schuhe", "Taschen", "Textilien"],
        ),
        facility(
            "Schadstoffmobil Sammelstelle",
            FacilityKind::Hazardous,
            "Rathaus Heidenheim, Grabenstraße 15, 89522 Heidenheim an der Brenz",
            "Nächster Termin: Fr, 31 Jan 9:00-12:00",
            None,
            &["Batterien", "Farben", "Chemikalien", "Leuchtmittel"],
        ),
        facility(
            "Wertstoffhof Oggenhausen",
            FacilityKind::RecyclingCenter,
            "Oggenhausen 25, 89522 Heidenheim an der Brenz",
            "Mo-Sa: 7:00-19:00",
            Some("+49 7321 327-100"),
            &["Großgeräte", "Matratzen", "Reifen", "Bauschutt"],
        ),
    ]
}

/// Facilities of one kind, or all of them when `kind` is `None`.
#[must_use]
pub fn facilities_of_kind(kind: Option<FacilityKind>) -> Vec<RecyclingFacility> {
    facilities()
        .into_iter()
        .filter(|entry| kind.is_none_or(|wanted| entry.kind == wanted))
        .collect()
}

/// Google Maps search URL for an address, for opening in a browser.
///
/// Spaces become `+`; commas are dropped. Addresses here are plain German
/// street addresses, so no full percent-encoding is needed.
#[must_use]
pub fn maps_search_url(address: &str) -> String {
    let query = address.replace(',', "").replace(' ', "+");
    format!("https://www.google.com/maps/search/{query}")
}
