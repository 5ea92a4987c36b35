//! Waste-sorting reference guide: what goes in which bin.

use serde::{Deserialize, Serialize};

use crate::model::WasteStream;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One entry of the sorting guide.
pub struct WasteCategory {
    /// Stream this category maps to; `None` for drop-off-only categories
    /// (glass, hazardous waste).
    pub stream: Option<WasteStream>,
    /// Localized display name.
    pub name: String,
    /// Presentation color.
    pub color: String,
    /// Short description of the category.
    pub description: String,
    /// Items that belong in this category.
    pub belongs: Vec<String>,
    /// Items that must not go in.
    pub forbidden: Vec<String>,
    /// Disposal tip.
    pub tip: String,
}

fn category(
    stream: Option<WasteStream>,
    name: &str,
    color: &str,
    description: &str,
    belongs: &[&str],
    forbidden: &[&str],
    tip: &str,
) -> WasteCategory {
    WasteCategory {
        stream,
        name: name.to_owned(),
        color: color.to_owned(),
        description: description.to_owned(),
        belongs: belongs.iter().map(|&item| item.to_owned()).collect(),
        forbidden: forbidden.iter().map(|&item| item.to_owned()).collect(),
        tip: tip.to_owned(),
    }
}

/// The built-in sorting guide entries.
#[must_use]
pub fn categories() -> Vec<WasteCategory> {
    vec![
        category(
            Some(WasteStream::Residual),
            "Restmüll",
            "#666666",
            "Nicht recycelbare Abfälle",
            &[
                "Windeln",
                "Zigarettenstummel",
                "Katzenstreu",
                "Staubsaugerbeutel",
            ],
            &["Batterien", "Elektronik", "Glas", "Papier"],
            "Restmüll gehört in die graue Tonne.",
        ),
        category(
            Some(WasteStream::Organic),
            "Biomüll",
            "#4CAF50",
            "Organische Abfälle",
            &[
                "Obst- und Gemüsereste",
                "Kaffeesatz",
                "Eierschalen",
                "Gartenabfälle",
                "Teebeutel",
            ],
            &["Fleisch", "Fisch", "Milchprodukte", "Katzenstreu"],
            "Biomüll wird zu Kompost verarbeitet.",
        ),
        category(
            Some(WasteStream::PaperBin),
            "Papier",
            "#2196F3",
            "Papier und Karton",
            &["Zeitungen", "Kartons", "Bücher", "Briefumschläge", "Pappe"],
            &["Beschichtetes Papier", "Fotos", "Tapeten"],
            "Papier sollte sauber und trocken sein.",
        ),
        category(
            Some(WasteStream::LegacyPaper),
            "Altpapier",
            "#4169E1",
            "Gebündelte Straßensammlung",
            &["Zeitungsbündel", "Zusammengelegte Kartons"],
            &["Verschmutztes Papier", "Getränkekartons"],
            "Gebündelt am Straßenrand bereitstellen.",
        ),
        category(
            Some(WasteStream::Packaging),
            "Gelber Sack",
            "#FFC107",
            "Verpackungen",
            &[
                "Plastikverpackungen",
                "Konservendosen",
                "Getränkekartons",
                "Alufolie",
            ],
            &["Spielzeug", "Elektrogeräte", "CDs"],
            "Verpackungen müssen löffelrein sein.",
        ),
        category(
            None,
            "Altglas",
            "#009688",
            "Glasverpackungen",
            &[
                "Glasflaschen",
                "Konservengläser",
                "Marmeladengläser",
                "Parfümflaschen",
            ],
            &["Fensterglas", "Spiegel", "Glühbirnen", "Keramik"],
            "Nach Farben sortieren: Weiß, Braun, Grün.",
        ),
        category(
            None,
            "Sondermüll",
            "#F44336",
            "Gefährliche Abfälle",
            &[
                "Batterien",
                "Farben",
                "Chemikalien",
                "Medikamente",
                "Energiesparlampen",
            ],
            &["Restmüll", "Gelber Sack", "Biomüll"],
            "Zum Wertstoffhof oder Schadstoffmobil bringen.",
        ),
    ]
}

/// Case-insensitive search over category names and descriptions.
#[must_use]
pub fn search_categories(query: &str) -> Vec<WasteCategory> {
    let needle = query.trim().to_lowercase();
    categories()
        .into_iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.name.to_lowercase().contains(&needle)
                || entry.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dated_stream_has_a_guide_entry() {
        let all = categories();
        for stream in WasteStream::ALL {
            assert!(
                all.iter().any(|entry| entry.stream == Some(stream)),
                "missing guide entry for {stream}"
            );
        }
    }

    #[test]
    fn search_matches_name_and_description_case_insensitively() {
        let hits = search_categories("BIO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|entry| entry.name.as_str()), Some("Biomüll"));

        let by_description = search_categories("organische");
        assert_eq!(
            by_description.first().map(|entry| entry.name.as_str()),
            Some("Biomüll")
        );
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(search_categories("  ").len(), categories().len());
    }
}
