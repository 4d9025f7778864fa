//! Tournament category classification.
//!
//! Live feeds describe tournaments with free text spread over several
//! name/slug fields. Classification concatenates those fields and searches
//! for tour markers in a fixed priority order. Markers co-occur (a slug can
//! mention both "atp" and "challenger"), so the order is significant.

use std::fmt;

use serde::Deserialize;

/// Closed set of tournament categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum TourCategory {
    #[serde(rename = "ATP")]
    Atp,
    #[serde(rename = "WTA")]
    Wta,
    Challenger,
    #[serde(rename = "UTR")]
    Utr,
    #[serde(rename = "ITF")]
    Itf,
    Unknown,
}

/// Markers checked in priority order; the first hit wins.
const MARKERS: &[(&str, TourCategory)] = &[
    ("challenger", TourCategory::Challenger),
    ("atp", TourCategory::Atp),
    ("wta", TourCategory::Wta),
    ("utr", TourCategory::Utr),
    ("itf", TourCategory::Itf),
    ("futures", TourCategory::Itf),
];

impl TourCategory {
    /// Classify free-text tournament metadata.
    ///
    /// Each field is lower-cased and joined before the marker search, so a
    /// marker split across two fields never matches.
    #[must_use]
    pub fn classify<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        let haystack = fields
            .into_iter()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");

        MARKERS
            .iter()
            .find(|(marker, _)| haystack.contains(marker))
            .map_or(Self::Unknown, |(_, category)| *category)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Atp => "ATP",
            Self::Wta => "WTA",
            Self::Challenger => "Challenger",
            Self::Utr => "UTR",
            Self::Itf => "ITF",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TourCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow-list of tournament categories worth monitoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentFilter {
    allowed: Vec<TourCategory>,
}

impl TournamentFilter {
    #[must_use]
    pub fn new(allowed: Vec<TourCategory>) -> Self {
        Self { allowed }
    }

    /// Whether matches of this category are processed.
    #[must_use]
    pub fn is_allowed(&self, category: TourCategory) -> bool {
        self.allowed.contains(&category)
    }
}

impl Default for TournamentFilter {
    /// Everything except ITF.
    fn default() -> Self {
        Self::new(default_allowed_tournaments())
    }
}

/// Default allow-list (ITF excluded).
#[must_use]
pub fn default_allowed_tournaments() -> Vec<TourCategory> {
    vec![
        TourCategory::Atp,
        TourCategory::Wta,
        TourCategory::Challenger,
        TourCategory::Utr,
        TourCategory::Unknown,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenger_beats_atp() {
        let category = TourCategory::classify(["Bergamo", "atp-challenger-bergamo-italy"]);
        assert_eq!(category, TourCategory::Challenger);
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(TourCategory::classify(["WTA Madrid"]), TourCategory::Wta);
        assert_eq!(TourCategory::classify(["ATP Vienna"]), TourCategory::Atp);
    }

    #[test]
    fn futures_maps_to_itf() {
        assert_eq!(TourCategory::classify(["M15 Futures"]), TourCategory::Itf);
        assert_eq!(TourCategory::classify(["itf-men"]), TourCategory::Itf);
    }

    #[test]
    fn utr_detected() {
        assert_eq!(TourCategory::classify(["UTR Pro Tennis Series"]), TourCategory::Utr);
    }

    #[test]
    fn unmatched_text_is_unknown() {
        assert_eq!(TourCategory::classify(["Exhibition"]), TourCategory::Unknown);
        assert_eq!(TourCategory::classify(Vec::<&str>::new()), TourCategory::Unknown);
    }

    #[test]
    fn atp_beats_wta_when_both_present() {
        assert_eq!(TourCategory::classify(["united cup", "atp wta mixed"]), TourCategory::Atp);
    }

    #[test]
    fn default_filter_excludes_itf() {
        let filter = TournamentFilter::default();
        assert!(filter.is_allowed(TourCategory::Atp));
        assert!(filter.is_allowed(TourCategory::Unknown));
        assert!(!filter.is_allowed(TourCategory::Itf));
    }

    #[test]
    fn category_deserializes_from_display_names() {
        #[derive(Deserialize)]
        struct Holder {
            list: Vec<TourCategory>,
        }
        let holder: Holder =
            toml::from_str(r#"list = ["ATP", "Challenger", "ITF", "Unknown"]"#).unwrap();
        assert_eq!(
            holder.list,
            vec![
                TourCategory::Atp,
                TourCategory::Challenger,
                TourCategory::Itf,
                TourCategory::Unknown
            ]
        );
    }
}
