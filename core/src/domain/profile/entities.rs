use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::helpers::normalize_list;
use crate::domain::profile::value_objects::RawHairProfile;

pub const DEFAULT_CURIOSITY: &str = "detailed";

/// The two guidance framings the service knows. Anything else coerces to
/// the default rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Women,
    Men,
}

impl Mode {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("men") => Mode::Men,
            _ => Mode::Women,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Women => "women",
            Mode::Men => "men",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical hair profile, independent of client-supplied field naming.
/// Every present string is non-empty and trimmed; absent is `None`, never
/// `Some("")`. Serializes with explicit nulls so the prompt and the
/// `profile_received` echo always carry the full shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HairProfile {
    pub mode: Mode,
    pub source: Option<String>,
    pub hair_type: Option<String>,
    pub hair_length: Option<String>,
    pub porosity: Option<String>,
    pub density: Option<String>,
    pub strand_width: Option<String>,
    pub scalp: Option<String>,
    pub dryness_level: Option<String>,
    pub main_issues: Vec<String>,
    pub goals: Vec<String>,
    pub wash_frequency: Option<String>,
    pub routine_level: Option<String>,
    pub heat_usage: Option<String>,
    pub chemical_treatments: Option<String>,
    pub nighttime_care: Option<String>,
    pub curiosity: String,
    pub extra_details: Option<String>,
}

impl HairProfile {
    /// Canonicalizes a raw client profile. Pure and infallible: malformed
    /// input degrades to absence or defaults. Alias resolution favors the
    /// primary field name over the legacy one (`scalp` before
    /// `scalp_condition`).
    pub fn from_raw(raw: RawHairProfile) -> Self {
        Self {
            mode: Mode::parse(raw.mode.as_deref()),
            source: non_empty(raw.source),
            hair_type: non_empty(raw.hair_type),
            hair_length: non_empty(raw.hair_length),
            porosity: non_empty(raw.porosity),
            density: non_empty(raw.density),
            strand_width: non_empty(raw.strand_width),
            scalp: non_empty(raw.scalp).or_else(|| non_empty(raw.scalp_condition)),
            dryness_level: non_empty(raw.dryness_level),
            main_issues: raw
                .main_issues
                .map(|issues| normalize_list(&issues))
                .unwrap_or_default(),
            goals: raw.goals.map(|goals| normalize_list(&goals)).unwrap_or_default(),
            wash_frequency: non_empty(raw.wash_frequency),
            routine_level: non_empty(raw.routine_level),
            heat_usage: non_empty(raw.heat_usage),
            chemical_treatments: non_empty(raw.chemical_treatments),
            nighttime_care: non_empty(raw.nighttime_care),
            curiosity: non_empty(raw.curiosity).unwrap_or_else(|| DEFAULT_CURIOSITY.to_string()),
            extra_details: non_empty(raw.extra_details),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let v = v.trim();
        if v.is_empty() { None } else { Some(v.to_string()) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn raw(value: Value) -> RawHairProfile {
        serde_json::from_value(value).expect("raw profile")
    }

    #[test]
    fn mode_defaults_to_women() {
        assert_eq!(Mode::parse(None), Mode::Women);
        assert_eq!(Mode::parse(Some("")), Mode::Women);
        assert_eq!(Mode::parse(Some("unisex")), Mode::Women);
    }

    #[test]
    fn mode_parsing_trims_and_lowercases() {
        assert_eq!(Mode::parse(Some("  MEN ")), Mode::Men);
        assert_eq!(Mode::parse(Some("Women")), Mode::Women);
    }

    #[test]
    fn camel_case_aliases_resolve_to_the_same_fields() {
        let profile = HairProfile::from_raw(raw(json!({
            "hairType": "coily",
            "hairLength": "shoulder",
            "strandWidth": "fine",
            "dryness": "high",
            "washFrequency": "weekly",
            "routineLevel": "simple",
            "heatUsage": "rare",
            "chemicals": "none",
            "nightCare": "bonnet",
            "extraDetails": "color treated last year"
        })));

        assert_eq!(profile.hair_type.as_deref(), Some("coily"));
        assert_eq!(profile.hair_length.as_deref(), Some("shoulder"));
        assert_eq!(profile.strand_width.as_deref(), Some("fine"));
        assert_eq!(profile.dryness_level.as_deref(), Some("high"));
        assert_eq!(profile.wash_frequency.as_deref(), Some("weekly"));
        assert_eq!(profile.routine_level.as_deref(), Some("simple"));
        assert_eq!(profile.heat_usage.as_deref(), Some("rare"));
        assert_eq!(profile.chemical_treatments.as_deref(), Some("none"));
        assert_eq!(profile.nighttime_care.as_deref(), Some("bonnet"));
        assert_eq!(profile.extra_details.as_deref(), Some("color treated last year"));
    }

    #[test]
    fn legacy_scalp_field_matches_primary_field() {
        let legacy = HairProfile::from_raw(raw(json!({"scalpCondition": "dry"})));
        let primary = HairProfile::from_raw(raw(json!({"scalp": "dry"})));
        assert_eq!(legacy.scalp, primary.scalp);
    }

    #[test]
    fn primary_scalp_field_wins_over_legacy() {
        let profile = HairProfile::from_raw(raw(json!({
            "scalp": "oily",
            "scalpCondition": "dry"
        })));
        assert_eq!(profile.scalp.as_deref(), Some("oily"));
    }

    #[test]
    fn blank_primary_falls_back_to_legacy() {
        let profile = HairProfile::from_raw(raw(json!({
            "scalp": "   ",
            "scalpCondition": "dry"
        })));
        assert_eq!(profile.scalp.as_deref(), Some("dry"));
    }

    #[test]
    fn blank_strings_become_absent() {
        let profile = HairProfile::from_raw(raw(json!({
            "hair_type": "  ",
            "porosity": ""
        })));
        assert_eq!(profile.hair_type, None);
        assert_eq!(profile.porosity, None);
    }

    #[test]
    fn curiosity_defaults_to_detailed() {
        assert_eq!(HairProfile::from_raw(RawHairProfile::default()).curiosity, "detailed");
        let blank = HairProfile::from_raw(raw(json!({"curiosity": "  "})));
        assert_eq!(blank.curiosity, "detailed");
        let set = HairProfile::from_raw(raw(json!({"curiosity": "brief"})));
        assert_eq!(set.curiosity, "brief");
    }

    #[test]
    fn list_fields_accept_delimited_strings() {
        let profile = HairProfile::from_raw(raw(json!({
            "issues": "frizz, breakage",
            "goals": ["growth", "  ", "shine"]
        })));
        assert_eq!(profile.main_issues, vec!["frizz", "breakage"]);
        assert_eq!(profile.goals, vec!["growth", "shine"]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let profile = HairProfile::from_raw(raw(json!({
            "mode": "men",
            "favorite_color": "teal"
        })));
        assert_eq!(profile.mode, Mode::Men);
    }

    #[test]
    fn serialization_keeps_absent_fields_as_nulls() {
        let value = serde_json::to_value(HairProfile::from_raw(RawHairProfile::default()))
            .expect("profile json");
        assert_eq!(value["mode"], json!("women"));
        assert_eq!(value["hair_type"], Value::Null);
        assert_eq!(value["main_issues"], json!([]));
        assert_eq!(value["curiosity"], json!("detailed"));
    }
}
