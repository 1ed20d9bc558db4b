use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The alias-tolerant inbound profile shape. Clients send mixed key styles,
/// so every snake_case field also accepts its camelCase spelling, and the
/// scalp field additionally arrives under a legacy `scalp_condition` name.
/// List-valued fields accept either an actual array or a delimited string.
/// Unknown extra fields are ignored, never rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RawHairProfile {
    pub mode: Option<String>,
    pub source: Option<String>,

    #[serde(alias = "hairType")]
    pub hair_type: Option<String>,
    #[serde(alias = "hairLength")]
    pub hair_length: Option<String>,

    pub porosity: Option<String>,
    pub density: Option<String>,

    #[serde(alias = "strandWidth")]
    pub strand_width: Option<String>,
    pub scalp: Option<String>,
    #[serde(alias = "scalpCondition")]
    pub scalp_condition: Option<String>,
    #[serde(alias = "dryness")]
    pub dryness_level: Option<String>,

    #[serde(alias = "issues")]
    pub main_issues: Option<serde_json::Value>,
    pub goals: Option<serde_json::Value>,

    #[serde(alias = "washFrequency")]
    pub wash_frequency: Option<String>,
    #[serde(alias = "routineLevel")]
    pub routine_level: Option<String>,
    #[serde(alias = "heatUsage")]
    pub heat_usage: Option<String>,
    #[serde(alias = "chemicals")]
    pub chemical_treatments: Option<String>,
    #[serde(alias = "nightCare")]
    pub nighttime_care: Option<String>,

    pub curiosity: Option<String>,
    #[serde(alias = "extraDetails")]
    pub extra_details: Option<String>,
}
