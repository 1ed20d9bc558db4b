use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated care plan. All four lists contain only non-empty trimmed
/// strings; `summary` is empty when the source had none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarePlan {
    pub summary: String,
    pub routine: Vec<String>,
    pub products: Vec<String>,
    pub ingredients: Vec<String>,
    pub avoid: Vec<String>,
}
