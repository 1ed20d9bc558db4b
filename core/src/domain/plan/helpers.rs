use serde_json::Value;

use crate::domain::common::helpers::normalize_list;
use crate::domain::plan::entities::CarePlan;

/// Forces an arbitrary parsed object (possibly the empty-object fallback of
/// the response extractor) into the fixed plan shape. `summary` is taken
/// as-is only when it is already a string; the four lists go through the
/// shared list normalizer.
pub fn normalize_plan(value: &Value) -> CarePlan {
    CarePlan {
        summary: value
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        routine: normalize_list(value.get("routine").unwrap_or(&Value::Null)),
        products: normalize_list(value.get("products").unwrap_or(&Value::Null)),
        ingredients: normalize_list(value.get("ingredients").unwrap_or(&Value::Null)),
        avoid: normalize_list(value.get("avoid").unwrap_or(&Value::Null)),
    }
}
