use std::collections::HashSet;

use serde_json::Value;

use crate::domain::chat::entities::StyleDetail;

/// Reads the idea list out of a parsed reply. Non-list values and non-string
/// entries degrade to absence rather than failing.
pub fn parse_style_ideas(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Reads the detail list out of a parsed reply, keeping object entries with
/// lenient field defaults and dropping everything else.
pub fn parse_style_details(value: Option<&Value>) -> Vec<StyleDetail> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Cross-list consistency: when the model produced any ideas, keep only the
/// details whose trimmed title exactly matches a trimmed idea. Unmatched
/// ideas survive without a detail record. With no ideas, details pass
/// through untouched.
pub fn filter_style_details(
    style_ideas: &[String],
    style_details: Vec<StyleDetail>,
) -> Vec<StyleDetail> {
    if style_ideas.is_empty() {
        return style_details;
    }

    let allowed: HashSet<&str> = style_ideas
        .iter()
        .map(|idea| idea.trim())
        .filter(|idea| !idea.is_empty())
        .collect();

    style_details
        .into_iter()
        .filter(|detail| allowed.contains(detail.title.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(title: &str) -> StyleDetail {
        StyleDetail {
            title: title.to_string(),
            ..StyleDetail::default()
        }
    }

    #[test]
    fn parse_style_ideas_keeps_string_entries() {
        let value = json!(["Box Braids", 3, null, "Wolf Cut"]);
        assert_eq!(parse_style_ideas(Some(&value)), vec!["Box Braids", "Wolf Cut"]);
        assert!(parse_style_ideas(Some(&json!("not a list"))).is_empty());
        assert!(parse_style_ideas(None).is_empty());
    }

    #[test]
    fn parse_style_details_keeps_object_entries_with_defaults() {
        let value = json!([
            {"title": "Box Braids", "why": "low manipulation"},
            "not an object",
            {"title": "Wolf Cut", "image_search": "wolf cut shoulder length 2c"}
        ]);
        let details = parse_style_details(Some(&value));
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].title, "Box Braids");
        assert_eq!(details[0].image_search, "");
        assert_eq!(details[1].image_search, "wolf cut shoulder length 2c");
    }

    #[test]
    fn filter_drops_details_without_a_matching_idea() {
        let ideas = vec!["Box Braids".to_string(), "Wolf Cut".to_string()];
        let details = vec![detail("Box Braids"), detail("Twist Out")];
        let filtered = filter_style_details(&ideas, details);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Box Braids");
    }

    #[test]
    fn filter_matches_on_trimmed_titles() {
        let ideas = vec!["  Box Braids ".to_string()];
        let filtered = filter_style_details(&ideas, vec![detail("Box Braids  ")]);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn filter_passes_details_through_when_there_are_no_ideas() {
        let details = vec![detail("Anything")];
        assert_eq!(filter_style_details(&[], details.clone()), details);
    }
}
