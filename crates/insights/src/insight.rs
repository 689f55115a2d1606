//! The insight object returned to clients.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured analysis of a piece of workspace content.
///
/// List entries are kept as the model produced them (usually strings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub summary: Vec<Value>,
    pub issues_detected: Vec<Value>,
    pub recommendations: Vec<Value>,
    pub next_steps: Vec<Value>,
    pub priority_breakdown: PriorityBreakdown,
    pub alternate_versions: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub high: Vec<Value>,
    pub medium: Vec<Value>,
    pub low: Vec<Value>,
}

impl Insights {
    /// Build from a parsed JSON object, defaulting every field that is
    /// missing or not of the expected shape.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            summary: list(object, "summary"),
            issues_detected: list(object, "issues_detected"),
            recommendations: list(object, "recommendations"),
            next_steps: list(object, "next_steps"),
            priority_breakdown: match object.get("priority_breakdown") {
                Some(Value::Object(levels)) => PriorityBreakdown {
                    high: list(levels, "high"),
                    medium: list(levels, "medium"),
                    low: list(levels, "low"),
                },
                _ => PriorityBreakdown::default(),
            },
            alternate_versions: list(object, "alternate_versions"),
        }
    }

    /// Insight whose only content is `text` as a single summary entry.
    pub fn summary_only(text: String) -> Self {
        Self {
            summary: vec![Value::String(text)],
            ..Self::default()
        }
    }
}

fn list(object: &Map<String, Value>, key: &str) -> Vec<Value> {
    match object.get(key) {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn from(value: Value) -> Insights {
        match value {
            Value::Object(map) => Insights::from_object(&map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn wrong_shapes_are_defaulted_independently() {
        let insights = from(json!({
            "summary": "not a list",
            "issues_detected": ["late"],
            "priority_breakdown": {"high": ["ship"], "medium": 3},
            "alternate_versions": null,
        }));

        assert!(insights.summary.is_empty());
        assert_eq!(insights.issues_detected, vec![json!("late")]);
        assert_eq!(insights.priority_breakdown.high, vec![json!("ship")]);
        assert!(insights.priority_breakdown.medium.is_empty());
        assert!(insights.priority_breakdown.low.is_empty());
        assert!(insights.alternate_versions.is_empty());
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let value = serde_json::to_value(Insights::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "summary": [],
                "issues_detected": [],
                "recommendations": [],
                "next_steps": [],
                "priority_breakdown": {"high": [], "medium": [], "low": []},
                "alternate_versions": [],
            })
        );
    }
}
