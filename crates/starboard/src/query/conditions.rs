//! Conditions accumulated by a query before execution.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operator treated as equality. An absent operator means the same.
pub const EQUALS: &str = "=";

/// Value side of a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    Text(String),
    /// Operand of `IN`-style conditions.
    List(Vec<ConditionValue>),
}

impl ConditionValue {
    /// Render a date-like value with a chrono `pattern`.
    ///
    /// Text is parsed as RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` or
    /// `YYYY/MM/DD`; integers are Unix timestamps. Anything else yields `None`.
    pub fn format_date(&self, pattern: &str) -> Option<String> {
        let date = match self {
            Self::Date(d) => *d,
            Self::DateTime(dt) => dt.date_naive(),
            Self::Integer(ts) => DateTime::from_timestamp(*ts, 0)?.date_naive(),
            Self::Text(s) => parse_date_text(s)?,
            Self::Null | Self::Bool(_) | Self::Float(_) | Self::List(_) => return None,
        };
        Some(date.format(pattern).to_string())
    }

    /// Loose equality against an integer attribute (`"42"` matches `42`).
    ///
    /// A list matches when any member does.
    pub fn matches_integer(&self, other: i64) -> bool {
        match self {
            Self::Integer(v) => *v == other,
            Self::Float(v) => *v == other as f64,
            Self::Text(s) => s.trim().parse::<i64>() == Ok(other),
            Self::List(values) => values.iter().any(|v| v.matches_integer(other)),
            _ => false,
        }
    }

    /// Loose equality against a string attribute, by text form.
    ///
    /// A list matches when any member does; null never matches.
    pub fn matches_text(&self, other: &str) -> bool {
        match self {
            Self::List(values) => values.iter().any(|v| v.matches_text(other)),
            value => value.text_form().is_some_and(|text| text == other),
        }
    }

    /// Scalar rendered as text, `None` for null and lists.
    pub fn text_form(&self) -> Option<String> {
        match self {
            Self::Null | Self::List(_) => None,
            Self::Bool(v) => Some(v.to_string()),
            Self::Integer(v) => Some(v.to_string()),
            Self::Float(v) => Some(v.to_string()),
            Self::DateTime(v) => Some(v.to_rfc3339()),
            Self::Date(v) => Some(v.format("%Y-%m-%d").to_string()),
            Self::Text(v) => Some(v.clone()),
        }
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ConditionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ConditionValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u64> for ConditionValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Self::Integer)
            .unwrap_or(Self::Float(value as f64))
    }
}

impl From<f64> for ConditionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ConditionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for ConditionValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for ConditionValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<ConditionValue>> From<Vec<T>> for ConditionValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// A single field/value/operator filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Remote field name.
    pub field: String,
    pub value: ConditionValue,
    pub operator: Option<String>,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        value: impl Into<ConditionValue>,
        operator: Option<&str>,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            operator: operator.map(String::from),
        }
    }

    /// Whether the operator is absent or `=`.
    pub fn is_equality(&self) -> bool {
        self.operator.as_deref().is_none_or(|op| op == EQUALS)
    }
}

/// Conditions grouped by the remote base they apply to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionStore {
    groups: BTreeMap<String, Vec<Condition>>,
}

impl ConditionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, base: &str, condition: Condition) {
        self.groups
            .entry(base.to_string())
            .or_default()
            .push(condition);
    }

    /// Conditions for `base` in insertion order.
    pub fn for_base(&self, base: &str) -> &[Condition] {
        self.groups.get(base).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of conditions across all bases.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_from_typed_values() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            ConditionValue::from(date).format_date("%Y/%m/%d").as_deref(),
            Some("2024/03/05")
        );

        let dt = date.and_hms_opt(23, 59, 0).unwrap().and_utc();
        assert_eq!(
            ConditionValue::from(dt).format_date("%Y/%m/%d").as_deref(),
            Some("2024/03/05")
        );

        // 2024-03-05T00:00:00Z
        assert_eq!(
            ConditionValue::Integer(1_709_596_800)
                .format_date("%Y/%m/%d")
                .as_deref(),
            Some("2024/03/05")
        );
    }

    #[test]
    fn test_format_date_from_text() {
        for text in [
            "2024-03-05",
            "2024/03/05",
            "2024-03-05 10:00:00",
            "2024-03-05T10:00:00+00:00",
        ] {
            assert_eq!(
                ConditionValue::from(text).format_date("%Y/%m/%d").as_deref(),
                Some("2024/03/05"),
                "failed for {text}"
            );
        }
    }

    #[test]
    fn test_format_date_rejects_non_dates() {
        assert!(ConditionValue::from("next tuesday").format_date("%Y/%m/%d").is_none());
        assert!(ConditionValue::from("2024-13-45").format_date("%Y/%m/%d").is_none());
        assert!(ConditionValue::Bool(true).format_date("%Y/%m/%d").is_none());
        assert!(ConditionValue::Null.format_date("%Y/%m/%d").is_none());
    }

    #[test]
    fn test_loose_matching() {
        assert!(ConditionValue::from(42i64).matches_integer(42));
        assert!(ConditionValue::from("42").matches_integer(42));
        assert!(!ConditionValue::from("forty-two").matches_integer(42));
        assert!(ConditionValue::from("a/b").matches_text("a/b"));
        assert!(!ConditionValue::from("a/c").matches_text("a/b"));
        assert!(ConditionValue::from(7i64).matches_text("7"));
    }

    #[test]
    fn test_condition_value_deserializes_untagged() {
        let values: Vec<ConditionValue> =
            serde_json::from_str(r#"[null, true, 3, 1.5, "2024-03-05", "rust"]"#).unwrap();
        assert_eq!(values[0], ConditionValue::Null);
        assert_eq!(values[1], ConditionValue::Bool(true));
        assert_eq!(values[2], ConditionValue::Integer(3));
        assert_eq!(values[3], ConditionValue::Float(1.5));
        assert_eq!(
            values[4],
            ConditionValue::Date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
        );
        assert_eq!(values[5], ConditionValue::Text("rust".to_string()));
    }

    #[test]
    fn test_text_matching_uses_text_form() {
        let date: ConditionValue = serde_json::from_str(r#""2024-03-05""#).unwrap();
        assert!(matches!(date, ConditionValue::Date(_)));
        assert!(date.matches_text("2024-03-05"));
        assert!(ConditionValue::Bool(true).matches_text("true"));
        assert!(ConditionValue::Float(1.5).matches_text("1.5"));
        assert!(!ConditionValue::Null.matches_text(""));
    }

    #[test]
    fn test_list_values_match_any_member() {
        let ids = ConditionValue::from(vec![1i64, 2]);
        assert_eq!(
            ids,
            ConditionValue::List(vec![ConditionValue::Integer(1), ConditionValue::Integer(2)])
        );
        assert!(ids.matches_integer(2));
        assert!(!ids.matches_integer(3));

        let names = ConditionValue::from(vec!["a/b", "c/d"]);
        assert!(names.matches_text("c/d"));
        assert!(!names.matches_text("e/f"));
        assert!(names.format_date("%Y/%m/%d").is_none());
        assert!(ConditionValue::List(Vec::new()).text_form().is_none());
    }

    #[test]
    fn test_list_value_deserializes_from_array() {
        let value: ConditionValue = serde_json::from_str(r#"[1, "a/b"]"#).unwrap();
        assert_eq!(
            value,
            ConditionValue::List(vec![
                ConditionValue::Integer(1),
                ConditionValue::Text("a/b".to_string()),
            ])
        );
    }

    #[test]
    fn test_condition_is_equality() {
        assert!(Condition::new("f", 1i64, None).is_equality());
        assert!(Condition::new("f", 1i64, Some("=")).is_equality());
        assert!(!Condition::new("f", 1i64, Some(">")).is_equality());
    }

    #[test]
    fn test_store_groups_by_base_in_order() {
        let mut store = ConditionStore::new();
        assert!(store.is_empty());
        store.push("a", Condition::new("x", 1i64, None));
        store.push("b", Condition::new("y", 2i64, None));
        store.push("a", Condition::new("z", 3i64, Some("<>")));

        assert_eq!(store.len(), 3);
        let fields: Vec<&str> = store.for_base("a").iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["x", "z"]);
        assert!(store.for_base("missing").is_empty());
    }
}
