//! Translation from a generic field query into query state.

use serde::{Deserialize, Serialize};

use super::RemoteSelectQuery;
use super::conditions::{Condition, ConditionValue};

/// Date pattern the reserved date columns are stored in.
pub const DATE_PATTERN: &str = "%Y/%m/%d";

/// One property condition of a generic field query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCondition {
    pub column: String,
    pub value: ConditionValue,
    #[serde(default)]
    pub operator: Option<String>,
}

impl FieldCondition {
    pub fn new(column: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
            operator: None,
        }
    }

    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }
}

/// A generic field query as built by a host that knows nothing about GitHub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldQuery {
    #[serde(default)]
    pub property_conditions: Vec<FieldCondition>,
}

impl FieldQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn condition(mut self, condition: FieldCondition) -> Self {
        self.property_conditions.push(condition);
        self
    }
}

impl RemoteSelectQuery {
    /// Copy the conditions of a generic field query onto this query.
    ///
    /// `from_date` and `to_date` are reformatted to `YYYY/MM/DD` and silently
    /// dropped when they cannot be; `user_id` is kept verbatim. Every other
    /// column is appended as a raw condition on the bound base without
    /// consulting the property map. Later reserved entries overwrite earlier
    /// ones.
    pub fn build_from_field_query(&mut self, query: &FieldQuery) -> &mut Self {
        for condition in &query.property_conditions {
            match condition.column.as_str() {
                "from_date" => {
                    if let Some(date) = condition.value.format_date(DATE_PATTERN) {
                        self.from_date = Some(date);
                    }
                }
                "to_date" => {
                    if let Some(date) = condition.value.format_date(DATE_PATTERN) {
                        self.to_date = Some(date);
                    }
                }
                "user_id" => {
                    self.user_id = Some(condition.value.clone());
                }
                column => {
                    let base = self.remote_base.clone();
                    self.conditions.push(
                        &base,
                        Condition {
                            field: column.to_string(),
                            value: condition.value.clone(),
                            operator: condition.operator.clone(),
                        },
                    );
                }
            }
        }

        tracing::debug!(
            translated = query.property_conditions.len(),
            from_date = ?self.from_date,
            to_date = ?self.to_date,
            "Built query from field query"
        );
        self
    }
}
