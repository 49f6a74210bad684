use thiserror::Error;

/// Misuse of the condition setters. Callers should fix the call, not retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// `add_entity_condition` was given something other than `entity_id`.
    #[error("remote select query error, got message '{message}'")]
    InvalidConditionKind { field: String, message: String },

    /// A condition needed entity metadata before any was bound.
    #[error("remote select query error, got message '{message}'")]
    EntityTypeNotConfigured { message: String },

    /// The property is not in the bound property map.
    #[error("remote select query error, got message '{message}'")]
    UnknownProperty { property: String, message: String },
}

impl UsageError {
    pub fn invalid_condition_kind(field: impl Into<String>) -> Self {
        Self::InvalidConditionKind {
            field: field.into(),
            message: "The query object can only accept the 'entity_id' condition.".to_string(),
        }
    }

    pub fn entity_type_not_configured() -> Self {
        Self::EntityTypeNotConfigured {
            message: "The query object was not set with an entity type.".to_string(),
        }
    }

    pub fn unknown_property(property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            property: property.into(),
            message: "The query object cannot set a non-existent property.".to_string(),
        }
    }

    /// Machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConditionKind { .. } => "STARBOARD_INVALID_ENTITY_CONDITION",
            Self::EntityTypeNotConfigured { .. } => "STARBOARD_ENTITY_BASE_NOT_SET",
            Self::UnknownProperty { .. } => "STARBOARD_INVALID_PROPERTY",
        }
    }

    /// User-facing message without the error prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidConditionKind { message, .. }
            | Self::EntityTypeNotConfigured { message }
            | Self::UnknownProperty { message, .. } => message,
        }
    }
}

/// Log a usage error and hand it back for the caller to return.
pub(crate) fn throw_exception(error: UsageError) -> UsageError {
    tracing::error!(
        code = error.code(),
        reason = %error.message(),
        "RemoteSelectQuery rejected a condition"
    );
    error
}

/// Failures that abort [`execute`](super::RemoteSelectQuery::execute).
#[derive(Debug, Error)]
pub enum QueryError {
    /// The starred listing body was not an array of repository records.
    #[error("Failed to decode {context} response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl QueryError {
    pub(crate) fn decode(context: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { context, source }
    }
}

/// Result type for execution.
pub type Result<T> = std::result::Result<T, QueryError>;
