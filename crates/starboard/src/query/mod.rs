//! Select query over a GitHub account's starred repositories.
//!
//! A [`RemoteSelectQuery`] accumulates conditions the way an entity query
//! against a local store would, then satisfies them with GitHub REST calls.
//!
//! # Module Structure
//!
//! - [`conditions`] - Condition values and the per-base condition store
//! - [`translate`] - Generic field query translation
//! - `execute` - Listing, enrichment and post-filtering
//! - [`errors`] - Usage and execution errors
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use starboard::{EntityInfo, GitHubConnection, InMemoryTermStore, QueryContext, RemoteSelectQuery};
//!
//! let mut query = RemoteSelectQuery::new(connection, Arc::new(InMemoryTermStore::new()));
//! query
//!     .bind_entity(Arc::new(EntityInfo::remote_repository()))
//!     .add_property_condition("repository_fullname", "rust-lang/rust", None)?;
//! let repos = query.execute(&QueryContext::new("octocat")).await?;
//! ```

pub mod conditions;
pub mod errors;
mod execute;
pub mod translate;

use std::sync::Arc;

use crate::entity::{EntityMetadataProvider, REMOTE_REPOSITORY_BASE};
use crate::github::GitHubConnection;
use crate::taxonomy::TermStore;

pub use conditions::{Condition, ConditionStore, ConditionValue};
pub use errors::{QueryError, UsageError};
pub use execute::starred_path;
pub use translate::{FieldCondition, FieldQuery};

use errors::throw_exception;

/// Condition name accepted by [`RemoteSelectQuery::add_entity_condition`].
pub const ENTITY_ID_CONDITION: &str = "entity_id";

/// Query over remote repository entities.
///
/// Multiple retrieval is the default until an equality entity-id condition
/// makes it single; a later property condition makes it multiple again.
pub struct RemoteSelectQuery {
    connection: GitHubConnection,
    term_store: Arc<dyn TermStore>,
    entity_info: Option<Arc<dyn EntityMetadataProvider>>,
    remote_base: String,
    conditions: ConditionStore,
    retrieve_multiple: bool,
    from_date: Option<String>,
    to_date: Option<String>,
    user_id: Option<ConditionValue>,
}

impl RemoteSelectQuery {
    pub fn new(connection: GitHubConnection, term_store: Arc<dyn TermStore>) -> Self {
        Self {
            connection,
            term_store,
            entity_info: None,
            remote_base: REMOTE_REPOSITORY_BASE.to_string(),
            conditions: ConditionStore::new(),
            retrieve_multiple: true,
            from_date: None,
            to_date: None,
            user_id: None,
        }
    }

    /// Bind the entity type this query selects.
    pub fn bind_entity(&mut self, info: Arc<dyn EntityMetadataProvider>) -> &mut Self {
        self.remote_base = info.remote_base().to_string();
        self.entity_info = Some(info);
        self
    }

    /// Add a condition on the entity identifier.
    ///
    /// Only `entity_id` is accepted. An absent or `=` operator switches the
    /// query to single retrieval; other operators leave cardinality alone.
    pub fn add_entity_condition(
        &mut self,
        field: &str,
        value: impl Into<ConditionValue>,
        operator: Option<&str>,
    ) -> Result<&mut Self, UsageError> {
        if field != ENTITY_ID_CONDITION {
            return Err(throw_exception(UsageError::invalid_condition_kind(field)));
        }

        let remote_field = self
            .entity_info
            .as_ref()
            .map(|info| info.remote_id_field().to_string())
            .ok_or_else(|| throw_exception(UsageError::entity_type_not_configured()))?;

        let condition = Condition::new(remote_field, value, operator);
        if condition.is_equality() {
            self.retrieve_multiple = false;
        }
        let base = self.remote_base.clone();
        self.conditions.push(&base, condition);

        Ok(self)
    }

    /// Add a condition on a local property, mapped to its remote field.
    ///
    /// Always switches the query to multiple retrieval.
    pub fn add_property_condition(
        &mut self,
        property: &str,
        value: impl Into<ConditionValue>,
        operator: Option<&str>,
    ) -> Result<&mut Self, UsageError> {
        let info = self
            .entity_info
            .as_ref()
            .ok_or_else(|| throw_exception(UsageError::entity_type_not_configured()))?;

        let remote_field = info
            .remote_field(property)
            .map(String::from)
            .ok_or_else(|| throw_exception(UsageError::unknown_property(property)))?;

        self.retrieve_multiple = true;
        let base = self.remote_base.clone();
        self.conditions
            .push(&base, Condition::new(remote_field, value, operator));

        Ok(self)
    }

    pub fn retrieve_multiple(&self) -> bool {
        self.retrieve_multiple
    }

    pub fn conditions(&self) -> &ConditionStore {
        &self.conditions
    }

    pub fn remote_base(&self) -> &str {
        &self.remote_base
    }

    /// Entity type of the bound metadata, if any.
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_info.as_ref().map(|info| info.entity_type())
    }

    /// Lower date bound as `YYYY/MM/DD`.
    pub fn from_date(&self) -> Option<&str> {
        self.from_date.as_deref()
    }

    /// Upper date bound as `YYYY/MM/DD`.
    pub fn to_date(&self) -> Option<&str> {
        self.to_date.as_deref()
    }

    pub fn user_id(&self) -> Option<&ConditionValue> {
        self.user_id.as_ref()
    }
}
