//! Starboard - entity queries answered by the GitHub REST API.
//!
//! A host builds a [`RemoteSelectQuery`] the way it would build a query
//! against its own entity storage: entity-id and property conditions, or a
//! translated generic [`FieldQuery`]. Executing it lists the starred
//! repositories of a configured account and enriches each with its readme,
//! license name and topic terms.
//!
//! # Features
//!
//! - `reqwest` (default) - [`http::reqwest_transport::ReqwestTransport`], a
//!   real [`HttpTransport`] backed by reqwest.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use starboard::http::reqwest_transport::ReqwestTransport;
//! use starboard::{EntityInfo, GitHubConnection, InMemoryTermStore, QueryContext, RemoteSelectQuery};
//!
//! let transport = ReqwestTransport::new(reqwest::Client::new());
//! let connection = GitHubConnection::new(Arc::new(transport));
//! let mut query = RemoteSelectQuery::new(connection, Arc::new(InMemoryTermStore::new()));
//! query.bind_entity(Arc::new(EntityInfo::remote_repository()));
//!
//! let repos = query.execute(&QueryContext::new("octocat")).await?;
//! ```

pub mod context;
pub mod entity;
pub mod github;
pub mod http;
pub mod query;
pub mod taxonomy;

pub use context::{
    Notifier, QueryContext, TracingNotifier, ValidationState, short_error_message,
};
pub use entity::{
    EntityInfo, EntityMetadataProvider, REMOTE_REPOSITORY_BASE, REMOTE_REPOSITORY_ENTITY_TYPE,
    RemoteRepositoryEntity, TopicTerm,
};
pub use github::{GitHubConnection, StarredRepository};
pub use http::{HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use query::{
    Condition, ConditionStore, ConditionValue, FieldCondition, FieldQuery, QueryError,
    RemoteSelectQuery, UsageError,
};
pub use taxonomy::{InMemoryTermStore, TOPICS_VOCABULARY, TermStore, TermStoreError};
