//! Query execution: listing, per-record enrichment, post-filters.

use super::RemoteSelectQuery;
use super::conditions::Condition;
use super::errors::Result;
use crate::context::QueryContext;
use crate::entity::{REMOTE_REPOSITORY_ENTITY_TYPE, RemoteRepositoryEntity};
use crate::github::enrich::fetch_tolerant;
use crate::github::{STARRED_MEDIA_TYPE, enrich_repository, parse_listing};
use crate::http::HttpResponse;

/// API path listing the repositories `login` has starred.
pub fn starred_path(login: &str) -> String {
    format!("users/{login}/starred")
}

impl RemoteSelectQuery {
    /// Run the query against GitHub.
    ///
    /// Returns nothing, without any request, while the host reports
    /// validation errors. Transport failures are logged and degrade the
    /// result instead of failing it; only an undecodable listing is an error.
    #[tracing::instrument(skip_all, fields(login = %ctx.login))]
    pub async fn execute(&self, ctx: &QueryContext) -> Result<Vec<RemoteRepositoryEntity>> {
        if ctx.validation.has_errors() {
            tracing::debug!("Validation errors pending, skipping remote query");
            return Ok(Vec::new());
        }

        let path = starred_path(&ctx.login);
        let response = fetch_tolerant(
            &self.connection,
            &path,
            STARRED_MEDIA_TYPE,
            ctx.notifier.as_ref(),
        )
        .await;

        let mut entities = match self.entity_type() {
            Some(REMOTE_REPOSITORY_ENTITY_TYPE) => {
                self.parse_repository_response(response.as_ref(), ctx)
                    .await?
            }
            other => {
                tracing::debug!(entity_type = ?other, "No parser for entity type");
                Vec::new()
            }
        };

        let fetched = entities.len();
        apply_post_filters(&mut entities, self.conditions.for_base(&self.remote_base));
        tracing::debug!(fetched, returned = entities.len(), "Remote query complete");

        Ok(entities)
    }

    async fn parse_repository_response(
        &self,
        response: Option<&HttpResponse>,
        ctx: &QueryContext,
    ) -> Result<Vec<RemoteRepositoryEntity>> {
        let records = parse_listing(response)?;
        tracing::debug!(count = records.len(), "Enriching starred repositories");

        let mut entities = Vec::with_capacity(records.len());
        for record in records {
            entities.push(
                enrich_repository(
                    record,
                    &self.connection,
                    self.term_store.as_ref(),
                    ctx.notifier.as_ref(),
                )
                .await,
            );
        }
        Ok(entities)
    }
}

/// Keep entities matching `repository_id` / `repository_fullname` conditions.
///
/// Operators are not consulted; every other field is ignored here.
pub(crate) fn apply_post_filters(
    entities: &mut Vec<RemoteRepositoryEntity>,
    conditions: &[Condition],
) {
    for condition in conditions {
        match condition.field.as_str() {
            "repository_id" => entities.retain(|entity| {
                entity
                    .repository_id
                    .is_some_and(|id| condition.value.matches_integer(id))
            }),
            "repository_fullname" => entities.retain(|entity| {
                entity
                    .repository_fullname
                    .as_deref()
                    .is_some_and(|name| condition.value.matches_text(name))
            }),
            _ => {}
        }
    }
}
