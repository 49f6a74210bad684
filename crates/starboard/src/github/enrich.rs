//! Per-repository enrichment: readme, license and topic terms.

use super::connection::GitHubConnection;
use super::parse::{parse_license, parse_readme};
use super::types::{LICENSE_MEDIA_TYPE, README_MEDIA_TYPE, StarredRepository};
use crate::context::{Notifier, short_error_message};
use crate::entity::{RemoteRepositoryEntity, TopicTerm};
use crate::http::{HttpMethod, HttpResponse};
use crate::taxonomy::{TOPICS_VOCABULARY, TermStore};

/// GET `path`, turning a transport failure into a log line and a notice.
pub(crate) async fn fetch_tolerant(
    connection: &GitHubConnection,
    path: &str,
    accept: &str,
    notifier: &dyn Notifier,
) -> Option<HttpResponse> {
    match connection
        .make_request(path, HttpMethod::Get, &[("Accept", accept)])
        .await
    {
        Ok(response) => Some(response),
        Err(e) => {
            tracing::warn!(path, error = %e, "GitHub request failed, continuing without it");
            notifier.notify(&short_error_message(&e));
            None
        }
    }
}

/// Save one term per topic string, in order.
///
/// A failed save is logged and the term left out.
pub async fn materialize_topics(topics: &[String], term_store: &dyn TermStore) -> Vec<TopicTerm> {
    let mut terms = Vec::with_capacity(topics.len());
    for topic in topics {
        match term_store
            .save(TopicTerm::from_topic(topic, TOPICS_VOCABULARY))
            .await
        {
            Ok(term) => terms.push(term),
            Err(e) => {
                tracing::warn!(topic = %topic, error = %e, "Failed to save topic term");
            }
        }
    }
    terms
}

/// Turn one listing record into an entity.
///
/// Requests are issued one after another: readme, license, then one term
/// write per topic. A record without `full_name` skips both fetches.
pub async fn enrich_repository(
    record: StarredRepository,
    connection: &GitHubConnection,
    term_store: &dyn TermStore,
    notifier: &dyn Notifier,
) -> RemoteRepositoryEntity {
    let (readme_response, license_response) = match record.full_name.as_deref() {
        Some(full_name) => {
            let readme = fetch_tolerant(
                connection,
                &format!("repos/{full_name}/readme"),
                README_MEDIA_TYPE,
                notifier,
            )
            .await;
            let license = fetch_tolerant(
                connection,
                &format!("repos/{full_name}/license"),
                LICENSE_MEDIA_TYPE,
                notifier,
            )
            .await;
            (readme, license)
        }
        None => {
            tracing::debug!(
                id = ?record.id,
                "Starred record has no full_name, skipping readme and license"
            );
            (None, None)
        }
    };

    let topics = materialize_topics(&record.topics, term_store).await;

    let readme = parse_readme(readme_response.as_ref());
    let license = parse_license(license_response.as_ref());

    RemoteRepositoryEntity::assemble(record, readme, license, topics)
}
