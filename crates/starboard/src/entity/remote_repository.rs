//! RemoteRepositoryEntity - one starred repository as handed back to the host.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::github::StarredRepository;

/// A taxonomy term materialized from an upstream topic label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTerm {
    /// Identifier assigned by the term store, `None` until saved.
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    /// Machine name of the vocabulary the term belongs to.
    pub vocabulary: String,
}

impl TopicTerm {
    /// Build an unsaved term for `topic`; name and description are both the topic.
    pub fn from_topic(topic: &str, vocabulary: &str) -> Self {
        Self {
            id: None,
            name: topic.to_string(),
            description: topic.to_string(),
            vocabulary: vocabulary.to_string(),
        }
    }
}

/// A starred repository enriched with its readme, license and topic terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteRepositoryEntity {
    // ─── Identity ────────────────────────────────────────────────────────────
    pub repository_id: Option<i64>,
    pub repository_name: Option<String>,
    /// `owner/name`.
    pub repository_fullname: Option<String>,

    // ─── Content ─────────────────────────────────────────────────────────────
    pub repository_description: Option<String>,
    /// Rendered readme, absent when GitHub has none or the fetch failed.
    pub repository_readme: Option<String>,
    /// License display name, e.g. "MIT License".
    pub repository_license: Option<String>,
    pub repository_url: Option<String>,
    pub repository_topics: Vec<TopicTerm>,

    // ─── Timestamps (raw upstream strings) ───────────────────────────────────
    pub repository_createddate: Option<String>,
    pub repository_updateddate: Option<String>,
    pub repository_pusheddate: Option<String>,

    // ─── Counters ────────────────────────────────────────────────────────────
    pub repository_forks: Option<u64>,
    pub repository_stargazers: Option<u64>,
    pub repository_watchers: Option<u64>,
    /// Size in KB.
    pub repository_size: Option<u64>,
}

impl RemoteRepositoryEntity {
    /// Assemble an entity from a listing record and its enrichment results.
    pub fn assemble(
        record: StarredRepository,
        readme: Option<String>,
        license: Option<String>,
        topics: Vec<TopicTerm>,
    ) -> Self {
        Self {
            repository_id: record.id,
            repository_name: record.name,
            repository_fullname: record.full_name,
            repository_description: record.description,
            repository_readme: readme,
            repository_license: license,
            repository_url: record.html_url,
            repository_topics: topics,
            repository_createddate: record.created_at,
            repository_updateddate: record.updated_at,
            repository_pusheddate: record.pushed_at,
            repository_forks: record.forks_count,
            repository_stargazers: record.stargazers_count,
            repository_watchers: record.watchers_count,
            repository_size: record.size,
        }
    }

    /// Names of the attached topic terms, in upstream order.
    pub fn topic_names(&self) -> Vec<&str> {
        self.repository_topics
            .iter()
            .map(|t| t.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_term_from_topic_mirrors_name_into_description() {
        let term = TopicTerm::from_topic("rust", "starboard_topics");
        assert_eq!(term.name, "rust");
        assert_eq!(term.description, "rust");
        assert_eq!(term.vocabulary, "starboard_topics");
        assert!(term.id.is_none());
    }

    #[test]
    fn test_assemble_maps_listing_fields() {
        let record = StarredRepository {
            id: Some(42),
            name: Some("b".to_string()),
            full_name: Some("a/b".to_string()),
            description: Some("desc".to_string()),
            html_url: Some("https://github.com/a/b".to_string()),
            topics: vec!["x".to_string()],
            created_at: Some("2020-01-01T00:00:00Z".to_string()),
            updated_at: Some("2021-01-01T00:00:00Z".to_string()),
            pushed_at: None,
            forks_count: Some(3),
            stargazers_count: Some(10),
            watchers_count: Some(10),
            size: Some(256),
        };
        let topics = vec![TopicTerm::from_topic("x", "starboard_topics")];

        let entity = RemoteRepositoryEntity::assemble(
            record,
            Some("<h1>b</h1>".to_string()),
            None,
            topics,
        );

        assert_eq!(entity.repository_id, Some(42));
        assert_eq!(entity.repository_fullname.as_deref(), Some("a/b"));
        assert_eq!(entity.repository_url.as_deref(), Some("https://github.com/a/b"));
        assert_eq!(entity.repository_readme.as_deref(), Some("<h1>b</h1>"));
        assert!(entity.repository_license.is_none());
        assert!(entity.repository_pusheddate.is_none());
        assert_eq!(entity.repository_stargazers, Some(10));
        assert_eq!(entity.topic_names(), vec!["x"]);
    }

    #[test]
    fn test_assemble_empty_record_is_all_absent() {
        let entity =
            RemoteRepositoryEntity::assemble(StarredRepository::default(), None, None, Vec::new());
        assert_eq!(entity, RemoteRepositoryEntity::default());
    }
}
