//! GitHub payload types consumed by the query executor.

use serde::Deserialize;

/// Media type for the starred listing. The mercy preview includes `topics`.
pub const STARRED_MEDIA_TYPE: &str = "application/vnd.github.mercy-preview+json";

/// Media type asking GitHub to render the readme as HTML.
pub const README_MEDIA_TYPE: &str = "application/vnd.github.v3.html";

/// Media type for the repository license endpoint.
pub const LICENSE_MEDIA_TYPE: &str = "application/vnd.github.drax-preview+json";

/// One entry of `GET /users/{login}/starred`.
///
/// Every field is optional: records missing a field still produce an entity
/// with that attribute absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StarredRepository {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
    pub forks_count: Option<u64>,
    pub stargazers_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub size: Option<u64>,
}

/// Body of `GET /repos/{owner}/{repo}/license`, reduced to what we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseEnvelope {
    pub license: Option<LicenseInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseInfo {
    pub name: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starred_repository_full_record() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "description": "This your first repo!",
            "html_url": "https://github.com/octocat/Hello-World",
            "topics": ["octocat", "atom"],
            "created_at": "2011-01-26T19:01:12Z",
            "updated_at": "2011-01-26T19:14:43Z",
            "pushed_at": "2011-01-26T19:06:43Z",
            "forks_count": 9,
            "stargazers_count": 80,
            "watchers_count": 80,
            "size": 108,
            "private": false
        }"#;

        let repo: StarredRepository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, Some(1296269));
        assert_eq!(repo.full_name.as_deref(), Some("octocat/Hello-World"));
        assert_eq!(repo.topics, vec!["octocat", "atom"]);
        assert_eq!(repo.created_at.as_deref(), Some("2011-01-26T19:01:12Z"));
        assert_eq!(repo.size, Some(108));
    }

    #[test]
    fn test_starred_repository_missing_and_null_fields() {
        let repo: StarredRepository =
            serde_json::from_str(r#"{"id": 7, "description": null, "topics": null}"#).unwrap();
        assert_eq!(repo.id, Some(7));
        assert!(repo.name.is_none());
        assert!(repo.description.is_none());
        assert!(repo.topics.is_empty());
        assert!(repo.forks_count.is_none());
    }

    #[test]
    fn test_license_envelope_nested_name() {
        let envelope: LicenseEnvelope = serde_json::from_str(
            r#"{"name": "LICENSE", "license": {"key": "mit", "name": "MIT License"}}"#,
        )
        .unwrap();
        assert_eq!(
            envelope.license.and_then(|l| l.name).as_deref(),
            Some("MIT License")
        );
    }
}
