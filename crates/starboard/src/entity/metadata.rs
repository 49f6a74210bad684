//! Static entity metadata consulted by the condition store.

use std::collections::BTreeMap;

/// Entity type name of starred repository records.
pub const REMOTE_REPOSITORY_ENTITY_TYPE: &str = "starboard_remote_repository";

/// Remote base (resource family) conditions for repositories are grouped under.
pub const REMOTE_REPOSITORY_BASE: &str = "starred_repositories";

/// Read-only description of a remote entity type.
pub trait EntityMetadataProvider: Send + Sync {
    /// Entity type name used to dispatch parsing.
    fn entity_type(&self) -> &str;

    /// Remote base the entity's conditions are grouped under.
    fn remote_base(&self) -> &str;

    /// Remote field holding the entity identifier.
    fn remote_id_field(&self) -> &str;

    /// Remote field name for a local property, if the property is mapped.
    fn remote_field(&self, property: &str) -> Option<&str>;
}

/// Table-driven [`EntityMetadataProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityInfo {
    pub entity_type: String,
    pub remote_base: String,
    pub remote_id_field: String,
    /// Local property name → remote field name.
    pub property_map: BTreeMap<String, String>,
}

impl EntityInfo {
    /// Metadata for starred repository records.
    ///
    /// Properties map onto the identically named attributes of
    /// [`RemoteRepositoryEntity`](super::RemoteRepositoryEntity); the id field
    /// is `repository_id`.
    pub fn remote_repository() -> Self {
        let property_map = [
            "repository_id",
            "repository_name",
            "repository_fullname",
            "repository_description",
            "repository_readme",
            "repository_license",
            "repository_url",
            "repository_topics",
            "repository_createddate",
            "repository_updateddate",
            "repository_pusheddate",
            "repository_forks",
            "repository_stargazers",
            "repository_watchers",
            "repository_size",
        ]
        .into_iter()
        .map(|p| (p.to_string(), p.to_string()))
        .collect();

        Self {
            entity_type: REMOTE_REPOSITORY_ENTITY_TYPE.to_string(),
            remote_base: REMOTE_REPOSITORY_BASE.to_string(),
            remote_id_field: "repository_id".to_string(),
            property_map,
        }
    }
}

impl EntityMetadataProvider for EntityInfo {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn remote_base(&self) -> &str {
        &self.remote_base
    }

    fn remote_id_field(&self) -> &str {
        &self.remote_id_field
    }

    fn remote_field(&self, property: &str) -> Option<&str> {
        self.property_map.get(property).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_repository_info() {
        let info = EntityInfo::remote_repository();
        assert_eq!(info.entity_type(), REMOTE_REPOSITORY_ENTITY_TYPE);
        assert_eq!(info.remote_base(), REMOTE_REPOSITORY_BASE);
        assert_eq!(info.remote_id_field(), "repository_id");
        assert_eq!(
            info.remote_field("repository_fullname"),
            Some("repository_fullname")
        );
        assert_eq!(info.remote_field("owner"), None);
    }

    #[test]
    fn test_custom_property_map() {
        let info = EntityInfo {
            entity_type: "custom".to_string(),
            remote_base: "base".to_string(),
            remote_id_field: "remote_id".to_string(),
            property_map: BTreeMap::from([("title".to_string(), "name".to_string())]),
        };
        assert_eq!(info.remote_field("title"), Some("name"));
        assert_eq!(info.remote_field("name"), None);
    }
}
