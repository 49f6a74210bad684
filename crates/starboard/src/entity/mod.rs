//! Remote entity definitions and the metadata used to query them.

pub mod metadata;
pub mod remote_repository;

pub use metadata::{
    EntityInfo, EntityMetadataProvider, REMOTE_REPOSITORY_BASE, REMOTE_REPOSITORY_ENTITY_TYPE,
};
pub use remote_repository::{RemoteRepositoryEntity, TopicTerm};
