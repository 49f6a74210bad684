//! Term store boundary for topic terms.
//!
//! The executor writes one term per topic string per repository. Whether
//! repeated names collapse into a single term is up to the store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::entity::TopicTerm;

/// Vocabulary machine name topic terms are saved under.
pub const TOPICS_VOCABULARY: &str = "starboard_topics";

#[derive(Debug, Error)]
pub enum TermStoreError {
    #[error("Term store unavailable: {0}")]
    Unavailable(String),

    #[error("Term '{name}' rejected: {reason}")]
    Rejected { name: String, reason: String },
}

/// Persists taxonomy terms on behalf of the host.
#[async_trait]
pub trait TermStore: Send + Sync {
    /// Save `term` and return it with its identifier filled in.
    async fn save(&self, term: TopicTerm) -> Result<TopicTerm, TermStoreError>;
}

/// Term store that keeps every saved term in memory.
///
/// Assigns a fresh v4 UUID per save and never deduplicates.
#[derive(Clone, Default)]
pub struct InMemoryTermStore {
    terms: Arc<Mutex<Vec<TopicTerm>>>,
}

impl InMemoryTermStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all saved terms in save order.
    pub fn terms(&self) -> Vec<TopicTerm> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Each save is a single push, so a poisoned list is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<TopicTerm>> {
        self.terms.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TermStore for InMemoryTermStore {
    async fn save(&self, mut term: TopicTerm) -> Result<TopicTerm, TermStoreError> {
        term.id = Some(Uuid::new_v4());
        self.lock().push(term.clone());
        Ok(term)
    }
}
