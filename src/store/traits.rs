use crate::models::{Ad, AdDraft};
use anyhow::Result;
use async_trait::async_trait;

/// The remote ad collection, as seen by the repository.
/// A trait seam here keeps the fallback policy testable against fake remotes.
#[async_trait]
pub trait RemoteAds: Send + Sync {
    /// Fetch the full collection, newest-first.
    async fn list(&self) -> Result<Vec<Ad>>;

    /// Fetch all ads in one category, newest-first.
    async fn list_category(&self, category: &str) -> Result<Vec<Ad>>;

    /// Fetch one ad by its raw id string. A clean miss is `Ok(None)`.
    async fn get(&self, id: &str) -> Result<Option<Ad>>;

    /// Persist a draft; the remote schema fills identity and defaults.
    async fn create(&self, draft: &AdDraft) -> Result<Ad>;

    /// Remove an ad by id. Removing a nonexistent id is not an error.
    async fn delete(&self, id: &str) -> Result<()>;
}
