//! The reconciling ad repository: remote tier first, local cache on failure.
//!
//! The two tiers are never merged or synced. Remote errors only ever trigger
//! fallback and are not surfaced, so callers cannot tell which tier served
//! them; the only errors a caller sees are local cache write failures.

use crate::identity;
use crate::models::{Ad, AdDraft};
use crate::store::{LocalCache, RemoteAds};
use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info, warn};

pub struct AdRepository<R: RemoteAds> {
    remote: R,
    local: LocalCache,
}

impl<R: RemoteAds> AdRepository<R> {
    pub fn new(remote: R, local: LocalCache) -> Self {
        Self { remote, local }
    }

    /// All ads, newest-first. Falls back to the local collection when the
    /// remote call fails or the remote collection is empty; an empty remote
    /// result is deliberately treated the same as an unreachable remote.
    pub async fn list_all(&self) -> Result<Vec<Ad>> {
        match self.remote.list().await {
            Ok(ads) if !ads.is_empty() => Ok(ads),
            Ok(_) => {
                info!("remote collection is empty, serving local cache");
                self.local.read_all()
            }
            Err(err) => {
                warn!("remote list failed, serving local cache: {:#}", err);
                self.local.read_all()
            }
        }
    }

    /// Ads in one category, newest-first, with the same empty-or-failed
    /// fallback as [`list_all`](Self::list_all). The local fallback filters
    /// the cached collection by exact category.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Ad>> {
        match self.remote.list_category(category).await {
            Ok(ads) if !ads.is_empty() => Ok(ads),
            Ok(_) => {
                info!("remote has no ads in {:?}, serving local cache", category);
                self.list_local_category(category)
            }
            Err(err) => {
                warn!(
                    "remote category list failed, serving local cache: {:#}",
                    err
                );
                self.list_local_category(category)
            }
        }
    }

    fn list_local_category(&self, category: &str) -> Result<Vec<Ad>> {
        let ads = self.local.read_all()?;
        Ok(ads.into_iter().filter(|ad| ad.category == category).collect())
    }

    /// Look up one ad by its raw id string. A remote miss or failure falls
    /// back to scanning the local collection, where numeric-looking ids match
    /// locally minted records and anything else matches remote ids verbatim.
    /// Not-found is `Ok(None)`, never an error.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Ad>> {
        match self.remote.get(id).await {
            Ok(Some(ad)) => return Ok(Some(ad)),
            Ok(None) => debug!("ad {} not on remote, checking local cache", id),
            Err(err) => warn!("remote fetch failed, checking local cache: {:#}", err),
        }

        let ads = self.local.read_all()?;
        Ok(ads.into_iter().find(|ad| ad.id.matches(id)))
    }

    /// Create an ad from a draft. The draft goes to the remote unchanged
    /// (its schema applies its own defaults); only when that fails is the
    /// draft normalized, assigned a local id, and prepended to the cache.
    pub async fn create(&self, draft: AdDraft) -> Result<Ad> {
        match self.remote.create(&draft).await {
            Ok(ad) => Ok(ad),
            Err(err) => {
                warn!("remote create failed, saving to local cache: {:#}", err);
                let mut ads = self.local.read_all()?;
                let ad = identity::normalize(draft, identity::next_local_id(&ads), Utc::now());
                ads.insert(0, ad.clone());
                self.local.write_all(&ads)?;
                Ok(ad)
            }
        }
    }

    /// Delete an ad by id. Falls back to removing the matching local record
    /// when the remote call fails. Deleting an id that exists nowhere still
    /// succeeds.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        match self.remote.delete(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("remote delete failed, deleting from local cache: {:#}", err);
                let mut ads = self.local.read_all()?;
                let before = ads.len();
                ads.retain(|ad| !ad.id.matches(id));
                if ads.len() != before {
                    self.local.write_all(&ads)?;
                } else {
                    debug!("ad {} not in local cache either, nothing to delete", id);
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdId, Condition};
    use crate::store::seed;
    use async_trait::async_trait;
    use tempfile::TempDir;

    /// Remote that fails every call, as if the network were down.
    struct DownRemote;

    #[async_trait]
    impl RemoteAds for DownRemote {
        async fn list(&self) -> Result<Vec<Ad>> {
            anyhow::bail!("connection refused")
        }
        async fn list_category(&self, _category: &str) -> Result<Vec<Ad>> {
            anyhow::bail!("connection refused")
        }
        async fn get(&self, _id: &str) -> Result<Option<Ad>> {
            anyhow::bail!("connection refused")
        }
        async fn create(&self, _draft: &AdDraft) -> Result<Ad> {
            anyhow::bail!("connection refused")
        }
        async fn delete(&self, _id: &str) -> Result<()> {
            anyhow::bail!("connection refused")
        }
    }

    /// Remote that is reachable but holds the given collection.
    struct ServingRemote {
        ads: Vec<Ad>,
    }

    #[async_trait]
    impl RemoteAds for ServingRemote {
        async fn list(&self) -> Result<Vec<Ad>> {
            Ok(self.ads.clone())
        }
        async fn list_category(&self, category: &str) -> Result<Vec<Ad>> {
            Ok(self
                .ads
                .iter()
                .filter(|ad| ad.category == category)
                .cloned()
                .collect())
        }
        async fn get(&self, id: &str) -> Result<Option<Ad>> {
            Ok(self.ads.iter().find(|ad| ad.id.matches(id)).cloned())
        }
        async fn create(&self, draft: &AdDraft) -> Result<Ad> {
            let mut ad =
                identity::normalize(draft.clone(), 0, Utc::now());
            ad.id = AdId::Remote("68ab0000feed".to_string());
            Ok(ad)
        }
        async fn delete(&self, _id: &str) -> Result<()> {
            Ok(())
        }
    }

    fn cache_in(dir: &TempDir) -> LocalCache {
        LocalCache::new(dir.path().join("ads.json"))
    }

    fn draft(title: &str) -> AdDraft {
        AdDraft {
            title: title.to_string(),
            price: 500.0,
            category: "electronics".to_string(),
            condition: None,
            description: "test listing".to_string(),
            location: "Karachi".to_string(),
            images: None,
            name: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn list_serves_remote_when_available() {
        let dir = TempDir::new().unwrap();
        let remote_ads = seed::seed_ads()[..2].to_vec();
        let repo = AdRepository::new(ServingRemote { ads: remote_ads }, cache_in(&dir));

        let ads = repo.list_all().await.unwrap();
        assert_eq!(ads.len(), 2);
        // The local cache was never touched, so no file was seeded.
        assert!(!dir.path().join("ads.json").exists());
    }

    #[tokio::test]
    async fn list_falls_back_when_remote_is_down() {
        let dir = TempDir::new().unwrap();
        let repo = AdRepository::new(DownRemote, cache_in(&dir));

        let ads = repo.list_all().await.unwrap();
        let expected = seed::seed_ads();
        assert_eq!(ads.len(), expected.len());
        assert_eq!(ads[0].id, expected[0].id);
    }

    #[tokio::test]
    async fn empty_remote_list_is_treated_as_unavailable() {
        let dir = TempDir::new().unwrap();
        let repo = AdRepository::new(ServingRemote { ads: vec![] }, cache_in(&dir));

        let ads = repo.list_all().await.unwrap();
        assert_eq!(ads.len(), seed::seed_ads().len());
    }

    #[tokio::test]
    async fn category_list_falls_back_and_filters_locally() {
        let dir = TempDir::new().unwrap();
        let repo = AdRepository::new(DownRemote, cache_in(&dir));

        let ads = repo.list_by_category("furniture").await.unwrap();
        assert!(!ads.is_empty());
        assert!(ads.iter().all(|ad| ad.category == "furniture"));
    }

    #[tokio::test]
    async fn get_by_numeric_string_matches_local_record() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        let mut ads = seed::seed_ads();
        ads[0].id = AdId::Local(42);
        cache.write_all(&ads).unwrap();

        let repo = AdRepository::new(DownRemote, cache);
        let found = repo.get_by_id("42").await.unwrap();
        assert_eq!(found.unwrap().id, AdId::Local(42));
    }

    #[tokio::test]
    async fn get_by_id_miss_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        let repo = AdRepository::new(DownRemote, cache_in(&dir));

        let found = repo.get_by_id("no-such-id").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn create_falls_back_with_next_local_id() {
        let dir = TempDir::new().unwrap();
        let repo = AdRepository::new(DownRemote, cache_in(&dir));

        // Seed max id is 6, so the fallback create mints 7.
        let ad = repo.create(draft("PS5 controller")).await.unwrap();
        assert_eq!(ad.id, AdId::Local(7));
        assert_eq!(ad.condition, Condition::Used);
        assert_eq!(ad.posted, "Just now");

        // Prepended, so the new ad is first on the next read.
        let ads = repo.list_all().await.unwrap();
        assert_eq!(ads[0].id, AdId::Local(7));
        assert_eq!(ads.len(), seed::seed_ads().len() + 1);
    }

    #[tokio::test]
    async fn create_on_empty_cache_mints_id_one() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        cache.write_all(&[]).unwrap();

        let repo = AdRepository::new(DownRemote, cache);
        let ad = repo.create(draft("First listing")).await.unwrap();
        assert_eq!(ad.id, AdId::Local(1));
    }

    #[tokio::test]
    async fn remote_create_skips_normalization_and_cache() {
        let dir = TempDir::new().unwrap();
        let repo = AdRepository::new(ServingRemote { ads: vec![] }, cache_in(&dir));

        let ad = repo.create(draft("Remote listing")).await.unwrap();
        assert!(matches!(ad.id, AdId::Remote(_)));
        assert!(!dir.path().join("ads.json").exists());
    }

    #[tokio::test]
    async fn create_fallback_propagates_cache_failure() {
        let dir = TempDir::new().unwrap();
        // A regular file where a directory is needed makes the cache unusable;
        // with the remote down there is no third tier, so the error surfaces.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let cache = LocalCache::new(blocker.join("ads.json"));
        let repo = AdRepository::new(DownRemote, cache);
        assert!(repo.create(draft("Doomed listing")).await.is_err());
    }

    #[tokio::test]
    async fn delete_removes_matching_local_record() {
        let dir = TempDir::new().unwrap();
        let repo = AdRepository::new(DownRemote, cache_in(&dir));

        repo.delete_by_id("6").await.unwrap();
        let ads = repo.list_all().await.unwrap();
        assert_eq!(ads.len(), seed::seed_ads().len() - 1);
        assert!(ads.iter().all(|ad| ad.id != AdId::Local(6)));
    }

    #[tokio::test]
    async fn deleting_nonexistent_id_succeeds_and_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let repo = AdRepository::new(DownRemote, cache_in(&dir));

        repo.delete_by_id("999").await.unwrap();
        let ads = repo.list_all().await.unwrap();
        assert_eq!(ads.len(), seed::seed_ads().len());
    }
}
