use crate::models::{Ad, AdDraft};
use crate::store::traits::RemoteAds;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// How long to wait on the remote API before treating a call as failed.
/// Without this a hung connection would delay the local fallback forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the remote ad collection. Stateless; every failure signal
/// is either a transport error or a non-2xx status.
pub struct RemoteStore {
    client: Client,
    base_url: String,
}

impl RemoteStore {
    /// Create a client for an API root such as `http://localhost:3001/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl RemoteAds for RemoteStore {
    async fn list(&self) -> Result<Vec<Ad>> {
        let url = self.url("ads");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch ad list")?;

        if !response.status().is_success() {
            anyhow::bail!("ad list request returned {}", response.status());
        }

        response.json().await.context("Failed to parse ad list")
    }

    async fn list_category(&self, category: &str) -> Result<Vec<Ad>> {
        let url = self.url(&format!("ads/category/{}", category));
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch category list")?;

        if !response.status().is_success() {
            anyhow::bail!("category list request returned {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse category list")
    }

    async fn get(&self, id: &str) -> Result<Option<Ad>> {
        let url = self.url(&format!("ads/{}", id));
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch ad")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!("ad fetch returned {}", response.status());
        }

        let ad = response.json().await.context("Failed to parse ad")?;
        Ok(Some(ad))
    }

    async fn create(&self, draft: &AdDraft) -> Result<Ad> {
        let url = self.url("ads");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .context("Failed to post ad")?;

        if !response.status().is_success() {
            anyhow::bail!("ad create returned {}", response.status());
        }

        response.json().await.context("Failed to parse created ad")
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("ads/{}", id));
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to delete ad")?;

        if !response.status().is_success() {
            anyhow::bail!("ad delete returned {}", response.status());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let store = RemoteStore::new("http://localhost:3001/api/").unwrap();
        assert_eq!(store.url("ads"), "http://localhost:3001/api/ads");
        assert_eq!(store.url("ads/42"), "http://localhost:3001/api/ads/42");
    }
}
