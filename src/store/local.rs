use crate::models::Ad;
use crate::store::seed;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{info, warn};

/// Durable fallback store: one JSON document at a fixed path holding the
/// whole ad collection, newest-first.
///
/// Every mutation is read-modify-write over the full document with no
/// isolation. Two overlapping writers will silently clobber each other;
/// the repository assumes a single active writer and this type does not
/// try to lock around that.
pub struct LocalCache {
    path: PathBuf,
}

impl LocalCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored collection. A missing or unparseable file is not an
    /// error: the cache reseeds itself with the fixed bootstrap dataset and
    /// returns that instead.
    pub fn read_all(&self) -> Result<Vec<Ad>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("no local cache at {}, seeding", self.path.display());
                return self.reseed();
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read cache file {}", self.path.display()))
            }
        };

        match serde_json::from_str(&raw) {
            Ok(ads) => Ok(ads),
            Err(err) => {
                warn!(
                    "cache file {} is corrupt ({}), reseeding",
                    self.path.display(),
                    err
                );
                self.reseed()
            }
        }
    }

    /// Replace the stored collection wholesale. There are no partial writes;
    /// callers hand over the complete, already-ordered collection.
    pub fn write_all(&self, ads: &[Ad]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create cache dir {}", dir.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(ads).context("failed to serialize ad collection")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write cache file {}", self.path.display()))?;
        Ok(())
    }

    fn reseed(&self) -> Result<Vec<Ad>> {
        let ads = seed::seed_ads();
        self.write_all(&ads)?;
        Ok(ads)
    }
}
