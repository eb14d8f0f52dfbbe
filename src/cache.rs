//! In-process caching of directory listings

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::debug;

use crate::error::{Error, Result};
use crate::path;
use crate::reader::DirectoryReader;

/// Memoized answers, keyed by forest path
#[derive(Debug)]
struct Memo<V> {
    entries: Arc<Mutex<HashMap<String, V>>>,
}

impl<V: Clone> Memo<V> {
    fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, V>>> {
        self.entries.lock().map_err(|_| Error::LockPoisoned {
            context: "directory listing cache".to_string(),
        })
    }

    fn get_or_compute<F>(&self, key: &str, compute: F) -> Result<V>
    where
        F: FnOnce() -> Result<V>,
    {
        {
            let entries = self.lock()?;
            if let Some(cached) = entries.get(key) {
                return Ok(cached.clone());
            }
        }

        // Not cached; errors are returned without being stored
        let value = compute()?;

        self.lock()?.insert(key.to_string(), value.clone());
        Ok(value)
    }

    fn retain<F: FnMut(&String) -> bool>(&self, mut keep: F) -> Result<()> {
        self.lock()?.retain(|key, _| keep(key));
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }
}

impl<V> Clone for Memo<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

/// Caching wrapper around any [`DirectoryReader`]
///
/// Listings and existence checks are kept until explicitly invalidated.
/// Clones share the same cache.
#[derive(Debug, Clone)]
pub struct CachedReader<R> {
    inner: R,
    listings: Memo<Vec<String>>,
    existence: Memo<bool>,
}

impl<R: DirectoryReader> CachedReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            listings: Memo::new(),
            existence: Memo::new(),
        }
    }

    /// The wrapped reader
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Forget everything known about `target` and below it.
    ///
    /// The parent listing is dropped as well, since `target` may have
    /// appeared in or vanished from it.
    pub fn invalidate(&self, target: &str) -> Result<()> {
        let parent = path::parents(target).into_iter().next().unwrap_or_default();
        debug!("Invalidating cached listings for {}", target);
        self.listings
            .retain(|key| !path::is_same_or_nested(key, target) && *key != parent)?;
        self.existence
            .retain(|key| !path::is_same_or_nested(key, target))
    }

    /// Drop all cached entries
    pub fn clear(&self) -> Result<()> {
        self.listings.retain(|_| false)?;
        self.existence.retain(|_| false)
    }

    /// Number of cached listings and existence checks
    pub fn len(&self) -> Result<usize> {
        Ok(self.listings.len()? + self.existence.len()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<R: DirectoryReader> DirectoryReader for CachedReader<R> {
    fn read(&self, path: &str) -> Result<Vec<String>> {
        self.listings.get_or_compute(path, || self.inner.read(path))
    }

    fn exists(&self, path: &str) -> Result<bool> {
        self.existence.get_or_compute(path, || self.inner.exists(path))
    }
}
