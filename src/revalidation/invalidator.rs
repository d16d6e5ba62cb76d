//! Cache invalidation primitives.
//!
//! The render layer exposes two opaque operations: mark one path stale, or
//! mark every render carrying a logical tag stale. [`CacheInvalidator`]
//! abstracts them so the coordinator can run against the real HTTP endpoint
//! in production and a recording double in tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvalidateError {
    #[error("revalidation endpoint rejected `{target}` with status {status}")]
    Rejected { target: String, status: u16 },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Mark a single rendered path as stale.
    async fn invalidate_path(&self, path: &str) -> Result<(), InvalidateError>;

    /// Mark every cached render associated with a logical tag as stale.
    async fn invalidate_tag(&self, tag: &str) -> Result<(), InvalidateError>;
}

#[derive(Serialize)]
struct PathBody<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct TagBody<'a> {
    tag: &'a str,
}

/// Invalidator backed by the render layer's revalidation endpoint.
pub struct HttpCacheInvalidator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCacheInvalidator {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    async fn post<B: Serialize + Sync>(
        &self,
        body: &B,
        target: &str,
    ) -> Result<(), InvalidateError> {
        let response = self.client.post(&self.endpoint).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InvalidateError::Rejected {
                target: target.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CacheInvalidator for HttpCacheInvalidator {
    async fn invalidate_path(&self, path: &str) -> Result<(), InvalidateError> {
        self.post(&PathBody { path }, path).await
    }

    async fn invalidate_tag(&self, tag: &str) -> Result<(), InvalidateError> {
        self.post(&TagBody { tag }, tag).await
    }
}

/// Test double that records every invalidation it receives.
///
/// Targets listed via [`RecordingInvalidator::fail_path`] return an error
/// while still being recorded, which lets tests assert the coordinator's
/// best-effort behavior.
#[derive(Default)]
pub struct RecordingInvalidator {
    paths: Mutex<Vec<String>>,
    tags: Mutex<Vec<String>>,
    failing_paths: Mutex<Vec<String>>,
}

impl RecordingInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent invalidations of `path` fail.
    pub fn fail_path(&self, path: &str) {
        lock(&self.failing_paths).push(path.to_string());
    }

    pub fn paths(&self) -> Vec<String> {
        lock(&self.paths).clone()
    }

    pub fn tags(&self) -> Vec<String> {
        lock(&self.tags).clone()
    }
}

#[async_trait]
impl CacheInvalidator for RecordingInvalidator {
    async fn invalidate_path(&self, path: &str) -> Result<(), InvalidateError> {
        lock(&self.paths).push(path.to_string());
        if lock(&self.failing_paths).iter().any(|p| p == path) {
            return Err(InvalidateError::Rejected {
                target: path.to_string(),
                status: 500,
            });
        }
        Ok(())
    }

    async fn invalidate_tag(&self, tag: &str) -> Result<(), InvalidateError> {
        lock(&self.tags).push(tag.to_string());
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
