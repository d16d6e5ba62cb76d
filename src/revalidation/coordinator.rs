//! Revalidation coordinator.
//!
//! Executes revalidation plans against the cache invalidator. Runs strictly
//! after the data write commits; a reader may briefly observe stale renders
//! until the pass completes. That eventual-consistency window is accepted.

use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use tracing::{debug, info, instrument, warn};

use crate::domain::types::ArtType;

use super::config::RevalidationConfig;
use super::invalidator::CacheInvalidator;
use super::planner::RevalidationPlan;
use super::request::RevalidationRequest;

pub(crate) const METRIC_REVALIDATION_RUN_MS: &str = "atelier_revalidation_run_ms";
pub(crate) const METRIC_REVALIDATION_PATHS_TOTAL: &str = "atelier_revalidation_paths_total";
pub(crate) const METRIC_REVALIDATION_FAILED_TOTAL: &str = "atelier_revalidation_failed_total";

/// Executes cache invalidation for content mutations.
///
/// # Usage
///
/// ```ignore
/// // After a successful artwork update:
/// coordinator
///     .run(RevalidationRequest::artwork(art_type, &slug, collection.as_deref())
///         .with_previous(old_slug.as_deref(), old_collection.as_deref()))
///     .await;
/// ```
///
/// Invalidation is best-effort: failures are logged and counted but never
/// returned. Only the data mutation's own errors reach the caller, and by
/// the time this runs the mutation has already committed.
pub struct RevalidationCoordinator {
    config: RevalidationConfig,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl RevalidationCoordinator {
    pub fn new(config: RevalidationConfig, invalidator: Arc<dyn CacheInvalidator>) -> Self {
        Self {
            config,
            invalidator,
        }
    }

    pub fn config(&self) -> &RevalidationConfig {
        &self.config
    }

    /// Plan and execute invalidation for one mutation.
    #[instrument(skip(self), fields(art_type = request.art_type.as_str()))]
    pub async fn run(&self, request: RevalidationRequest) {
        if !self.config.is_enabled() {
            debug!(?request, "Revalidation skipped: disabled");
            return;
        }

        let plan = RevalidationPlan::from_request(&request, &self.config.locales);
        self.execute(plan).await;
    }

    /// Invalidate every index and chrome path for every locale.
    pub async fn sweep(&self) {
        if !self.config.is_enabled() {
            debug!("Revalidation sweep skipped: disabled");
            return;
        }

        let plan = RevalidationPlan::full_sweep(&self.config.locales);
        self.execute(plan).await;
    }

    /// Convenience wrapper for artwork mutations without identity changes.
    pub async fn artwork_saved(&self, art_type: ArtType, slug: &str, collection: Option<&str>) {
        self.run(RevalidationRequest::artwork(art_type, slug, collection))
            .await;
    }

    /// Convenience wrapper for collection mutations.
    pub async fn collection_saved(&self, art_type: ArtType, collection_slug: &str) {
        self.run(RevalidationRequest::collection(art_type, collection_slug))
            .await;
    }

    async fn execute(&self, plan: RevalidationPlan) {
        let started_at = Instant::now();

        info!(plan = %plan, "Revalidation starting");

        let mut failed: u64 = 0;
        for path in &plan.paths {
            if let Err(error) = self.invalidator.invalidate_path(path).await {
                failed += 1;
                warn!(path = %path, error = %error, "Path invalidation failed");
            }
        }
        for tag in &plan.tags {
            if let Err(error) = self.invalidator.invalidate_tag(tag).await {
                failed += 1;
                warn!(tag = %tag, error = %error, "Tag invalidation failed");
            }
        }

        counter!(METRIC_REVALIDATION_PATHS_TOTAL).increment(plan.paths.len() as u64);
        if failed > 0 {
            counter!(METRIC_REVALIDATION_FAILED_TOTAL).increment(failed);
        }
        histogram!(METRIC_REVALIDATION_RUN_MS)
            .record(started_at.elapsed().as_secs_f64() * 1000.0);

        info!(
            paths = plan.paths.len(),
            tags = plan.tags.len(),
            failed,
            "Revalidation complete"
        );
    }
}
