//! Revalidation plan generation.
//!
//! Turns one mutation's before/after coordinates into the complete, ordered
//! set of stale paths plus the coarse fallback tags.

use std::collections::HashSet;
use std::fmt;

use crate::domain::locale::Locale;
use crate::domain::types::ArtType;

use super::paths;
use super::request::RevalidationRequest;

/// Logical tag covering every cached artwork render.
pub const TAG_ARTWORKS: &str = "artworks";
/// Logical tag covering every cached collection render.
pub const TAG_COLLECTIONS: &str = "collections";

/// Paths and tags to invalidate for one mutation.
///
/// The plan is a pure function of its inputs: paths appear in locale order
/// (the configured order), first occurrence wins, duplicates are dropped.
/// Determinism matters only for testability; invalidation itself is
/// order-independent and idempotent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RevalidationPlan {
    pub paths: Vec<String>,
    pub tags: Vec<&'static str>,
}

impl fmt::Display for RevalidationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RevalidationPlan {{ paths: {}, tags: {} }}",
            self.paths.len(),
            self.tags.len(),
        )
    }
}

impl RevalidationPlan {
    /// Compute the stale set for a single mutation.
    ///
    /// Per locale, in configured order:
    /// 1. home, bio, and the admin listing pages (the home page may surface
    ///    featured items of any type, and admin lists always reflect current
    ///    state);
    /// 2. the art-type index for the mutated type;
    /// 3. the current collection page and/or item page;
    /// 4. when the item left a collection, the old collection page, plus the
    ///    old nested item page when the old slug is known;
    /// 5. otherwise, on a pure rename, the old path under the current parent.
    ///
    /// After the locale loop, both coarse tags are always included.
    pub fn from_request(request: &RevalidationRequest, locales: &[Locale]) -> Self {
        let mut plan = Self::default();
        let mut seen = HashSet::new();

        for locale in locales {
            plan.push(&mut seen, paths::home(locale));
            plan.push(&mut seen, paths::bio(locale));
            plan.push(&mut seen, paths::admin_dashboard(locale));
            plan.push(&mut seen, paths::admin_artworks(locale));
            plan.push(&mut seen, paths::admin_collections(locale));

            let art_type = request.art_type;
            plan.push(&mut seen, paths::content(locale, art_type, None, None));

            // Current coordinates.
            if let Some(collection) = request.collection_slug.as_deref() {
                plan.push(
                    &mut seen,
                    paths::content(locale, art_type, Some(collection), None),
                );
                if let Some(slug) = request.slug.as_deref() {
                    plan.push(
                        &mut seen,
                        paths::content(locale, art_type, Some(collection), Some(slug)),
                    );
                }
            } else if let Some(slug) = request.slug.as_deref() {
                plan.push(&mut seen, paths::content(locale, art_type, None, Some(slug)));
            }

            // Previous coordinates.
            if let Some(old_collection) = request.old_collection_slug.as_deref() {
                plan.push(
                    &mut seen,
                    paths::content(locale, art_type, Some(old_collection), None),
                );
                if let Some(old_slug) = request.old_slug.as_deref() {
                    plan.push(
                        &mut seen,
                        paths::content(locale, art_type, Some(old_collection), Some(old_slug)),
                    );
                }
            } else if let Some(old_slug) = request.old_slug.as_deref() {
                // Pure rename under the same parent. Skip when the slug did
                // not actually change.
                if request.slug.as_deref() != Some(old_slug) {
                    plan.push(
                        &mut seen,
                        paths::content(
                            locale,
                            art_type,
                            request.collection_slug.as_deref(),
                            Some(old_slug),
                        ),
                    );
                }
            }
        }

        plan.tags = vec![TAG_ARTWORKS, TAG_COLLECTIONS];
        plan
    }

    /// The full sweep: every always-invalidated path and every art-type index
    /// for every locale, plus both tags. Used by the `revalidate` subcommand
    /// after out-of-band data changes.
    pub fn full_sweep(locales: &[Locale]) -> Self {
        let mut plan = Self::default();
        let mut seen = HashSet::new();

        for locale in locales {
            plan.push(&mut seen, paths::home(locale));
            plan.push(&mut seen, paths::bio(locale));
            plan.push(&mut seen, paths::admin_dashboard(locale));
            plan.push(&mut seen, paths::admin_artworks(locale));
            plan.push(&mut seen, paths::admin_collections(locale));
            for art_type in ArtType::ALL {
                plan.push(&mut seen, paths::content(locale, art_type, None, None));
            }
        }

        plan.tags = vec![TAG_ARTWORKS, TAG_COLLECTIONS];
        plan
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.tags.is_empty()
    }

    fn push(&mut self, seen: &mut HashSet<String>, path: String) {
        if seen.insert(path.clone()) {
            self.paths.push(path);
        }
    }
}
