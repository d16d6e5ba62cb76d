//! Atelier revalidation system.
//!
//! Content mutations leave statically-rendered pages stale in the external
//! render cache. This module computes, for any mutation, the complete set of
//! public paths whose cached render must be regenerated (across every
//! configured locale, collection nesting, and slug renames) and marks them
//! stale through a [`CacheInvalidator`].
//!
//! The decision logic is pure ([`RevalidationPlan::from_request`]); the side
//! effect lives in [`RevalidationCoordinator`] and is strictly best-effort:
//! a failed invalidation is logged and counted, never surfaced to the
//! mutation caller.
//!
//! ## Configuration
//!
//! ```toml
//! [revalidation]
//! enabled = true
//! endpoint = "http://127.0.0.1:3000/__revalidate"
//!
//! [site]
//! locales = ["en", "pt"]
//! ```

mod config;
pub(crate) mod coordinator;
mod invalidator;
pub mod paths;
mod planner;
mod request;

pub use config::RevalidationConfig;
pub use coordinator::RevalidationCoordinator;
pub use invalidator::{
    CacheInvalidator, HttpCacheInvalidator, InvalidateError, RecordingInvalidator,
};
pub use planner::{RevalidationPlan, TAG_ARTWORKS, TAG_COLLECTIONS};
pub use request::RevalidationRequest;
