//! Atelier, the backend for a server-rendered artist portfolio.
//!
//! The public site (home, bio, per-art-type indexes, collection and artwork
//! pages) is rendered and cached by an external layer. This crate owns the
//! content mutations behind the admin panel and the **revalidation** subsystem
//! that keeps the rendered cache consistent with those mutations across every
//! configured locale.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod revalidation;
