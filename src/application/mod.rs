//! Application services layer.

pub mod admin;
pub mod error;
pub mod newsletter;
pub mod repos;
