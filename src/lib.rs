//! Opportunities API - backend for the personalized work discovery platform
//!
//! Serves a welcome message, a liveness probe and the opportunity listing
//! over HTTP, with a cross-origin policy for the trusted front-end.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};

/// Human-readable service title
pub const SERVICE_TITLE: &str = "Opportunities API";

/// Short description of the service
pub const SERVICE_DESCRIPTION: &str = "Personalized Work Discovery Platform API";

/// Identifier reported by the health endpoint
pub const SERVICE_NAME: &str = "opportunities-api";

/// Crate version
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
