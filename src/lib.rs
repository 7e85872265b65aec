/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # CMDBuild Client
//!
//! A thin async client for the CMDBuild REST API (v2).
//!
//! The client authenticates once against `sessions`, keeps the returned
//! session token and sends it in the `CMDBuild-Authorization` header on every
//! subsequent call. Each REST resource (sessions, lookup types, domains,
//! classes, cards) is exposed through a service trait implemented by
//! [`application::client::Client`]. Response bodies are returned as
//! `serde_json::Value`, untouched.
//!
//! ## Example
//! ```ignore
//! use cmdbuild_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.authenticate("http://server:8080/cmdbuild", "admin", "secret").await?;
//!
//! let classes = client.list_classes().await?;
//! let total = client.count_classes().await?;
//! let id = client.insert_card("Employee", r#"{"Description":"test"}"#).await?;
//! ```

/// Application layer: configuration, session handshake, services and client
pub mod application;

/// Constants shared across the crate
pub mod constants;

/// Error types
pub mod error;

/// Transport and wire models
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

/// Re-export of the configuration module under a shorter path
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version information
///
/// # Examples
/// ```
/// let info = cmdbuild_client::version();
/// assert!(info.starts_with("CMDBuild client lib version:"));
/// ```
#[must_use]
pub fn version() -> String {
    format!("CMDBuild client lib version: {VERSION}")
}
