/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # CMDBuild Client Prelude
//!
//! Brings the client, its configuration, the error type and every service
//! trait into scope, which is all most callers need.
//!
//! ## Usage
//!
//! ```rust
//! use cmdbuild_client::prelude::*;
//!
//! let config = Config::with_credentials("http://server:8080/cmdbuild", "admin", "secret");
//! assert!(config.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the CMDBuild client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, CmdbResult};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// Client implementing every service
pub use crate::application::client::Client;

/// Session handshake
pub use crate::application::auth::{Auth, Session};

/// Low-level transport
pub use crate::model::http::HttpClient;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::card::CardService;
pub use crate::application::interfaces::class::ClassService;
pub use crate::application::interfaces::domain::DomainService;
pub use crate::application::interfaces::lookup::LookupService;
pub use crate::application::interfaces::session::SessionService;

// ============================================================================
// MODELS AND UTILITIES
// ============================================================================

/// Wire models
pub use crate::model::requests::{CardPayload, LoginRequest};
pub use crate::model::responses::{IdResponse, meta_total};

/// Logging setup
pub use crate::utils::logger::setup_logger;
