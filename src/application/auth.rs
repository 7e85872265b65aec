/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Session handshake for the CMDBuild REST API
//!
//! CMDBuild issues a session token from `POST sessions`; the token is then sent
//! in the `CMDBuild-Authorization` header. Tokens are never refreshed here: an
//! expired token shows up as an HTTP error on the next call.

use crate::application::config::{Config, validate_connection};
use crate::error::AppError;
use crate::model::http::{authenticated_headers, base_headers, make_http_request, rest_url};
use crate::model::requests::LoginRequest;
use crate::model::responses::IdResponse;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Session information for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Base URL the session was opened against
    pub base_url: String,
    /// User the session belongs to
    pub username: String,
    /// Password used to open the session
    pub password: String,
    /// Session token, sent as `CMDBuild-Authorization`
    pub token: String,
    /// When the token was obtained
    pub authenticated_at: DateTime<Utc>,
}

impl Session {
    /// Time elapsed since the token was obtained
    #[must_use]
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.authenticated_at
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("token", &self.token)
            .field("authenticated_at", &self.authenticated_at)
            .finish()
    }
}

/// Authentication manager for the CMDBuild REST API
///
/// Holds at most one [`Session`]. `authenticate` replaces it, `logout` clears it.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new Auth instance sharing an existing HTTP client
    ///
    /// # Arguments
    /// * `config` - Configuration providing default credentials for [`Auth::login`]
    /// * `client` - HTTP client used for the session requests
    pub fn with_client(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the current session
    ///
    /// # Returns
    /// * `Ok(Session)` - The stored session
    /// * `Err(AppError::NotAuthenticated)` - If no session has been established
    pub async fn get_session(&self) -> Result<Session, AppError> {
        let session = self.session.read().await;
        session.clone().ok_or(AppError::NotAuthenticated)
    }

    /// Returns `true` once a session token is stored
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Logs in with the credentials from the configuration
    pub async fn login(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;
        self.authenticate(
            &self.config.rest_api.base_url,
            &credentials.username,
            &credentials.password,
        )
        .await
    }

    /// Opens a session on a CMDBuild server
    ///
    /// # Arguments
    /// * `url` - Base URL of the CMDBuild web application
    /// * `username` - User to authenticate as
    /// * `password` - Password of that user
    ///
    /// # Returns
    /// * `Ok(Session)` - The new session, now stored for subsequent calls
    /// * `Err(AppError::Configuration)` - Empty parameter or malformed URL, nothing sent
    /// * `Err(AppError::Authentication)` - Credentials rejected or no token returned
    pub async fn authenticate(
        &self,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, AppError> {
        validate_connection(url, username, password)?;
        let endpoint = rest_url(url, &["sessions"])?;

        info!("Logging in to {} as {}", url, username);

        let body = serde_json::to_string(&LoginRequest::new(username, password))?;
        let response = match make_http_request(
            &self.client,
            Method::POST,
            endpoint,
            base_headers(),
            Some(body),
        )
        .await
        {
            Ok(response) => response,
            Err(AppError::UnexpectedResponse { status, body }) => {
                error!("Login failed with status {}: {}", status, body);
                return Err(AppError::Authentication {
                    status: Some(status),
                    message: format!("server rejected credentials ({status}): {body}"),
                });
            }
            Err(e) => return Err(e),
        };

        let text = response.text().await?;
        let token = serde_json::from_str::<IdResponse>(&text)
            .ok()
            .and_then(|r| r.id())
            .ok_or_else(|| {
                error!("No session token in login response: {}", text);
                AppError::Authentication {
                    status: None,
                    message: "no session token in response".to_string(),
                }
            })?;

        debug!("Authentication token: {}", token);

        let session = Session {
            base_url: url.trim().to_string(),
            username: username.to_string(),
            password: password.to_string(),
            token,
            authenticated_at: Utc::now(),
        };

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());

        info!("✓ Login successful, user: {}", session.username);
        Ok(session)
    }

    /// Closes the current session
    ///
    /// The local session is cleared before `DELETE sessions/{token}` is sent,
    /// so the client is logged out even if the server call fails.
    pub async fn logout(&self) -> Result<(), AppError> {
        let Some(session) = self.session.write().await.take() else {
            warn!("No active session, nothing to log out");
            return Ok(());
        };

        info!("Logging out {}", session.username);

        let endpoint = rest_url(&session.base_url, &["sessions", session.token.as_str()])?;
        let headers = authenticated_headers(&session);

        make_http_request(&self.client, Method::DELETE, endpoint, headers, None).await?;

        info!("✓ Logged out successfully");
        Ok(())
    }
}
