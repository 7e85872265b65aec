use crate::application::auth::Session;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the session resource
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Opens a session and stores its token for every later call
    ///
    /// # Arguments
    /// * `url` - Base URL of the CMDBuild web application, e.g. `http://server:8080/cmdbuild`
    /// * `username` - User to authenticate as
    /// * `password` - Password of that user
    ///
    /// # Returns
    /// * `Err(AppError::Configuration)` - If any parameter is empty; nothing is sent
    /// * `Err(AppError::Authentication)` - If the server rejects the credentials
    async fn authenticate(
        &self,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, AppError>;

    /// Opens a session with the credentials from the configuration
    async fn login(&self) -> Result<Session, AppError>;

    /// Gets the server-side description of the current session
    async fn get_session_info(&self) -> Result<Value, AppError>;

    /// Closes the current session on the server and forgets the token
    async fn logout(&self) -> Result<(), AppError>;
}
