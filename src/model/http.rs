/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::{ACCEPT_ANY, AUTH_HEADER, CONTENT_TYPE_JSON, REST_API_PREFIX, USER_AGENT};
use crate::error::AppError;
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Authenticated transport for the CMDBuild REST API
///
/// Resolves resource paths against the session base URL, attaches the
/// session token and turns non-2xx responses into
/// [`AppError::UnexpectedResponse`]. No retries are attempted.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
}

impl HttpClient {
    /// Creates a new client without performing authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Err(AppError::Network)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = build_http_client(&config)?;
        let auth = Arc::new(Auth::with_client(Arc::new(config), http_client.clone()));
        Ok(Self { auth, http_client })
    }

    /// Creates a new client and logs in with the configured credentials
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        client.auth.login().await?;
        Ok(client)
    }

    /// Makes a GET request and decodes the JSON body
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, AppError> {
        self.request(Method::GET, segments, None::<&()>).await
    }

    /// Makes a POST request with a JSON body and decodes the JSON response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, segments, Some(body)).await
    }

    /// Makes a POST request whose body is an already encoded JSON document
    ///
    /// The text is sent exactly as given.
    pub async fn post_raw<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &str,
    ) -> Result<T, AppError> {
        let response = self
            .request_internal(Method::POST, segments, Some(body.to_owned()))
            .await?;
        parse_response(response).await
    }

    /// Makes a request against `<base>/services/rest/v2/<segments...>`
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError::NotAuthenticated)` - No session yet, nothing was sent
    /// * `Err(AppError::UnexpectedResponse)` - Non-2xx status, with the raw body
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let body = body.map(serde_json::to_string).transpose()?;
        let response = self.request_internal(method, segments, body).await?;
        parse_response(response).await
    }

    async fn request_internal(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<String>,
    ) -> Result<Response, AppError> {
        let session = self.auth.get_session().await?;
        let url = rest_url(&session.base_url, segments)?;
        make_http_request(
            &self.http_client,
            method,
            url,
            authenticated_headers(&session),
            body,
        )
        .await
    }

    /// Gets the current session
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

/// Builds the shared reqwest client with the configured timeout
pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.rest_api.timeout))
        .build()?;
    Ok(client)
}

/// Resolves a REST resource against a CMDBuild base URL
///
/// Each segment is percent-encoded, so identifiers cannot escape their
/// position in the path. A trailing `/` on the base URL is ignored.
///
/// # Example
/// ```
/// use cmdbuild_client::model::http::rest_url;
///
/// let url = rest_url("http://server:8080/cmdbuild/", &["classes", "Employee", "cards"]).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "http://server:8080/cmdbuild/services/rest/v2/classes/Employee/cards"
/// );
/// ```
pub fn rest_url(base_url: &str, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|e| AppError::Configuration(format!("invalid URL '{base_url}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AppError::Configuration(format!("URL '{base_url}' cannot be a base")))?
        .pop_if_empty()
        .extend(REST_API_PREFIX.split('/'))
        .extend(segments);
    Ok(url)
}

/// Headers sent on every request once a session exists
pub(crate) fn authenticated_headers(session: &Session) -> Vec<(&'static str, String)> {
    let mut headers = base_headers();
    headers.push((AUTH_HEADER, session.token.clone()));
    headers
}

/// Headers sent on every request
pub(crate) fn base_headers() -> Vec<(&'static str, String)> {
    vec![
        ("Content-Type", CONTENT_TYPE_JSON.to_string()),
        ("Accept", ACCEPT_ANY.to_string()),
    ]
}

/// Makes a single HTTP request and checks its status
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional JSON document, sent as is
///
/// # Returns
///
/// * `Ok(Response)` - 2xx response, body not yet consumed
/// * `Err(AppError::UnexpectedResponse)` - Any other status, carrying the body text
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: Url,
    headers: Vec<(&str, String)>,
    body: Option<String>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in headers {
        request = request.header(name, value);
    }

    if let Some(b) = body {
        request = request.body(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Could not read body of {} response: {}", status, e);
            String::new()
        }
    };
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::UnexpectedResponse { status, body })
}

/// Decodes a successful response body
pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| AppError::Deserialization(format!("{e}: {text}")))
}
