/// Path prefix of the CMDBuild REST API v2, relative to the server base URL
pub const REST_API_PREFIX: &str = "services/rest/v2";
/// Header carrying the session token on authenticated requests
pub const AUTH_HEADER: &str = "CMDBuild-Authorization";
/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Accept header sent with every request
pub const ACCEPT_ANY: &str = "*/*";
/// User agent string used in HTTP requests to identify this client to the CMDBuild server
pub const USER_AGENT: &str = concat!("cmdbuild-client/", env!("CARGO_PKG_VERSION"));
/// Default request timeout in seconds if not specified in environment
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default CMDBuild base URL if not specified in environment
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/cmdbuild";
