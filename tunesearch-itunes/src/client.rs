use std::time::Duration;

#[derive(Debug)]
/// An error that can occur when interacting with the client.
pub enum ClientError {
    /// An error that occurred when making a request, including timeouts.
    ReqwestError(reqwest::Error),
    /// An error that occurred when deserializing a response.
    DeserializationError(serde_json::Error),
    /// The response was valid JSON, but had no `results` field.
    MissingResults,
}
impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::ReqwestError(e) => write!(f, "Reqwest error: {e}"),
            ClientError::DeserializationError(e) => write!(f, "Deserialization error: {e}"),
            ClientError::MissingResults => write!(f, "Response did not contain `results`"),
        }
    }
}
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::ReqwestError(e) => Some(e),
            ClientError::DeserializationError(e) => Some(e),
            ClientError::MissingResults => None,
        }
    }
}
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::ReqwestError(e)
    }
}
impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::DeserializationError(e)
    }
}
/// A result type for the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// A client for the iTunes Search API.
pub struct Client {
    pub(crate) relay_host: String,
    pub(crate) search_url: String,
    pub(crate) client: reqwest::Client,
}
impl Client {
    /// The relay used when none is configured.
    pub const DEFAULT_RELAY_HOST: &str = "corsproxy.io";
    /// The search endpoint the relay forwards to.
    pub const DEFAULT_SEARCH_URL: &str = "https://itunes.apple.com/search";
    /// The upper bound on a single request when none is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a new client. Every request made by it is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        relay_host: impl Into<String>,
        search_url: impl Into<String>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            relay_host: relay_host.into(),
            search_url: search_url.into(),
            client,
        })
    }

    /// The relay host requests are routed through.
    pub fn relay_host(&self) -> &str {
        &self.relay_host
    }

    /// The search endpoint requests are forwarded to.
    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}
