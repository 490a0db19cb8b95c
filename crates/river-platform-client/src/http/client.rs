/*
[INPUT]:  Base URL, account id, API key, client configuration, cancellation context
[OUTPUT]: Configured reqwest client and the request/response pipeline
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, Url, redirect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::config::PlatformConfig;
use crate::http::credential::Credential;
use crate::http::response;
use crate::http::{PlatformError, Result};

/// Media type sent in both `Content-Type` and `Accept`
const JSON_MEDIA_TYPE: &str = "application/json; charset-utf-8";

/// Timeout applied to every call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Redirect hops followed by default
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// What the transport does with a 3xx response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Follow up to `max` hops before failing
    Follow { max: usize },
    /// Hand the 3xx response to interpretation, where it counts as success
    None,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        RedirectPolicy::Follow {
            max: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub redirect: RedirectPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            redirect: RedirectPolicy::default(),
        }
    }
}

/// Cancellation context shared by every call of a client.
///
/// Cancelling the token aborts in-flight calls; once cancelled or past the
/// deadline, new calls fail before any I/O.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Cancellation {
    /// A context that is never cancelled
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Error if the context is already done
    pub fn check(&self) -> Result<()> {
        if self.token.is_cancelled() {
            return Err(PlatformError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(PlatformError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Resolve once the context is done, with the matching error
    async fn done(&self) -> PlatformError {
        match self.deadline {
            Some(deadline) => tokio::select! {
                _ = self.token.cancelled() => PlatformError::Cancelled,
                _ = tokio::time::sleep_until(deadline) => PlatformError::DeadlineExceeded,
            },
            None => {
                self.token.cancelled().await;
                PlatformError::Cancelled
            }
        }
    }
}

/// Main HTTP client for the River Platform API
///
/// Holds no per-call state; clone it or share a reference across tasks.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http_client: Client,
    base_url: String,
    account_id: String,
    credential: Credential,
    cancellation: Cancellation,
}

impl PlatformClient {
    /// Create a new client with default configuration and a context that is
    /// never cancelled
    pub fn new(
        base_url: impl Into<String>,
        account_id: impl Into<String>,
        api_key: &str,
    ) -> Result<Self> {
        Self::with_config(base_url, account_id, api_key, ClientConfig::default(), None)
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        base_url: impl Into<String>,
        account_id: impl Into<String>,
        api_key: &str,
        config: ClientConfig,
        cancellation: Option<Cancellation>,
    ) -> Result<Self> {
        let redirect = match config.redirect {
            RedirectPolicy::Follow { max } => redirect::Policy::limited(max),
            RedirectPolicy::None => redirect::Policy::none(),
        };
        let http_client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect)
            .build()?;

        let base_url = base_url.into();
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            account_id: account_id.into(),
            credential: Credential::from_api_key(api_key),
            cancellation: cancellation.unwrap_or_default(),
        })
    }

    /// Create a client from loaded environment configuration
    pub fn from_config(config: &PlatformConfig, cancellation: Option<Cancellation>) -> Result<Self> {
        Self::with_config(
            config.base_url.as_str(),
            config.account_id.as_str(),
            &config.api_key,
            ClientConfig::default(),
            cancellation,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn cancellation(&self) -> &Cancellation {
        &self.cancellation
    }

    /// Path under the configured account: `/accounts/{account_id}{suffix}`
    pub(crate) fn account_path(&self, suffix: &str) -> String {
        format!("/accounts/{}{}", self.account_id, suffix)
    }

    /// Build full URL for an API path
    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Build full URL for an API path followed by one caller-supplied
    /// segment, percent-encoded so it cannot leave the path
    fn url_with_segment(&self, path: &str, segment: &str) -> Result<Url> {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(PlatformError::InvalidPathSegment(segment.to_string()));
        }
        let mut url = self.url(path)?;
        url.path_segments_mut()
            .map_err(|_| PlatformError::UrlParse(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(segment);
        Ok(url)
    }

    /// Build an authenticated request without a body
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        Ok(self.authenticated(method, url))
    }

    /// Build an authenticated request for `{path}/{segment}`
    pub(crate) fn request_with_segment(
        &self,
        method: Method,
        path: &str,
        segment: &str,
    ) -> Result<RequestBuilder> {
        let url = self.url_with_segment(path, segment)?;
        Ok(self.authenticated(method, url))
    }

    fn authenticated(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(AUTHORIZATION, self.credential.header_value())
    }

    /// Build an authenticated request carrying a JSON body
    pub(crate) fn request_with_body<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<RequestBuilder> {
        let payload = serde_json::to_vec(body).map_err(|err| {
            error!(path, error = %err, "failed to encode request body");
            PlatformError::Encode(err)
        })?;
        Ok(self.request(method, path)?.body(payload))
    }

    /// Send a request and decode the success payload into `T`
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let (status, body) = self.execute(builder).await?;
        response::interpret(status, &body)
    }

    /// Send a request whose success carries no payload
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        let (status, body) = self.execute(builder).await?;
        response::check_status(status, &body)
    }

    /// Run one round trip and read the whole body
    async fn execute(&self, builder: RequestBuilder) -> Result<(u16, Vec<u8>)> {
        let response = self.dispatch(builder).await?;
        let status = response.status().as_u16();

        let body = tokio::select! {
            biased;
            err = self.cancellation.done() => {
                error!(error = %err, "context done while reading response body");
                return Err(err);
            }
            body = response.bytes() => body,
        };

        match body {
            Ok(body) => Ok((status, body.to_vec())),
            Err(err) => match response::unreadable_body(status) {
                Some(malformed) => {
                    warn!(status, error = %err, "failed to read error response body");
                    Err(malformed)
                }
                None => Err(self.transport_error(err)),
            },
        }
    }

    /// Send the request, racing it against the cancellation context
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response> {
        if let Err(err) = self.cancellation.check() {
            error!(error = %err, "context done before request was sent");
            return Err(err);
        }

        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending request");

        let result = tokio::select! {
            biased;
            err = self.cancellation.done() => {
                error!(%method, %url, error = %err, "context done while awaiting response");
                return Err(err);
            }
            result = self.http_client.execute(request) => result,
        };

        match result {
            Ok(response) => {
                info!(%method, %url, status = response.status().as_u16(), "request completed");
                Ok(response)
            }
            Err(err) => Err(self.transport_error(err)),
        }
    }

    /// Prefer the context's error over the raw transport failure
    fn transport_error(&self, err: reqwest::Error) -> PlatformError {
        if let Err(ctx_err) = self.cancellation.check() {
            error!(error = %ctx_err, "context expired");
            return ctx_err;
        }
        error!(error = %err, "transport failure");
        PlatformError::Transport(err)
    }
}
