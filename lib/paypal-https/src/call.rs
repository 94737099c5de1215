//! Single-shot HTTPS call execution.

use base64::Engine;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::{Client, connect::HttpConnector};
use hyper_util::rt::TokioExecutor;
use tracing::debug;

use crate::config::{Authorization, CallConfig};
use crate::connector::https_connector;
use crate::{Error, MimeType, Result};

/// Performs one HTTPS request per call and returns the decoded text body.
///
/// Configuration set through the chained setters persists across calls on
/// the same instance; each call opens its own connection and releases it on
/// every exit path. Only statuses 200 and 201 count as success; any other
/// status fails with [`Error::Http`] carrying the code and the response
/// body. No retries, no redirect following, no connection reuse.
///
/// # Example
///
/// ```ignore
/// use paypal_https::{HttpsCall, MimeType};
///
/// let call = HttpsCall::new()
///     .bearer_authorization(access_token)
///     .content_type(MimeType::Json)
///     .accept(MimeType::Json);
///
/// let body = call.post(url, &payment_json).await?;
/// ```
pub struct HttpsCall {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: CallConfig,
}

impl HttpsCall {
    /// Create an executor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CallConfig::default())
    }

    /// Create an executor with custom deadlines.
    #[must_use]
    pub fn with_config(config: CallConfig) -> Self {
        let connector = https_connector(config.connect_timeout);

        // One transient connection per call: nothing is kept idle for reuse.
        let client = Client::builder(TokioExecutor::new())
            .pool_max_idle_per_host(0)
            .build(connector);

        Self { client, config }
    }

    /// Sets the authorization header to `Bearer <token>`.
    ///
    /// Overwrites any prior authorization setting.
    #[must_use]
    pub fn bearer_authorization(mut self, token: impl Into<String>) -> Self {
        self.config.authorization = Some(Authorization::Bearer(token.into()));
        self
    }

    /// Sets the authorization header to `Basic <base64(username:password)>`.
    ///
    /// The credentials must be pre-joined with `:`; they are encoded exactly
    /// as given. Overwrites any prior authorization setting. Short input is
    /// only reported as a debug diagnostic, never rejected.
    #[must_use]
    pub fn user_password_authorization(mut self, username_password: impl Into<String>) -> Self {
        let username_password = username_password.into();
        if tracing::enabled!(tracing::Level::DEBUG) {
            if username_password.len() < 10 {
                debug!(
                    length = username_password.len(),
                    "Authorization credentials look too short"
                );
            }
            debug!(
                "Authorization: Basic {}",
                mask_credentials(&username_password)
            );
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(username_password);
        self.config.authorization = Some(Authorization::Basic(encoded));
        self
    }

    /// Sets the `Accept-Language` header.
    #[must_use]
    pub fn accept_language(mut self, tag: impl Into<String>) -> Self {
        self.config.accept_language = Some(tag.into());
        self
    }

    /// Sets the request `Content-Type` header.
    #[must_use]
    pub fn content_type(mut self, mime: MimeType) -> Self {
        self.config.content_type = Some(mime);
        self
    }

    /// Sets the `Accept` header.
    #[must_use]
    pub fn accept(mut self, mime: MimeType) -> Self {
        self.config.accept = Some(mime);
        self
    }

    /// The executor's configuration.
    #[must_use]
    pub const fn config(&self) -> &CallConfig {
        &self.config
    }

    /// Issues a GET request to `url` (including any query parameters) with
    /// no body and returns the response body text.
    pub async fn get(&self, url: &str) -> Result<String> {
        self.execute(url, http::Method::GET, None).await
    }

    /// Issues a POST request to `url`, writing `body` as the raw request
    /// payload, and returns the response body text.
    pub async fn post(&self, url: &str, body: &str) -> Result<String> {
        let body = Bytes::copy_from_slice(body.as_bytes());
        self.execute(url, http::Method::POST, Some(body)).await
    }

    async fn execute(
        &self,
        url: &str,
        method: http::Method,
        body: Option<Bytes>,
    ) -> Result<String> {
        debug!(%method, url, "calling remote endpoint");
        let url: url::Url = url.parse()?;

        let mut builder = http::Request::builder().method(method).uri(url.as_str());
        if let Some(authorization) = &self.config.authorization {
            builder = builder.header("Authorization", authorization.header_value());
        }
        if let Some(tag) = &self.config.accept_language {
            debug!("Accept-Language: {tag}");
            builder = builder.header("Accept-Language", tag.as_str());
        }
        if let Some(mime) = self.config.content_type {
            debug!("Content-Type: {mime}");
            builder = builder.header("Content-Type", mime.as_str());
        }
        if let Some(mime) = self.config.accept {
            debug!("Accept: {mime}");
            builder = builder.header("Accept", mime.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        let request = builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))?;

        // The deadline covers the whole round trip: a server that sends
        // headers and then stalls mid-body must not block the caller.
        let round_trip = async {
            let response = self
                .client
                .request(request)
                .await
                .map_err(map_transport_error)?;
            let status = response.status().as_u16();
            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| Error::connection(e.to_string()))?
                .to_bytes();
            Ok::<_, Error>((status, body))
        };
        let (status, body) = tokio::time::timeout(self.config.timeout, round_trip)
            .await
            .map_err(|_| Error::Timeout)??;

        if status != 200 && status != 201 {
            // The API reports failures as structured bodies; keep the body
            // attached for diagnostics instead of discarding it.
            return Err(Error::http_with_body(status, "unexpected HTTP status", body));
        }

        // Lenient text read: malformed bytes are replaced, not rejected.
        let text = String::from_utf8_lossy(&body).into_owned();
        debug!(response = %text, "response body");
        Ok(text)
    }
}

impl Default for HttpsCall {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpsCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpsCall")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[allow(clippy::needless_pass_by_value)]
fn map_transport_error(err: hyper_util::client::legacy::Error) -> Error {
    let msg = err.to_string();

    if err.is_connect() {
        return Error::connection(msg);
    }

    if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
        return Error::tls(msg);
    }

    Error::connection(msg)
}

/// First and last three characters of the credentials, for debug logs.
fn mask_credentials(credentials: &str) -> String {
    let length = credentials.chars().count();
    if length < 7 {
        return "***".to_string();
    }
    let head: String = credentials.chars().take(3).collect();
    let tail: String = credentials.chars().skip(length - 3).collect();
    format!("{head}...:...{tail}")
}
