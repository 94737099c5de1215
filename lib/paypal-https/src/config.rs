//! Per-executor call configuration.

use std::time::Duration;

use crate::MimeType;

/// Authorization credential attached to outgoing requests.
///
/// At most one credential is held per executor; the setters on
/// [`crate::HttpsCall`] overwrite each other, last write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// `Authorization: Bearer <token>`.
    Bearer(String),
    /// `Authorization: Basic <credentials>`, already base64-encoded.
    Basic(String),
}

impl Authorization {
    /// Renders the `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Bearer(token) => format!("Bearer {token}"),
            Self::Basic(encoded) => format!("Basic {encoded}"),
        }
    }
}

/// Configuration owned by one [`crate::HttpsCall`] instance.
///
/// Header fields are absent by default and omitted from the request
/// entirely while unset. The deadlines bound every call; they exist so a
/// dead remote cannot block the caller forever.
#[derive(Debug, Clone)]
pub struct CallConfig {
    /// Authorization credential, if any.
    pub authorization: Option<Authorization>,
    /// `Accept-Language` tag, if any.
    pub accept_language: Option<String>,
    /// Request `Content-Type`, if any.
    pub content_type: Option<MimeType>,
    /// Response `Accept`, if any.
    pub accept: Option<MimeType>,
    /// Full request deadline.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            authorization: None,
            accept_language: None,
            content_type: None,
            accept: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}
