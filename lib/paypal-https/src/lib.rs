//! Minimal HTTPS request helper for the PayPal REST API.
//!
//! Two components, consumed leaf-first:
//! - [`ParamBuilder`] assembles form-encoded query/body strings.
//! - [`HttpsCall`] performs a single authenticated GET or POST and returns
//!   the response body text or a classified [`Error`].
//!
//! Response bodies are returned as raw text; decoding JSON/XML structure is
//! the caller's responsibility.
//!
//! # Example
//!
//! ```ignore
//! use paypal_https::{HttpsCall, MimeType, PaymentListFilter, SortBy};
//!
//! let url = PaymentListFilter::new()
//!     .count(10)?
//!     .sort_by(SortBy::CreateTime)
//!     .create_url("https://api.sandbox.paypal.com/v1/payments/payment");
//!
//! let call = HttpsCall::new()
//!     .bearer_authorization(access_token)
//!     .accept(MimeType::Json);
//!
//! let body = call.get(&url).await?;
//! ```

mod call;
mod config;
mod connector;
mod error;
mod filter;
mod mime;
mod params;

pub use call::HttpsCall;
pub use config::{Authorization, CallConfig};
pub use error::{Error, Result};
pub use filter::{PaymentListFilter, SortBy, SortOrder};
pub use mime::MimeType;
pub use params::ParamBuilder;
