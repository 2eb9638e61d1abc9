//! RDAP autnum query client
//!
//! The [`AutnumQuery`] trait is the seam between the name resolver and
//! the RDAP transport; the resolver never depends on the concrete client,
//! which keeps it testable with canned records. [`RdapClient`] is the
//! real implementation: IANA bootstrap to locate the serving registry,
//! then an HTTPS GET with a bounded timeout.

use super::bootstrap::{BootstrapRegistry, FALLBACK_RDAP_BASE_URL};
use super::record::AutnumRecord;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Default per-request timeout for RDAP queries
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(6);

/// Error type for RDAP query operations
#[derive(Debug, thiserror::Error)]
pub enum RdapError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request timed out
    #[error("RDAP request timed out")]
    Timeout,

    /// The server answered with a non-success HTTP status
    #[error("RDAP server returned HTTP {status} for {query}")]
    HttpStatus {
        /// HTTP status code of the response
        status: u16,
        /// The autnum query that produced it
        query: String,
    },

    /// The query string does not contain an AS number
    #[error("invalid autnum query: {0}")]
    InvalidQuery(String),

    /// The response body was not a valid autnum document
    #[error("failed to parse RDAP response for {query}: {message}")]
    ParseError {
        /// The autnum query that produced it
        query: String,
        /// Underlying parse failure
        message: String,
    },

    /// The server answered with a null autnum document
    #[error("empty RDAP autnum response for {0}")]
    EmptyResponse(String),
}

/// Capability to query an RDAP autnum record by query string.
///
/// Implementations own endpoint resolution and transport entirely; the
/// resolver only sees the structural outcome. `Ok(None)` means the server
/// answered with a null document, which callers treat as a failed
/// candidate rather than a record without a name.
#[async_trait]
pub trait AutnumQuery: Send + Sync {
    /// Query one autnum record, e.g. for `"AS64500"` or `"64500"`.
    async fn query_autnum(&self, query: &str) -> Result<Option<AutnumRecord>, RdapError>;
}

/// HTTPS RDAP client with IANA bootstrap endpoint resolution.
///
/// The bootstrap service file is fetched at most once per client; when
/// that fetch fails or no range covers the queried ASN, the public
/// `rdap.org` redirector is used instead so a stale or unreachable
/// bootstrap never blocks a lookup on its own.
#[derive(Debug)]
pub struct RdapClient {
    timeout: Duration,
    registry: OnceCell<BootstrapRegistry>,
}

impl RdapClient {
    /// Create a client with the default query timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_QUERY_TIMEOUT)
    }

    /// Create a client with a specific per-request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            registry: OnceCell::new(),
        }
    }

    /// RDAP base URL of the registry serving `asn`.
    async fn base_url_for(&self, http: &reqwest::Client, asn: u64) -> String {
        match self
            .registry
            .get_or_try_init(|| BootstrapRegistry::fetch(http))
            .await
        {
            Ok(registry) => registry
                .base_url_for(asn)
                .unwrap_or(FALLBACK_RDAP_BASE_URL)
                .to_string(),
            Err(_) => FALLBACK_RDAP_BASE_URL.to_string(),
        }
    }
}

impl Default for RdapClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AutnumQuery for RdapClient {
    async fn query_autnum(&self, query: &str) -> Result<Option<AutnumRecord>, RdapError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| RdapError::HttpError(e.to_string()))?;

        let asn = autnum_number(query)?;
        let base = self.base_url_for(&http, asn).await;

        // The query text goes into the path verbatim: registries differ on
        // whether they expect "AS64500" or "64500", which is exactly why
        // the resolver tries both forms.
        let url = format!("{base}autnum/{query}", query = query.trim());

        let response = http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/rdap+json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RdapError::Timeout
                } else {
                    RdapError::HttpError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RdapError::HttpStatus {
                status: status.as_u16(),
                query: query.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                RdapError::Timeout
            } else {
                RdapError::HttpError(e.to_string())
            }
        })?;

        serde_json::from_str(&body).map_err(|e| RdapError::ParseError {
            query: query.to_string(),
            message: e.to_string(),
        })
    }
}

/// Extract the AS number from a query string, tolerating an `AS` prefix
/// in any case.
fn autnum_number(query: &str) -> Result<u64, RdapError> {
    let trimmed = query.trim();
    let digits = match trimmed.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("as") => &trimmed[2..],
        _ => trimmed,
    };

    digits
        .parse()
        .map_err(|_| RdapError::InvalidQuery(query.to_string()))
}
