//! IANA RDAP bootstrap for autnum queries
//!
//! The bootstrap service file at <https://data.iana.org/rdap/asn.json>
//! maps AS number ranges to the RDAP base URLs of the registries that
//! serve them. This module fetches and parses that file and answers
//! "which base URL serves ASN n".

use serde::Deserialize;

/// Location of the IANA bootstrap service file for autnum queries
pub const IANA_ASN_BOOTSTRAP_URL: &str = "https://data.iana.org/rdap/asn.json";

/// Public RDAP redirector used when the bootstrap registry cannot answer
pub const FALLBACK_RDAP_BASE_URL: &str = "https://rdap.org/";

/// Error type for bootstrap operations
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Fetching the service file failed
    #[error("bootstrap fetch failed: {0}")]
    FetchError(String),

    /// The service file was not valid bootstrap JSON
    #[error("bootstrap parse failed: {0}")]
    ParseError(String),
}

/// Wire format of the IANA service file. Each service entry is a pair of
/// arrays: AS number ranges (`"N"` or `"start-end"`) and base URLs.
#[derive(Debug, Deserialize)]
struct ServiceFile {
    services: Vec<(Vec<String>, Vec<String>)>,
}

/// One contiguous AS number range and the base URL that serves it.
#[derive(Debug, Clone)]
struct ServiceRange {
    start: u64,
    end: u64,
    base_url: String,
}

/// Parsed bootstrap registry: AS number ranges mapped to RDAP base URLs.
#[derive(Debug, Clone, Default)]
pub struct BootstrapRegistry {
    ranges: Vec<ServiceRange>,
}

impl BootstrapRegistry {
    /// Parse the JSON body of the IANA service file.
    ///
    /// Entries with unparseable ranges or no usable URL are skipped;
    /// the file occasionally gains fields and formats we don't consume.
    pub fn from_json(body: &str) -> Result<Self, BootstrapError> {
        let file: ServiceFile =
            serde_json::from_str(body).map_err(|e| BootstrapError::ParseError(e.to_string()))?;

        let mut ranges = Vec::new();
        for (spans, urls) in &file.services {
            let Some(base_url) = pick_base_url(urls) else {
                continue;
            };
            for span in spans {
                if let Some((start, end)) = parse_span(span) {
                    ranges.push(ServiceRange {
                        start,
                        end,
                        base_url: base_url.clone(),
                    });
                }
            }
        }

        Ok(Self { ranges })
    }

    /// Fetch and parse the IANA service file.
    pub async fn fetch(http: &reqwest::Client) -> Result<Self, BootstrapError> {
        let body = http
            .get(IANA_ASN_BOOTSTRAP_URL)
            .send()
            .await
            .map_err(|e| BootstrapError::FetchError(e.to_string()))?
            .error_for_status()
            .map_err(|e| BootstrapError::FetchError(e.to_string()))?
            .text()
            .await
            .map_err(|e| BootstrapError::FetchError(e.to_string()))?;

        Self::from_json(&body)
    }

    /// Base URL of the registry serving `asn`, if any range covers it.
    pub fn base_url_for(&self, asn: u64) -> Option<&str> {
        self.ranges
            .iter()
            .find(|r| r.start <= asn && asn <= r.end)
            .map(|r| r.base_url.as_str())
    }

    /// Number of ranges in the registry
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check whether the registry holds no ranges
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Parse an AS number span: either `"64500"` or `"64500-64510"`.
fn parse_span(span: &str) -> Option<(u64, u64)> {
    let span = span.trim();
    match span.split_once('-') {
        Some((start, end)) => {
            let start = start.trim().parse().ok()?;
            let end = end.trim().parse().ok()?;
            if start > end {
                return None;
            }
            Some((start, end))
        }
        None => {
            let single = span.parse().ok()?;
            Some((single, single))
        }
    }
}

/// Choose a base URL from a service entry, preferring HTTPS, and
/// normalize it to end with a slash so paths can be appended directly.
fn pick_base_url(urls: &[String]) -> Option<String> {
    let chosen = urls
        .iter()
        .find(|u| u.starts_with("https://"))
        .or_else(|| urls.first())?;

    if chosen.ends_with('/') {
        Some(chosen.clone())
    } else {
        Some(format!("{chosen}/"))
    }
}
