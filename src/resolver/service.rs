//! ASN name resolution service
//!
//! Ties the pieces together: decide whether a lookup is needed at all
//! (private-range AS numbers never are), try the registry query forms in
//! order against an injected [`AutnumQuery`] implementation, and reduce
//! the first structurally usable record to a display name.

use crate::rdap::client::{AutnumQuery, RdapClient, RdapError};
use crate::resolver::extract::extract_name;
use std::sync::Arc;

/// Start of the RFC 6996 private-use AS number block
pub const PRIVATE_ASN_START: i64 = 64512;
/// End of the RFC 6996 private-use AS number block
pub const PRIVATE_ASN_END: i64 = 65535;

/// Error type for ASN name resolution
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The AS number is not positive
    #[error("invalid ASN: {0}")]
    InvalidAsn(i64),

    /// Both query forms failed; carries the last failure seen
    #[error("RDAP lookup failed: {0}")]
    Upstream(#[source] RdapError),
}

/// ASN to organization name resolution service
///
/// # Examples
///
/// ```no_run
/// use asname::resolver::AsnNameResolver;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let resolver = AsnNameResolver::new();
///     let name = resolver.resolve(15169, false).await?;
///     println!("AS15169: {name}");
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AsnNameResolver {
    client: Arc<dyn AutnumQuery>,
}

impl AsnNameResolver {
    /// Create a resolver backed by the default RDAP client
    pub fn new() -> Self {
        Self::with_client(Arc::new(RdapClient::new()))
    }

    /// Create a resolver backed by a specific query implementation
    ///
    /// This is the seam for tests and for embedders that already have an
    /// RDAP transport of their own.
    pub fn with_client(client: Arc<dyn AutnumQuery>) -> Self {
        Self { client }
    }

    /// Resolve one AS number to an organization name.
    ///
    /// Returns `Ok("")` when the registry answered but no name could be
    /// extracted; that is a successful resolution, not an error. When
    /// `verbose` is set, each fetched record is pretty-printed to stdout
    /// before extraction; it never changes the returned name.
    pub async fn resolve(&self, asn: i64, verbose: bool) -> Result<String, ResolveError> {
        if asn <= 0 {
            return Err(ResolveError::InvalidAsn(asn));
        }

        // RFC 6996 private-use block: never registered, never queried.
        if (PRIVATE_ASN_START..=PRIVATE_ASN_END).contains(&asn) {
            return Ok("Private ASN".to_string());
        }

        // Registries disagree about the textual form of an autnum query,
        // so try "AS64500" before "64500", strictly in that order.
        let candidates = [format!("AS{asn}"), asn.to_string()];
        let mut last_error = RdapError::EmptyResponse(format!("AS{asn}"));

        for query in &candidates {
            match self.client.query_autnum(query).await {
                Err(e) => last_error = e,
                Ok(None) => last_error = RdapError::EmptyResponse(query.clone()),
                Ok(Some(record)) => {
                    if verbose {
                        if let Ok(pretty) = serde_json::to_string_pretty(&record) {
                            println!("RDAP autnum for {query}:\n{pretty}");
                        }
                    }
                    // A reachable registry that legitimately has no name
                    // is still a successful resolution; do not fall back
                    // to the other query form.
                    return Ok(extract_name(&record));
                }
            }
        }

        Err(ResolveError::Upstream(last_error))
    }
}

impl Default for AsnNameResolver {
    fn default() -> Self {
        Self::new()
    }
}
