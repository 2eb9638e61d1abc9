//! ASN to organization name resolution

pub mod extract;
pub mod service;

pub use extract::{extract_name, shorten_name};
pub use service::{AsnNameResolver, ResolveError};
