//! asname - resolve Autonomous System Numbers to organization names
//!
//! This library queries the RDAP ecosystem for autnum records and
//! reduces each arbitrarily-shaped registry document to a single
//! best-effort, display-safe organization name.

pub mod rdap;
pub mod resolver;

// Re-export core types for library users
pub use rdap::{AutnumQuery, AutnumRecord, RdapClient, RdapError};
pub use resolver::{extract_name, shorten_name, AsnNameResolver, ResolveError};
