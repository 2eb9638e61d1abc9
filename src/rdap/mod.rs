//! RDAP (Registration Data Access Protocol) autnum client

pub mod bootstrap;
pub mod client;
pub mod record;

pub use bootstrap::BootstrapRegistry;
pub use client::{AutnumQuery, RdapClient, RdapError};
pub use record::{AutnumRecord, Entity, Property, Remark, VCard};
