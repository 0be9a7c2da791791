//! # NetBox MCP Domain
//!
//! Core types shared by every layer of the gateway:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`object_types`] | Registry of NetBox object types and their API endpoints |
//! | [`filters`] | Validation of filter keys passed to list queries |
//! | [`query`] | Shaping tool parameters into URL query pairs |
//! | [`ports`] | Boundary contract implemented by the REST client |
//!
//! The domain owns no state. Entities (sites, devices, VLANs...) belong to
//! NetBox; this crate only knows how to address them.

pub mod constants;
pub mod error;
pub mod filters;
pub mod object_types;
pub mod ports;
pub mod query;

pub use error::{Error, Result};
pub use object_types::ObjectType;
pub use ports::NetBoxApi;
pub use query::{ObjectQuery, Ordering, QueryParams};
