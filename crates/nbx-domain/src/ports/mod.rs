//! Domain Port Interfaces
//!
//! Boundary contracts implemented outside the domain. The server layer talks
//! to NetBox only through [`NetBoxApi`], which keeps handlers testable
//! against an in-memory double.

/// NetBox REST API port
pub mod netbox;

pub use netbox::{NetBoxApi, SharedNetBoxApi};
