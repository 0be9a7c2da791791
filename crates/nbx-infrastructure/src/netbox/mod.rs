//! NetBox REST client
//!
//! reqwest implementation of the [`nbx_domain::NetBoxApi`] port.

pub mod client;
pub mod response;

pub use client::{NetBoxClientConfig, NetBoxRestClient};
