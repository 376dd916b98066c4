//! Client library for a private certificate authority management service.
//!
//! The service manages certificate authorities grouped into CA pools, the
//! certificates they issue, their revocation lists, and reusable certificate
//! templates. This crate provides typed request/response descriptors, the
//! resource-name helpers for the service's hierarchy, transparent pagination
//! over list RPCs, and an async client over a pluggable transport.

pub mod config;
pub mod error;
pub mod model;
pub mod paging;
pub mod path;
pub mod services;
pub mod transport;
pub mod validation;

pub use config::{ClientOptions, DEFAULT_ENDPOINT};
pub use error::Error;
pub use services::CertificateAuthorityClient;
