//! Authentication primitives.
//!
//! Sign-in happens at an external identity provider; this service only
//! validates the HS256 access tokens it issues.
//!
//! - [`jwt`] -- JWT access-token validation (and generation, for tooling and tests).

pub mod jwt;
