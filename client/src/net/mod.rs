//! Companion-server HTTP client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The companion is the identity collaborator: it owns true session state,
//! account creation, and the flat user store. All calls are same-origin and
//! cookie-credentialed, and exist only in browser builds.

#[cfg(feature = "hydrate")]
pub mod api;
