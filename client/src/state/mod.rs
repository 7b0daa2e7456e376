//! Shared client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Separating session state (`auth`) from wizard state (`registration`,
//! `wizard`) keeps the route guard independent of sign-up progress: the only
//! coupling is that a successful registration eventually changes the auth
//! state the guard observes.

pub mod auth;
pub mod registration;
pub mod wizard;
