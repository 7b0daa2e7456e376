//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap the navigable page tree and read shared state from Leptos
//! context providers.

pub mod auth_guard;
