//! Core types and client-side state for the Alertaz front-end.
//!
//! Everything here is plain Rust with no browser dependency, so the
//! caches and state machines can be exercised natively in tests:
//! - `storage`: key-value store trait plus an in-memory store
//! - `selection`: the selected-project cache and its credential hand-off
//! - `timezone`: the two-phase timezone preference store
//! - `template`: Unicode detection, `{{variable}}` extraction, SMS segments
//! - `resource`: loading/success/error state machine for fetched pages
//! - `widget`: chat widget command contract and adapter
//! - `api` (feature `api`): reqwest client for the backend REST API

pub mod config;
pub mod credentials;
pub mod error;
pub mod locale;
pub mod market;
pub mod message;
pub mod project;
pub mod resource;
pub mod selection;
pub mod storage;
pub mod template;
pub mod timezone;
pub mod widget;

#[cfg(feature = "api")]
pub mod api;
