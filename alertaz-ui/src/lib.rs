//! Shared Dioxus components and browser glue for the Alertaz web app.
//!
//! This crate provides:
//! - `storage`: `localStorage`-backed `KeyValueStore`
//! - `state`: project and timezone contexts with their provider components
//! - `js_bridge`: JS interop via `js_sys::eval()` (chat widget host, `Intl` date formatting)
//! - `components`: reusable RSX components (selectors, error/retry box, dates, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod storage;
