//! Shared Dioxus components and OpenLayers bridge for the reservoir dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the OpenLayers map via `js_sys::eval()`
//! - `view`: the two-phase camera flight and its completion join
//! - `fetch`: a `web_sys` fetch wrapper with the typed error taxonomy
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: the sidebar, popup, chart panel, and status widgets

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
pub mod view;
