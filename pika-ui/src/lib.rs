//! Shared Dioxus components for the Pika metrics views.
//!
//! This crate provides:
//! - `metrics`: the aggregation kinds a metrics chart can be reduced by
//! - `classes`: conditional class-string merging
//! - `theme`: light/dark variants and their class palettes
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (aggregation selector, headers, errors)

pub mod classes;
pub mod components;
pub mod error;
pub mod metrics;
pub mod state;
pub mod theme;
