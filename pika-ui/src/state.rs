//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::metrics::AggregationKind;
use crate::theme::Variant;
use dioxus::prelude::*;

/// Shared application state for Pika metrics views.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected aggregation kind
    pub aggregation: Signal<AggregationKind>,
    /// Light or dark rendering
    pub variant: Signal<Variant>,
}

impl AppState {
    /// Create a new AppState starting from the given selection and variant.
    pub fn with_initial(aggregation: AggregationKind, variant: Variant) -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            aggregation: Signal::new(aggregation),
            variant: Signal::new(variant),
        }
    }
}
