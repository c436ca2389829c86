//! Reusable Dioxus RSX components for Pika metrics views.

mod aggregation_selector;
mod error_display;
mod panel_header;

pub use aggregation_selector::{
    AggregationSelector, AggregationSelectorProps, SelectorButton, SelectorView,
};
pub use error_display::ErrorDisplay;
pub use panel_header::PanelHeader;
