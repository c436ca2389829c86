//! Error display component.

use crate::theme::Variant;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default)]
    pub variant: Variant,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let style = if props.variant.is_dark() {
        "padding: 12px 16px; margin: 8px 0; background: #3b0d0d; color: #fca5a5; border-radius: 4px; border: 1px solid #7f1d1d;"
    } else {
        "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;"
    };

    rsx! {
        div {
            style: "{style}",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
