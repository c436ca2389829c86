//! Metric panel header: title, unit line, and a trailing control slot.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelHeaderProps {
    /// Panel title
    pub title: String,
    /// Unit explanation (e.g., "Percent (%)")
    #[props(default = String::new())]
    pub unit_description: String,
    /// Controls rendered on the right, typically an `AggregationSelector`
    pub children: Element,
}

/// Header for metric panels. Title and unit on the left, `children` on the right.
#[component]
pub fn PanelHeader(props: PanelHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; display: flex; justify-content: space-between; align-items: center; gap: 12px;",
            div {
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px;",
                    "{props.title}"
                }
                if !props.unit_description.is_empty() {
                    p {
                        style: "margin: 0; font-size: 12px; opacity: 0.7;",
                        "Unit: {props.unit_description}"
                    }
                }
            }
            {props.children}
        }
    }
}
