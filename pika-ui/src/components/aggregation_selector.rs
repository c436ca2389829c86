//! Segmented button group for choosing how metric samples are aggregated.

use crate::classes::ClassList;
use crate::metrics::{AggregationKind, AggregationOption};
use crate::theme::Variant;
use dioxus::prelude::*;

const CONTAINER_BASE: &str = "flex gap-2 p-1 rounded-lg border";
const BUTTON_BASE: &str =
    "px-4 py-1.5 rounded-md text-xs font-medium transition-all font-mono cursor-pointer whitespace-nowrap";

/// Props for AggregationSelector
#[derive(Props, Clone, PartialEq)]
pub struct AggregationSelectorProps {
    /// Currently selected kind, owned by the caller
    pub value: AggregationKind,
    /// Called once per click with the clicked option's value
    pub on_change: EventHandler<AggregationKind>,
    /// Options in display order
    pub options: Vec<AggregationOption>,
    #[props(default)]
    pub variant: Variant,
}

/// Resolved rendering of a selector, independent of the DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorView {
    pub container_class: String,
    pub buttons: Vec<SelectorButton>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorButton {
    pub label: String,
    pub value: AggregationKind,
    pub active: bool,
    pub class: String,
}

impl SelectorView {
    /// One button per option, in order. A button is active iff its value equals `value`.
    pub fn build(value: AggregationKind, options: &[AggregationOption], variant: Variant) -> Self {
        let palette = variant.palette();
        let buttons = options
            .iter()
            .map(|option| {
                let active = option.value == value;
                SelectorButton {
                    label: option.label.clone(),
                    value: option.value,
                    active,
                    class: ClassList::new(BUTTON_BASE)
                        .either(active, palette.active, palette.inactive)
                        .build(),
                }
            })
            .collect();

        Self {
            container_class: ClassList::new(CONTAINER_BASE).with(palette.container).build(),
            buttons,
        }
    }
}

impl SelectorButton {
    /// Click path: notify the caller with this button's value.
    pub fn activate(&self, mut on_change: impl FnMut(AggregationKind)) {
        log::debug!("aggregation selector clicked: {} (active: {})", self.value, self.active);
        on_change(self.value);
    }
}

/// Horizontal group of buttons, one per aggregation option.
/// Holds no state; the caller re-renders it with the new `value` after `on_change`.
#[component]
pub fn AggregationSelector(props: AggregationSelectorProps) -> Element {
    let SelectorView {
        container_class,
        buttons,
    } = SelectorView::build(props.value, &props.options, props.variant);
    let on_change = props.on_change;

    rsx! {
        div {
            class: "{container_class}",
            for (index, button) in buttons.into_iter().enumerate() {
                {
                    let key = format!("{}-{}", index, button.value);
                    let class = button.class.clone();
                    let label = button.label.clone();
                    rsx! {
                        button {
                            key: "{key}",
                            r#type: "button",
                            class: "{class}",
                            onclick: move |_| button.activate(|value| on_change.call(value)),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
