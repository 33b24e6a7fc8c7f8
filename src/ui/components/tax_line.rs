use dioxus::prelude::*;

use crate::ui::format;

#[component]
pub fn TaxLine(label: String, amount: f64, emphasis: Option<bool>) -> Element {
    let class = if emphasis.unwrap_or(false) {
        "tax-line tax-line-strong"
    } else {
        "tax-line"
    };
    let value = format::currency(amount);

    rsx! {
        div {
            class: "{class}",
            span { "{label}" }
            span { class: "tax-line-value", "{value}" }
        }
    }
}
