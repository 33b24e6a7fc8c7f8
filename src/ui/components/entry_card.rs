use dioxus::prelude::*;

use crate::{domain::Entry, ui::format};

#[component]
pub fn EntryCard(entry: Entry, on_open: EventHandler<String>) -> Element {
    let id = entry.id.clone();
    let price = format::currency(entry.price);

    rsx! {
        div {
            class: "entry-card",
            role: "button",
            onclick: move |_| on_open.call(id.clone()),
            p { class: "entry-card-title", "{entry.name}" }
            p { class: "entry-card-text",
                "Category: {entry.category_label()} • Paid: {price}"
            }
        }
    }
}
