use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

/// Page frame: header with an optional back button, then the page body.
#[component]
pub fn Shell(title: String, show_back: bool, children: Element) -> Element {
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "app",
            header { class: "header",
                if show_back {
                    button {
                        class: "header-back",
                        onclick: move |_| {
                            nav.replace(Route::EntryList {});
                        },
                        "〈 Back"
                    }
                } else {
                    span { class: "header-placeholder" }
                }
                h1 { class: "header-title", "{title}" }
                span { class: "header-placeholder" }
            }
            main { class: "content", {children} }
            footer { class: "footer", "{APP_NAME} {version}" }
        }
    }
}
