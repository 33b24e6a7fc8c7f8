use dioxus::prelude::*;

use crate::{
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{EntryDetailPage, EntryListPage, NewEntryPage},
        shell::Shell,
    },
    util::{
        assets,
        config::AppConfig,
        persistence::{open_entry_store, AppStore},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    EntryList {},
    #[route("/new")]
    NewEntry {},
    #[route("/entry/:id")]
    EntryDetail { id: String },
}

#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let loaded = use_resource(|| async move {
        let config = AppConfig::from_env();
        open_entry_store(&config).await.map_err(|err| {
            tracing::error!(error = %err, "failed to load entries");
            err.to_string()
        })
    });

    let body = match &*loaded.read() {
        None => rsx! { p { class: "splash", "Loading…" } },
        Some(Ok(store)) => rsx! { Workspace { store: store.clone() } },
        Some(Err(message)) => rsx! { LoadFailed { message: message.clone() } },
    };

    rsx! {
        document::Style { "{assets::main_css()}" }
        {body}
        Toast {}
    }
}

/// Owns the loaded store; pages reach it through context.
#[component]
fn Workspace(store: AppStore) -> Element {
    let store = use_signal(move || store);
    use_context_provider(|| store);

    rsx! { Router::<Route> {} }
}

#[component]
fn LoadFailed(message: String) -> Element {
    rsx! {
        div { class: "app",
            div { class: "content",
                h2 { class: "title", "Could not open saved items" }
                p { class: "muted", "{message}" }
            }
        }
    }
}

#[component]
pub fn EntryList() -> Element {
    rsx! {
        Shell { title: "Imported items".to_string(), show_back: false, EntryListPage {} }
    }
}

#[component]
pub fn NewEntry() -> Element {
    rsx! {
        Shell { title: "New item".to_string(), show_back: true, NewEntryPage {} }
    }
}

#[component]
pub fn EntryDetail(id: String) -> Element {
    rsx! {
        Shell { title: "Item details".to_string(), show_back: true, EntryDetailPage { id: id } }
    }
}
