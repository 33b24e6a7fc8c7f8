use dioxus::prelude::*;

use crate::{app::Route, ui::components::entry_card::EntryCard, util::persistence::AppStore};

#[component]
pub fn EntryListPage() -> Element {
    let store = use_context::<Signal<AppStore>>();
    let nav = use_navigator();
    let entries = store.with(|st| st.list().to_vec());
    let is_empty = entries.is_empty();

    let on_open = move |id: String| {
        nav.push(Route::EntryDetail { id });
    };

    rsx! {
        div { class: "entry-list",
            if is_empty {
                p { class: "muted", "No items yet. Tap “＋” to add one." }
            }
            for entry in entries {
                EntryCard { key: "{entry.id}", entry: entry.clone(), on_open: on_open }
            }
        }
        Link { class: "fab", to: Route::NewEntry {}, "＋" }
    }
}
