use dioxus::prelude::*;

use crate::{
    app::Route,
    ui::{
        components::{
            tax_line::TaxLine,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        format,
    },
    util::persistence::AppStore,
};

#[component]
pub fn EntryDetailPage(id: String) -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();
    let mut removing = use_signal(|| false);

    let Some(entry) = store.with(|st| st.get(&id).cloned()) else {
        return rsx! {
            div { class: "entry-detail",
                p { class: "muted", "This item no longer exists." }
                Link { class: "button button-secondary", to: Route::EntryList {}, "Back to list" }
            }
        };
    };

    let taxes = entry.taxes();
    let price = format::currency(entry.price);
    let freight = format::currency(entry.freight);
    let weight = format::kilograms(entry.weight);

    let on_remove = move |_| {
        if removing() {
            return;
        }
        removing.set(true);
        let id = id.clone();
        spawn(async move {
            let mut next = store.peek().clone();
            match next.remove(&id).await {
                Ok(_) => {
                    store.set(next);
                    push_toast(toasts, ToastKind::Info, "Item removed.");
                    nav.replace(Route::EntryList {});
                }
                Err(err) => {
                    tracing::error!(error = %err, %id, "failed to remove entry");
                    push_toast(toasts, ToastKind::Error, format!("Could not remove: {err}"));
                }
            }
            removing.set(false);
        });
    };

    rsx! {
        div { class: "entry-detail",
            h2 { class: "title", "{entry.name}" }
            p { class: "entry-card-text", "Category: {entry.category_label()}" }
            p { class: "entry-card-text", "Price: {price}" }
            p { class: "entry-card-text", "Freight: {freight}" }
            p { class: "entry-card-text", "Weight: {weight}" }

            h3 { class: "section-title", "= Tax estimate =" }
            TaxLine { label: "Import duty (60%)".to_string(), amount: taxes.import_duty }
            TaxLine { label: "VAT (18%)".to_string(), amount: taxes.vat }
            TaxLine { label: "Financial tax (6.38%)".to_string(), amount: taxes.financial_tax }
            TaxLine {
                label: "VAT + financial tax".to_string(),
                amount: taxes.vat_and_financial(),
            }
            TaxLine {
                label: "Total with taxes".to_string(),
                amount: taxes.total,
                emphasis: Some(true),
            }

            button {
                class: "button button-danger",
                disabled: removing(),
                onclick: on_remove,
                "Delete"
            }
            Link { class: "button button-secondary", to: Route::EntryList {}, "Back" }
        }
    }
}
