use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::EntryDraft,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::persistence::AppStore,
};

#[component]
pub fn NewEntryPage() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let mut draft = use_signal(EntryDraft::default);
    let mut saving = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let submitted = draft();
        if !submitted.has_name() {
            push_toast(toasts, ToastKind::Warning, "Give the item a name first.");
            return;
        }

        saving.set(true);
        spawn(async move {
            let mut next = store.peek().clone();
            match next.add(submitted).await {
                Ok(Some(entry)) => {
                    store.set(next);
                    draft.set(EntryDraft::default());
                    push_toast(toasts, ToastKind::Success, format!("Saved {}.", entry.name));
                    nav.replace(Route::EntryList {});
                }
                Ok(None) => {
                    push_toast(toasts, ToastKind::Warning, "Give the item a name first.");
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to save entry");
                    push_toast(toasts, ToastKind::Error, format!("Could not save: {err}"));
                }
            }
            saving.set(false);
        });
    };

    let current = draft();

    rsx! {
        form {
            class: "entry-form",
            onsubmit: on_submit,
            input {
                class: "input",
                placeholder: "Name",
                value: "{current.name}",
                oninput: move |evt| draft.with_mut(|d| d.name = evt.value()),
            }
            input {
                class: "input",
                placeholder: "Category",
                value: "{current.category}",
                oninput: move |evt| draft.with_mut(|d| d.category = evt.value()),
            }
            input {
                class: "input",
                placeholder: "Price (R$)",
                inputmode: "decimal",
                value: "{current.price}",
                oninput: move |evt| draft.with_mut(|d| d.price = evt.value()),
            }
            input {
                class: "input",
                placeholder: "Freight (R$)",
                inputmode: "decimal",
                value: "{current.freight}",
                oninput: move |evt| draft.with_mut(|d| d.freight = evt.value()),
            }
            input {
                class: "input",
                placeholder: "Weight (kg)",
                inputmode: "decimal",
                value: "{current.weight}",
                oninput: move |evt| draft.with_mut(|d| d.weight = evt.value()),
            }
            button {
                class: "button",
                r#type: "submit",
                disabled: saving(),
                "Save"
            }
            button {
                class: "button button-secondary",
                r#type: "button",
                onclick: move |_| {
                    draft.set(EntryDraft::default());
                    nav.replace(Route::EntryList {});
                },
                "Cancel"
            }
        }
    }
}
