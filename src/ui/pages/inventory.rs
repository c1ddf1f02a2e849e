use dioxus::prelude::*;

use crate::{
    domain::{
        classify_item, off_search_url, resolve_scanned_item, validate_item_name,
        walmart_search_url, AppState, CancelFlag, Classification,
    },
    infra::{
        camera::{NoCamera, NoopDecoder},
        off::OpenFoodFactsClient,
    },
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::browser,
};

#[component]
pub fn InventoryPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut item_input = use_signal(String::new);
    let mut selected_entry = use_signal(|| None::<String>);
    let scan_cancel = use_signal(|| None::<CancelFlag>);

    let entries = state.with(|st| st.inventory.entries().to_vec());
    let selected_id = selected_entry();

    let on_add = {
        let state = state.clone();
        let toasts = toasts.clone();
        let item_input = item_input.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let item = item_input();
            if let Err(error) = validate_item_name(&item) {
                push_toast(toasts.clone(), ToastKind::Error, error.to_string());
                return;
            }

            let mut state = state.clone();
            let toasts = toasts.clone();
            let mut item_input = item_input.clone();
            spawn(async move {
                let classification = match OpenFoodFactsClient::new() {
                    Ok(client) => classify_item(&client, &item).await,
                    Err(error) => {
                        println!("[inventory] nutrition client unavailable: {error}");
                        Classification::Unknown
                    }
                };

                let added = state.with_mut(|st| st.inventory.add(&item, classification));
                match added {
                    Ok(_) => item_input.set(String::new()),
                    Err(error) => {
                        push_toast(toasts.clone(), ToastKind::Error, error.to_string());
                    }
                }
            });
        }
    };

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let mut selected_entry = selected_entry.clone();
        move |_| {
            let selected = selected_entry();
            let removed = state.with_mut(|st| st.inventory.remove(selected.as_deref()));
            match removed {
                Ok(_) => selected_entry.set(None),
                Err(error) => push_toast(toasts.clone(), ToastKind::Error, error.to_string()),
            }
        }
    };

    let on_scan = {
        let toasts = toasts.clone();
        let item_input = item_input.clone();
        let scan_cancel = scan_cancel.clone();
        move |_| {
            if scan_cancel().is_some() {
                return;
            }
            let cancel = CancelFlag::default();
            let mut scan_cancel = scan_cancel.clone();
            scan_cancel.set(Some(cancel.clone()));

            let toasts = toasts.clone();
            let mut item_input = item_input.clone();
            spawn(async move {
                let Ok(client) = OpenFoodFactsClient::new() else {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Failed to initialise the product lookup client.",
                    );
                    scan_cancel.set(None);
                    return;
                };

                let mut camera = NoCamera;
                let scanned =
                    resolve_scanned_item(&mut camera, &NoopDecoder, &client, &cancel).await;
                scan_cancel.set(None);

                match scanned {
                    Ok(Some(name)) => item_input.set(name),
                    // A cancelled scan ends silently
                    Ok(None) => {}
                    Err(error) => {
                        push_toast(toasts.clone(), ToastKind::Error, error.to_string());
                    }
                }
            });
        }
    };

    let on_cancel_scan = {
        let scan_cancel = scan_cancel.clone();
        move |_| {
            if let Some(cancel) = scan_cancel() {
                cancel.cancel();
            }
        }
    };

    let on_walmart = {
        let toasts = toasts.clone();
        let item_input = item_input.clone();
        move |_| {
            let item = item_input();
            match validate_item_name(&item) {
                Ok(()) => browser::open_url(&walmart_search_url(&item)),
                Err(error) => push_toast(toasts.clone(), ToastKind::Error, error.to_string()),
            }
        }
    };

    let on_open_food_facts = {
        let toasts = toasts.clone();
        let item_input = item_input.clone();
        move |_| {
            let item = item_input();
            match validate_item_name(&item) {
                Ok(()) => browser::open_url(&off_search_url(&item)),
                Err(error) => push_toast(toasts.clone(), ToastKind::Error, error.to_string()),
            }
        }
    };

    rsx! {
        div { class: "page",
            form { class: "panel", onsubmit: on_add,
                div { class: "field-row",
                    label { class: "field-label", "Food Item" }
                    input {
                        class: "text-input",
                        value: item_input(),
                        oninput: move |evt| item_input.set(evt.value().to_string()),
                        placeholder: "e.g. rolled oats",
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Add Item" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: on_remove,
                        "Remove Item"
                    }
                    if scan_cancel().is_some() {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: on_cancel_scan,
                            "Cancel Scan"
                        }
                    } else {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: on_scan,
                            "Scan Barcode"
                        }
                    }
                }
                div { class: "field-row",
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: on_walmart,
                        "Search on Walmart"
                    }
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: on_open_food_facts,
                        "Search on Open Food Facts"
                    }
                }
            }

            section { class: "panel",
                h2 { class: "panel-title", "Inventory" }
                if entries.is_empty() {
                    p { class: "empty-note", "Nothing tracked yet. Add a food item above." }
                } else {
                    ul { class: "result-list",
                        for entry in entries {
                            li {
                                key: "{entry.id}",
                                class: entry_class(&entry.classification, selected_id.as_deref() == Some(entry.id.as_str())),
                                onclick: {
                                    let id = entry.id.clone();
                                    let mut selected_entry = selected_entry.clone();
                                    move |_| selected_entry.set(Some(id.clone()))
                                },
                                span { class: "result-name", "{entry.name}" }
                                span { class: "entry-tag", "{entry.classification.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn entry_class(classification: &Classification, selected: bool) -> String {
    let tint = match classification {
        Classification::Green => "entry-green",
        Classification::Red => "entry-red",
        Classification::Unknown => "entry-unknown",
    };
    if selected {
        format!("result-row {tint} entry-selected")
    } else {
        format!("result-row {tint}")
    }
}
